use clap::Args;
use insure_ai::error::AppError;
use insure_ai::quote::{compute_quote, QuotePayload, QuoteRequest, ENGINE_BANNER};
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Driver age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Number of prior accidents
    #[arg(long, default_value_t = 0)]
    pub(crate) accidents: u32,
    /// Vehicle type: Car, Bike, SUV, or Truck (anything else rates as Unknown)
    #[arg(long, default_value = "Car")]
    pub(crate) vehicle_type: String,
    /// Vehicle value in whole currency units
    #[arg(long, default_value_t = 500_000.0)]
    pub(crate) vehicle_value: f64,
    /// Print the response envelope as JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let payload = QuotePayload {
        age: Some(f64::from(args.age)),
        accidents: Some(f64::from(args.accidents)),
        vehicle_type: Some(args.vehicle_type),
        vehicle_value: Some(args.vehicle_value),
    };
    let request = QuoteRequest::from_payload(payload)?;
    let quote = compute_quote(&request);

    if args.json {
        let envelope = json!({
            "message": ENGINE_BANNER,
            "riskScore": quote.risk_score,
            "riskLevel": quote.risk_level,
            "estimatedPremium": quote.estimated_premium,
            "aiExplanation": quote.ai_explanation,
        });
        println!("{envelope}");
        return Ok(());
    }

    println!("Insurance quote");
    println!(
        "  driver: age {}, {} accident(s), {} worth {}",
        request.age,
        request.accidents,
        request.vehicle_type.label(),
        request.vehicle_value
    );
    println!("  risk score: {}", quote.risk_score);
    println!("  risk level: {}", quote.risk_level.label());
    println!("  estimated premium: {}", quote.estimated_premium);
    println!("  rationale: {}", quote.ai_explanation);

    Ok(())
}
