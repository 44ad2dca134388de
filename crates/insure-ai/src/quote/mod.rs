pub mod domain;
mod premium;
mod reasoning;
pub mod router;
mod score;

pub use domain::{
    QuotePayload, QuoteRequest, QuoteRequestError, QuoteResult, RiskLevel, VehicleType,
    DEFAULT_VEHICLE_VALUE,
};
pub use router::{quote_router, ENGINE_BANNER};

/// Derives score, category, premium, and explanation for one request.
/// Deterministic: identical requests always produce identical results.
pub fn compute_quote(request: &QuoteRequest) -> QuoteResult {
    let risk_score = score::risk_score(request);
    let risk_level = score::risk_level(risk_score);
    let estimated_premium = premium::estimated_premium(request);
    let ai_explanation = reasoning::explanation(request, risk_score, risk_level);

    QuoteResult {
        risk_score,
        risk_level,
        estimated_premium,
        ai_explanation,
    }
}
