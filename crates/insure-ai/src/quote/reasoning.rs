use super::domain::{QuoteRequest, RiskLevel};

/// Renders the human-readable rationale: one remark per signal, joined with
/// single spaces.
pub(crate) fn explanation(request: &QuoteRequest, score: u64, level: RiskLevel) -> String {
    let mut remarks: Vec<String> = Vec::with_capacity(4);

    let age_remark = if request.age < 25 {
        "Young driver increases statistical risk."
    } else if request.age > 60 {
        "Senior driver slightly increases reaction risk."
    } else {
        "Driver age is moderate risk."
    };
    remarks.push(age_remark.to_string());

    if request.accidents == 0 {
        remarks.push("Clean accident history lowers risk.".to_string());
    } else {
        remarks.push(format!(
            "Accident history ({}) increases risk.",
            request.accidents
        ));
    }

    remarks.push(format!(
        "Vehicle {} worth ₹{} impacts exposure.",
        request.vehicle_type.label(),
        group_thousands(request.vehicle_value)
    ));

    remarks.push(format!(
        "Risk score {} places customer in {} category.",
        score,
        level.label()
    ));

    remarks.join(" ")
}

// Presentation only: western 3-digit grouping of the integer part.
fn group_thousands(value: f64) -> String {
    let digits = (value.trunc() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
