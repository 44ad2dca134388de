use super::domain::{QuoteRequest, VehicleType};

/// Fraction of the vehicle value charged before risk adjustment.
pub(crate) const BASE_RATE: f64 = 0.025;

/// Flat surcharge applied after all risk factors.
pub(crate) const TAX_RATE: f64 = 0.18;

/// Premium in whole currency units: base rate over the vehicle value, five
/// multiplicative risk factors, then tax, rounded to the nearest unit.
pub(crate) fn estimated_premium(request: &QuoteRequest) -> u64 {
    let raw_premium = request.vehicle_value * BASE_RATE;

    let adjusted = raw_premium
        * age_risk_factor(request.age)
        * accident_risk_factor(request.accidents)
        * vehicle_type_factor(request.vehicle_type)
        * depreciation_factor(request.vehicle_value)
        * behavior_penalty(request.accidents, request.age);

    let tax = adjusted * TAX_RATE;
    (adjusted + tax).round() as u64
}

fn age_risk_factor(age: u32) -> f64 {
    if age < 23 {
        1.7
    } else if age < 30 {
        1.4
    } else if age < 45 {
        1.1
    } else if age < 60 {
        1.0
    } else {
        1.3
    }
}

fn accident_risk_factor(accidents: u32) -> f64 {
    1.0 + 0.35 * f64::from(accidents)
}

fn vehicle_type_factor(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Car => 1.0,
        VehicleType::Bike => 1.3,
        VehicleType::Suv => 1.25,
        VehicleType::Truck => 1.7,
        VehicleType::Unknown => 1.0,
    }
}

fn depreciation_factor(vehicle_value: f64) -> f64 {
    if vehicle_value < 300_000.0 {
        0.9
    } else if vehicle_value < 700_000.0 {
        1.0
    } else if vehicle_value < 1_500_000.0 {
        1.2
    } else {
        1.4
    }
}

// Accident count dominates age when both could apply.
fn behavior_penalty(accidents: u32, age: u32) -> f64 {
    if accidents >= 3 {
        1.4
    } else if accidents == 2 {
        1.25
    } else if accidents == 1 {
        1.1
    } else if age < 25 {
        1.15
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: u32, accidents: u32, vehicle_type: VehicleType, vehicle_value: f64) -> QuoteRequest {
        QuoteRequest {
            age,
            accidents,
            vehicle_type,
            vehicle_value,
        }
    }

    #[test]
    fn clean_mid_band_car_prices_at_sixteen_thousand() {
        // 500000 * 0.025 * 1.1 * 1.18 = 16225 exactly.
        let premium = estimated_premium(&request(30, 0, VehicleType::Car, 500_000.0));
        assert_eq!(premium, 16_225);
    }

    #[test]
    fn age_factor_band_edges() {
        assert_eq!(age_risk_factor(22), 1.7);
        assert_eq!(age_risk_factor(23), 1.4);
        assert_eq!(age_risk_factor(29), 1.4);
        assert_eq!(age_risk_factor(30), 1.1);
        assert_eq!(age_risk_factor(44), 1.1);
        assert_eq!(age_risk_factor(45), 1.0);
        assert_eq!(age_risk_factor(59), 1.0);
        assert_eq!(age_risk_factor(60), 1.3);
    }

    #[test]
    fn accident_factor_is_unbounded_linear() {
        assert_eq!(accident_risk_factor(0), 1.0);
        assert!((accident_risk_factor(2) - 1.7).abs() < 1e-9);
        assert!((accident_risk_factor(10) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn depreciation_band_edges() {
        assert_eq!(depreciation_factor(299_999.0), 0.9);
        assert_eq!(depreciation_factor(300_000.0), 1.0);
        assert_eq!(depreciation_factor(699_999.0), 1.0);
        assert_eq!(depreciation_factor(700_000.0), 1.2);
        assert_eq!(depreciation_factor(1_499_999.0), 1.2);
        assert_eq!(depreciation_factor(1_500_000.0), 1.4);
    }

    #[test]
    fn unknown_vehicle_takes_no_type_loading() {
        assert_eq!(vehicle_type_factor(VehicleType::Unknown), 1.0);
        assert_eq!(
            estimated_premium(&request(30, 0, VehicleType::Unknown, 500_000.0)),
            estimated_premium(&request(30, 0, VehicleType::Car, 500_000.0)),
        );
    }

    #[test]
    fn behavior_penalty_prefers_accident_history_over_youth() {
        assert_eq!(behavior_penalty(3, 50), 1.4);
        assert_eq!(behavior_penalty(5, 50), 1.4);
        assert_eq!(behavior_penalty(2, 20), 1.25);
        assert_eq!(behavior_penalty(1, 20), 1.1);
        assert_eq!(behavior_penalty(0, 20), 1.15);
        assert_eq!(behavior_penalty(0, 25), 1.0);
    }

    #[test]
    fn premium_strictly_increases_with_vehicle_value() {
        let mut previous = estimated_premium(&request(35, 1, VehicleType::Suv, 100_000.0));
        for value in [250_000.0, 400_000.0, 650_000.0, 900_000.0, 2_000_000.0] {
            let premium = estimated_premium(&request(35, 1, VehicleType::Suv, value));
            assert!(premium > previous, "premium not increasing at value {value}");
            previous = premium;
        }
    }
}
