use super::domain::{QuoteRequest, RiskLevel, VehicleType};

/// Composite risk score, additive over four independent bands.
pub(crate) fn risk_score(request: &QuoteRequest) -> u64 {
    age_points(request.age)
        + accident_points(request.accidents)
        + value_points(request.vehicle_value)
        + type_points(request.vehicle_type)
}

// Band order matters: `>60` is only reached once `<40` has failed, so ages
// 40..=60 take the +10 default.
fn age_points(age: u32) -> u64 {
    if age < 25 {
        25
    } else if age < 40 {
        15
    } else if age > 60 {
        20
    } else {
        10
    }
}

fn accident_points(accidents: u32) -> u64 {
    20 * u64::from(accidents)
}

fn value_points(vehicle_value: f64) -> u64 {
    if vehicle_value > 1_500_000.0 {
        25
    } else if vehicle_value > 700_000.0 {
        15
    } else if vehicle_value > 300_000.0 {
        10
    } else {
        5
    }
}

fn type_points(vehicle_type: VehicleType) -> u64 {
    match vehicle_type {
        VehicleType::Car => 10,
        VehicleType::Bike => 18,
        VehicleType::Suv => 15,
        VehicleType::Truck => 25,
        VehicleType::Unknown => 10,
    }
}

pub(crate) fn risk_level(score: u64) -> RiskLevel {
    if score < 40 {
        RiskLevel::Low
    } else if score < 75 {
        RiskLevel::Moderate
    } else if score < 110 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bands_match_underwriting_table() {
        assert_eq!(age_points(24), 25);
        assert_eq!(age_points(25), 15);
        assert_eq!(age_points(39), 15);
        // The 40..=60 range falls to the default, not the senior band.
        assert_eq!(age_points(40), 10);
        assert_eq!(age_points(50), 10);
        assert_eq!(age_points(60), 10);
        assert_eq!(age_points(61), 20);
    }

    #[test]
    fn accident_points_scale_linearly() {
        assert_eq!(accident_points(0), 0);
        assert_eq!(accident_points(1), 20);
        assert_eq!(accident_points(7), 140);
    }

    #[test]
    fn value_band_edges_are_exclusive() {
        assert_eq!(value_points(300_000.0), 5);
        assert_eq!(value_points(300_001.0), 10);
        assert_eq!(value_points(700_000.0), 10);
        assert_eq!(value_points(700_001.0), 15);
        assert_eq!(value_points(1_500_000.0), 15);
        assert_eq!(value_points(1_500_001.0), 25);
    }

    #[test]
    fn unknown_vehicle_scores_like_a_car() {
        assert_eq!(type_points(VehicleType::Unknown), type_points(VehicleType::Car));
        assert_eq!(type_points(VehicleType::Truck), 25);
        assert_eq!(type_points(VehicleType::Bike), 18);
    }

    #[test]
    fn level_thresholds_are_monotone() {
        assert_eq!(risk_level(0), RiskLevel::Low);
        assert_eq!(risk_level(39), RiskLevel::Low);
        assert_eq!(risk_level(40), RiskLevel::Moderate);
        assert_eq!(risk_level(74), RiskLevel::Moderate);
        assert_eq!(risk_level(75), RiskLevel::High);
        assert_eq!(risk_level(109), RiskLevel::High);
        assert_eq!(risk_level(110), RiskLevel::VeryHigh);

        let mut previous = risk_level(0);
        for score in 0..200 {
            let level = risk_level(score);
            assert!(level >= previous, "level dropped at score {score}");
            previous = level;
        }
    }
}
