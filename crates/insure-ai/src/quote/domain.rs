use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_VEHICLE_VALUE: f64 = 500_000.0;

/// Vehicle classes with distinct rating behavior. Labels outside the known
/// set collapse to `Unknown`, which rates like an unremarkable vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Bike,
    Suv,
    Truck,
    Unknown,
}

impl VehicleType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Car" => Self::Car,
            "Bike" => Self::Bike,
            "SUV" => Self::Suv,
            "Truck" => Self::Truck,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Suv => "SUV",
            Self::Truck => "Truck",
            Self::Unknown => "Unknown",
        }
    }
}

/// Risk category derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Wire payload as submitted by clients. Numeric fields accept either JSON
/// numbers or numeric strings; anything else reads as absent so validation
/// can name the offending field instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    #[serde(default, deserialize_with = "lenient_number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub accidents: Option<f64>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vehicle_value: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

/// Named validation failures for a quote payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRequestError {
    MissingAge,
    NonPositiveAge,
    EmptyVehicleType,
}

impl fmt::Display for QuoteRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteRequestError::MissingAge => {
                write!(f, "age is required and must be a positive number")
            }
            QuoteRequestError::NonPositiveAge => write!(f, "age must be a positive number"),
            QuoteRequestError::EmptyVehicleType => {
                write!(f, "vehicleType must be a non-empty string")
            }
        }
    }
}

impl std::error::Error for QuoteRequestError {}

/// Validated inputs to the quote engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub age: u32,
    pub accidents: u32,
    pub vehicle_type: VehicleType,
    pub vehicle_value: f64,
}

impl QuoteRequest {
    /// Validates and coerces a wire payload. Absent `accidents` and
    /// `vehicleValue` take their defaults; a non-positive vehicle value also
    /// falls back to the default so the engine stays total.
    pub fn from_payload(payload: QuotePayload) -> Result<Self, QuoteRequestError> {
        let age = match payload.age {
            None => return Err(QuoteRequestError::MissingAge),
            Some(value) if value <= 0.0 => return Err(QuoteRequestError::NonPositiveAge),
            Some(value) => value as u32,
        };

        if let Some(label) = payload.vehicle_type.as_deref() {
            if label.trim().is_empty() {
                return Err(QuoteRequestError::EmptyVehicleType);
            }
        }
        let vehicle_type = payload
            .vehicle_type
            .as_deref()
            .map(VehicleType::from_label)
            .unwrap_or(VehicleType::Car);

        let accidents = payload
            .accidents
            .map(|value| value.max(0.0) as u32)
            .unwrap_or(0);

        let vehicle_value = match payload.vehicle_value {
            Some(value) if value > 0.0 => value,
            _ => DEFAULT_VEHICLE_VALUE,
        };

        Ok(Self {
            age,
            accidents,
            vehicle_type,
            vehicle_value,
        })
    }
}

/// Engine output for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub risk_score: u64,
    pub risk_level: RiskLevel,
    pub estimated_premium: u64,
    pub ai_explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> QuotePayload {
        serde_json::from_str(json).expect("payload parses")
    }

    #[test]
    fn accepts_numeric_strings_like_the_wire_does() {
        let request = QuoteRequest::from_payload(payload(
            r#"{"age": "30", "accidents": "2", "vehicleValue": "750000"}"#,
        ))
        .expect("valid request");
        assert_eq!(request.age, 30);
        assert_eq!(request.accidents, 2);
        assert_eq!(request.vehicle_value, 750_000.0);
    }

    #[test]
    fn missing_age_is_rejected() {
        let err = QuoteRequest::from_payload(payload(r#"{"accidents": 1}"#))
            .expect_err("age required");
        assert_eq!(err, QuoteRequestError::MissingAge);
    }

    #[test]
    fn non_numeric_age_reads_as_missing() {
        let err = QuoteRequest::from_payload(payload(r#"{"age": "twenty"}"#))
            .expect_err("age required");
        assert_eq!(err, QuoteRequestError::MissingAge);
    }

    #[test]
    fn zero_age_is_rejected_explicitly() {
        let err = QuoteRequest::from_payload(payload(r#"{"age": 0}"#)).expect_err("zero age");
        assert_eq!(err, QuoteRequestError::NonPositiveAge);
    }

    #[test]
    fn empty_vehicle_type_is_rejected() {
        let err = QuoteRequest::from_payload(payload(r#"{"age": 30, "vehicleType": "  "}"#))
            .expect_err("empty type");
        assert_eq!(err, QuoteRequestError::EmptyVehicleType);
    }

    #[test]
    fn defaults_apply_when_optional_fields_are_absent() {
        let request =
            QuoteRequest::from_payload(payload(r#"{"age": 41}"#)).expect("valid request");
        assert_eq!(request.accidents, 0);
        assert_eq!(request.vehicle_type, VehicleType::Car);
        assert_eq!(request.vehicle_value, DEFAULT_VEHICLE_VALUE);
    }

    #[test]
    fn zero_vehicle_value_falls_back_to_default() {
        let request = QuoteRequest::from_payload(payload(r#"{"age": 41, "vehicleValue": 0}"#))
            .expect("valid request");
        assert_eq!(request.vehicle_value, DEFAULT_VEHICLE_VALUE);
    }

    #[test]
    fn unrecognized_vehicle_label_maps_to_unknown() {
        assert_eq!(VehicleType::from_label("Spaceship"), VehicleType::Unknown);
        assert_eq!(VehicleType::from_label("SUV"), VehicleType::Suv);
    }

    #[test]
    fn risk_level_serializes_with_spaced_label() {
        let json = serde_json::to_string(&RiskLevel::VeryHigh).expect("serializes");
        assert_eq!(json, r#""Very High""#);
    }
}
