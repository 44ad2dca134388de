use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::domain::{QuotePayload, QuoteRequest, QuoteResult};
use super::compute_quote;

pub const ENGINE_BANNER: &str = "Advanced AI Insurance Engine Running 🚀 - DEMO WORKING";

/// Router exposing the quote endpoint. GET and POST both serve the route so
/// legacy clients keep working.
pub fn quote_router() -> Router {
    Router::new().route(
        "/api/v1/quotes/process",
        get(process_handler).post(process_handler),
    )
}

#[derive(Debug, Serialize)]
struct QuoteResponse {
    message: &'static str,
    #[serde(flatten)]
    quote: QuoteResult,
}

pub(crate) async fn process_handler(body: Bytes) -> Response {
    let payload: QuotePayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            let payload = json!({ "message": "Invalid JSON body" });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let request = match QuoteRequest::from_payload(payload) {
        Ok(request) => request,
        Err(error) => {
            let payload = json!({
                "message": "Missing required fields",
                "detail": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let quote = compute_quote(&request);
    debug!(
        age = request.age,
        accidents = request.accidents,
        vehicle_type = request.vehicle_type.label(),
        risk_score = quote.risk_score,
        premium = quote.estimated_premium,
        "quote computed"
    );

    let response = QuoteResponse {
        message: ENGINE_BANNER,
        quote,
    };
    (StatusCode::OK, Json(response)).into_response()
}
