//! Interactions HTTP handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::instrument;

use super::signing::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::api::AppState;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Handle a request to the interactions endpoint.
///
/// Non-POST requests are liveness probes and always answer `200 OK`.
#[instrument(
    name = "interactions.request",
    skip_all,
    fields(method = %method)
)]
pub async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return (StatusCode::OK, "OK").into_response();
    }

    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);

    match state.dispatcher.dispatch(signature, timestamp, &body) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(err) => err.into_response(),
    }
}
