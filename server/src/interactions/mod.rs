//! Interactions Endpoint
//!
//! Signed webhook events from the chat platform: signature verification,
//! event classification and the HTTP handler that ties them together.

pub mod dispatch;
pub mod error;
pub(crate) mod handlers;
pub mod signing;

use axum::routing::any;
use axum::Router;

pub use dispatch::InteractionDispatcher;
pub use error::{InteractionError, InteractionResult};
pub use signing::{verify_request, RequestVerifier};

use crate::api::AppState;

/// Create the interactions router.
///
/// Routes:
/// - ANY / - POST handles an interaction, every other method is a liveness probe
///
/// Unmatched paths fall back to the same handler.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(handlers::handle_request))
        .fallback(handlers::handle_request)
}
