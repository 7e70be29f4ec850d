//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

use crate::{
    commands::CommandRouter,
    config::Config,
    interactions::{self, signing::PublicKeyError, InteractionDispatcher},
};

/// Shared application state.
///
/// Everything here is built before the first request and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Interaction pipeline (verifier + frozen command router)
    pub dispatcher: Arc<InteractionDispatcher>,
}

impl AppState {
    /// Create new application state, parsing the configured public key.
    pub fn new(config: Config, commands: CommandRouter) -> Result<Self, PublicKeyError> {
        let dispatcher = InteractionDispatcher::from_config(&config, Arc::new(commands))?;
        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        })
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    Router::new()
        .merge(interactions::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_size))
        // State
        .with_state(state)
}
