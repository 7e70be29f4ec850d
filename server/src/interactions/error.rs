//! Interaction Error Types
//!
//! Every failure is a terminal HTTP response with a plain-text body. None of
//! them affect the handling of later requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that end an interaction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// Signature or timestamp missing, malformed or invalid.
    #[error("Bad request signature.")]
    AuthenticationFailure,

    /// Body could not be decoded, or the interaction type is unsupported.
    #[error("bad request")]
    DecodeFailure,

    /// No handler is registered under this command name.
    #[error("no handler for {0}")]
    UnknownCommand(String),

    /// The command requires options but none were supplied.
    #[error("Invalid command options.")]
    MissingOptions,

    /// The supplied options could not be interpreted.
    #[error("Unable to parse command options.")]
    UnparsableOptions,
}

impl InteractionError {
    /// HTTP status for this error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailure => StatusCode::UNAUTHORIZED,
            Self::DecodeFailure
            | Self::UnknownCommand(_)
            | Self::MissingOptions
            | Self::UnparsableOptions => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Result type for interaction handling.
pub type InteractionResult<T> = Result<T, InteractionError>;
