//! Interaction Dispatch
//!
//! Per-request pipeline: verify the signature, decode the event, then either
//! acknowledge a handshake or route a command. Nothing carries over between
//! requests.
//!
//! ```text
//! Unauthenticated --bad signature--> Rejected (401)
//!        |
//!   verified
//!        v
//!  Authenticated --PING--> AckEmitted (200, {"type":1})
//!        |       --other / undecodable--> BadRequest (400)
//!   APPLICATION_COMMAND
//!        v
//!     Routing ----> CommandRouter::handle outcome
//! ```

use std::sync::Arc;

use tracing::{debug, info, instrument, warn, Span};
use tumbler_common::{Interaction, InteractionResponse, InteractionType};

use super::error::{InteractionError, InteractionResult};
use super::signing::{PublicKeyError, RequestVerifier};
use crate::commands::{CommandContext, CommandRouter};
use crate::config::Config;

/// Authenticates, classifies and routes interactions.
#[derive(Debug, Clone)]
pub struct InteractionDispatcher {
    verifier: RequestVerifier,
    router: Arc<CommandRouter>,
    application_id: String,
}

impl InteractionDispatcher {
    #[must_use]
    pub fn new(
        verifier: RequestVerifier,
        router: Arc<CommandRouter>,
        application_id: impl Into<String>,
    ) -> Self {
        Self {
            verifier,
            router,
            application_id: application_id.into(),
        }
    }

    /// Build a dispatcher from configuration, parsing the public key.
    pub fn from_config(config: &Config, router: Arc<CommandRouter>) -> Result<Self, PublicKeyError> {
        let verifier = RequestVerifier::from_hex(&config.public_key)?;
        Ok(Self::new(verifier, router, config.application_id.clone()))
    }

    /// The command router requests are routed through.
    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    /// Handle one signed request body.
    #[instrument(
        name = "interactions.dispatch",
        skip_all,
        fields(
            interaction_id = tracing::field::Empty,
            interaction_type = tracing::field::Empty,
            command = tracing::field::Empty,
        )
    )]
    pub fn dispatch(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> InteractionResult<InteractionResponse> {
        if !self.verifier.verify(signature, timestamp, body) {
            warn!(
                has_signature = signature.is_some(),
                has_timestamp = timestamp.is_some(),
                "Rejected interaction with invalid signature"
            );
            return Err(InteractionError::AuthenticationFailure);
        }
        debug!("Interaction signature verified");

        let interaction: Interaction = serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "Failed to decode interaction");
            InteractionError::DecodeFailure
        })?;

        let span = Span::current();
        span.record("interaction_id", interaction.id.as_str());
        span.record("interaction_type", u8::from(interaction.kind));

        match interaction.kind {
            InteractionType::Ping => {
                info!("Acknowledging handshake");
                Ok(InteractionResponse::Pong)
            }
            InteractionType::ApplicationCommand => {
                let command = interaction.command().map_err(|e| {
                    warn!(error = %e, "Failed to decode command payload");
                    InteractionError::DecodeFailure
                })?;
                span.record("command", command.name.as_str());

                let ctx = CommandContext::new(self.application_id.clone())
                    .with_location(interaction.guild_id, interaction.channel_id);

                info!(
                    guild_id = ctx.guild_id.as_deref(),
                    channel_id = ctx.channel_id.as_deref(),
                    "Dispatching command"
                );
                self.router.handle(&command, &ctx)
            }
            InteractionType::Other(kind) => {
                warn!(kind, "Unsupported interaction type");
                Err(InteractionError::DecodeFailure)
            }
        }
    }
}
