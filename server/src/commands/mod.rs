//! Command Routing
//!
//! Maps command names to handlers. The registry is assembled once at startup
//! and frozen into a [`CommandRouter`], which is only ever read while serving.

pub mod dice;
pub mod handlers;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};
use tumbler_common::{Command, InteractionResponse};

pub use dice::DiceSpec;
pub use handlers::CommandHandler;

use crate::interactions::{InteractionError, InteractionResult};

/// Registry configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two handlers were registered under the same name.
    #[error("Duplicate command registration: {0}")]
    DuplicateName(String),
}

/// Per-request values handlers may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Application ID from configuration.
    pub application_id: String,
    /// Guild the command came from, if any.
    pub guild_id: Option<String>,
    /// Channel the command came from, if any.
    pub channel_id: Option<String>,
}

impl CommandContext {
    /// Context with no guild or channel.
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            guild_id: None,
            channel_id: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, guild_id: Option<String>, channel_id: Option<String>) -> Self {
        self.guild_id = guild_id;
        self.channel_id = channel_id;
        self
    }
}

/// Name and description of a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: &'static str,
}

/// Mutable registry used while building the router.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any existing entry.
    ///
    /// Returns the handler that was replaced, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: CommandHandler,
    ) -> Option<CommandHandler> {
        let name = name.into();
        let previous = self.handlers.insert(name.clone(), handler);
        if let Some(previous) = previous {
            warn!(command = %name, ?previous, ?handler, "Command registration replaced");
        }
        previous
    }

    /// Register `handler` under `name`, failing if the name is taken.
    pub fn try_register(
        &mut self,
        name: impl Into<String>,
        handler: CommandHandler,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    /// Freeze the registry.
    pub fn build(self) -> CommandRouter {
        CommandRouter {
            handlers: self.handlers,
        }
    }
}

/// Read-only command lookup.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandRouter {
    /// Router with every built-in command under its canonical name.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = CommandRegistry::new();
        for handler in CommandHandler::ALL {
            registry.try_register(handler.name(), handler)?;
        }
        Ok(registry.build())
    }

    /// Handler registered under `name`. Exact, case-sensitive match.
    pub fn get(&self, name: &str) -> Option<CommandHandler> {
        self.handlers.get(name).copied()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered commands, sorted by name.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        let mut descriptors: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, handler)| CommandDescriptor {
                name: name.clone(),
                description: handler.description(),
            })
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Dispatch `command` to its handler.
    ///
    /// An unregistered name is an ordinary 400 outcome, not a fault.
    pub fn handle(
        &self,
        command: &Command,
        ctx: &CommandContext,
    ) -> InteractionResult<InteractionResponse> {
        let Some(handler) = self.get(&command.name) else {
            warn!(command = %command.name, "No handler registered for command");
            return Err(InteractionError::UnknownCommand(command.name.clone()));
        };

        debug!(command = %command.name, ?handler, "Dispatching command");
        handler.handle(command, ctx)
    }
}
