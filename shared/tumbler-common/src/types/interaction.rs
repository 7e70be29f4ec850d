//! Inbound Interaction Types
//!
//! Events delivered by the platform to the webhook endpoint.

use serde::{Deserialize, Serialize};

/// Interaction discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    /// Connectivity handshake sent by the platform to validate the endpoint.
    Ping,
    /// A user invoked a command.
    ApplicationCommand,
    /// Any other interaction kind (components, autocomplete, modals, ...).
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Other(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

/// Command kind, as reported in the command payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CommandType {
    /// Slash command typed into the chat input.
    ChatInput,
    /// Context-menu command on a user.
    User,
    /// Context-menu command on a message.
    Message,
    /// Unrecognised command kind.
    Other(u8),
}

impl From<u8> for CommandType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            other => Self::Other(other),
        }
    }
}

impl From<CommandType> for u8 {
    fn from(value: CommandType) -> Self {
        match value {
            CommandType::ChatInput => 1,
            CommandType::User => 2,
            CommandType::Message => 3,
            CommandType::Other(other) => other,
        }
    }
}

/// A signed interaction event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction ID.
    pub id: String,
    /// Application the interaction is addressed to.
    pub application_id: String,
    /// Event discriminator.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Event payload. Absent on handshakes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Guild the interaction was sent from (absent in DMs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    /// Channel the interaction was sent from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl Interaction {
    /// Decode the payload as an invoked command.
    ///
    /// Fails if the payload is missing or does not match the command schema.
    pub fn command(&self) -> Result<Command, serde_json::Error> {
        let Some(data) = &self.data else {
            return Err(<serde_json::Error as serde::de::Error>::missing_field(
                "data",
            ));
        };
        Command::deserialize(data)
    }
}

/// An invoked command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Registered command ID.
    pub id: String,
    /// Command kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandType>,
    /// Owning application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Command name, matched exactly against the registry.
    pub name: String,
    /// Arguments in the order the user supplied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandOption>>,
}

impl Command {
    /// First supplied argument, if any.
    pub fn first_option(&self) -> Option<&CommandOption> {
        self.options.as_deref().and_then(<[CommandOption]>::first)
    }
}

/// A named command argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Raw option value.
    pub value: String,
}
