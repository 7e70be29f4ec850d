//! Interaction Response Types
//!
//! Reply payloads returned to the platform as the HTTP response body.

use bitflags::bitflags;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire value of a handshake acknowledgment.
pub const RESPONSE_PONG: u8 = 1;

/// Wire value of a message reply.
pub const RESPONSE_CHANNEL_MESSAGE: u8 = 4;

bitflags! {
    /// Message flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u64 {
        /// Only the invoking user can see the message.
        const EPHEMERAL = 1 << 6;
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_bits_retain)
    }
}

/// Rich embed attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

/// Body of a message reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    /// Message text.
    pub content: String,
    /// Text-to-speech.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    /// Rich embeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Visibility and rendering flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
}

impl MessageData {
    /// Plain message with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Whether only the invoking user will see this message.
    pub fn is_ephemeral(&self) -> bool {
        self.flags
            .is_some_and(|flags| flags.contains(MessageFlags::EPHEMERAL))
    }
}

/// Reply to an interaction.
///
/// Serializes as `{"type":1}` or `{"type":4,"data":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResponse {
    /// Handshake acknowledgment.
    Pong,
    /// Message posted in the channel the command came from.
    ChannelMessage(MessageData),
}

impl InteractionResponse {
    /// Message reply with the given text.
    pub fn message(content: impl Into<String>) -> Self {
        Self::ChannelMessage(MessageData::new(content))
    }

    /// Wire discriminator.
    pub const fn kind(&self) -> u8 {
        match self {
            Self::Pong => RESPONSE_PONG,
            Self::ChannelMessage(_) => RESPONSE_CHANNEL_MESSAGE,
        }
    }

    /// Message body, if this is a message reply.
    pub const fn data(&self) -> Option<&MessageData> {
        match self {
            Self::Pong => None,
            Self::ChannelMessage(data) => Some(data),
        }
    }
}

impl Serialize for InteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pong => {
                let mut state = serializer.serialize_struct("InteractionResponse", 1)?;
                state.serialize_field("type", &self.kind())?;
                state.end()
            }
            Self::ChannelMessage(data) => {
                let mut state = serializer.serialize_struct("InteractionResponse", 2)?;
                state.serialize_field("type", &self.kind())?;
                state.serialize_field("data", data)?;
                state.end()
            }
        }
    }
}
