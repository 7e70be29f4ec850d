//! Built-in Command Handlers
//!
//! Each handler is a pure function of the command and its context. Handlers
//! share no state; randomness comes from the thread-local generator.

use std::fmt::Write as _;

use rand::Rng;
use tracing::{debug, warn};
use tumbler_common::{Command, Embed, InteractionResponse, MessageData, MessageFlags};

use super::dice::{self, DiceSpec};
use super::CommandContext;
use crate::interactions::{InteractionError, InteractionResult};

/// Authorization endpoint used to build invite links.
const AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Largest roll accepted in one command; keeps the reply within one message.
pub const MAX_DICE_PER_ROLL: u32 = 50;

/// First line of a roll reply.
pub const ROLL_HEADER: &str = ":game_die: Rolling your dice... :game_die:";

/// Prefix of each per-die line in a roll reply.
pub const ROLL_LINE_PREFIX: &str = ":white_small_square:";

/// The closed set of commands this bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandHandler {
    /// Connection test.
    Ping,
    /// Bot invitation link.
    Invite,
    /// Coin flip.
    Flip,
    /// Dice roll in `XdN` notation.
    Roll,
}

impl CommandHandler {
    /// Every built-in handler.
    pub const ALL: [Self; 4] = [Self::Ping, Self::Invite, Self::Flip, Self::Roll];

    /// Canonical command name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Invite => "invite",
            Self::Flip => "flip",
            Self::Roll => "roll",
        }
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ping => "Test the bot connection.",
            Self::Invite => "Get an invitation link for this bot.",
            Self::Flip => "Flip a coin.",
            Self::Roll => "Roll some dice.",
        }
    }

    /// Produce the reply for `command`.
    pub fn handle(
        self,
        command: &Command,
        ctx: &CommandContext,
    ) -> InteractionResult<InteractionResponse> {
        match self {
            Self::Ping => Ok(ping()),
            Self::Invite => Ok(invite(ctx)),
            Self::Flip => Ok(flip(&mut rand::thread_rng())),
            Self::Roll => roll(&mut rand::thread_rng(), command),
        }
    }
}

/// Fixed connection-OK reply.
pub fn ping() -> InteractionResponse {
    InteractionResponse::ChannelMessage(
        MessageData::new("PONG")
            .with_tts(false)
            .with_embeds(Vec::<Embed>::new()),
    )
}

/// Invite link for the configured application, visible only to the invoker.
pub fn invite(ctx: &CommandContext) -> InteractionResponse {
    let link = invite_link(&ctx.application_id);
    InteractionResponse::ChannelMessage(
        MessageData::new(link).with_flags(MessageFlags::EPHEMERAL),
    )
}

/// Build the authorization URL for `application_id`.
pub fn invite_link(application_id: &str) -> String {
    format!("{AUTHORIZE_URL}?client_id={application_id}&scope=applications.commands%20bot")
}

/// Heads or tails, uniformly.
pub fn flip<R: Rng>(rng: &mut R) -> InteractionResponse {
    let side = if rng.gen_bool(0.5) { "Heads" } else { "Tails" };
    InteractionResponse::message(format!(":thumbsup: :coin: {side}!"))
}

/// Roll the dice described by the first option.
pub fn roll<R: Rng>(rng: &mut R, command: &Command) -> InteractionResult<InteractionResponse> {
    let Some(option) = command.first_option() else {
        warn!(command = %command.name, "Roll invoked without options");
        return Err(InteractionError::MissingOptions);
    };

    let spec = DiceSpec::parse(&option.value)
        .filter(|spec| spec.count() <= MAX_DICE_PER_ROLL)
        .ok_or_else(|| {
            warn!(notation = %option.value, "Unable to parse dice notation");
            InteractionError::UnparsableOptions
        })?;

    let rolls = dice::roll_with(rng, spec.count(), spec.faces());
    debug!(%spec, ?rolls, "Rolled dice");

    Ok(InteractionResponse::message(format_rolls(&rolls)))
}

/// Header line followed by one line per roll, each newline-terminated.
pub fn format_rolls(rolls: &[u32]) -> String {
    let mut message = format!("{ROLL_HEADER}\n");
    for value in rolls {
        let _ = writeln!(message, "{ROLL_LINE_PREFIX} {value}");
    }
    message
}
