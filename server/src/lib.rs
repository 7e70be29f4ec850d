//! Tumbler Server
//!
//! Webhook endpoint for the chat platform's interaction protocol: verifies
//! signed events, acknowledges handshakes and answers a small set of
//! commands (ping, invite, coin flip, dice rolls).

pub mod api;
pub mod commands;
pub mod config;
pub mod interactions;
pub mod telemetry;
