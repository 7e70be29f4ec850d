//! Tumbler Common Library
//!
//! Wire types for the chat platform's interaction protocol, shared by
//! everything that receives or synthesizes interaction payloads.

pub mod types;

pub use types::*;
