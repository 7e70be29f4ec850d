//! Protocol Types

pub mod interaction;
pub mod response;

pub use interaction::*;
pub use response::*;
