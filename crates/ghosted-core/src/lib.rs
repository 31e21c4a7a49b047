//! ghosted-core
//!
//! Pure domain types and prompt construction. No HTTP or provider
//! dependency — this is the shared vocabulary of the Ghosted system.

pub mod error;
pub mod message;
pub mod parts;
pub mod profile;
pub mod prompts;
