//! # Game State
//!
//! Typed, read-only snapshot of the host engine's story variables.
//! This crate is the single source of truth for the shape of the state that
//! narrative requirements read, and does not contain any requirement logic.

pub mod companions;
pub mod error;
pub mod provisions;
pub mod state;
pub mod timeline;

pub use companions::*;
pub use error::*;
pub use provisions::*;
pub use state::*;
pub use timeline::*;
