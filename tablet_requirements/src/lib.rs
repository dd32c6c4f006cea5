//! # Tablet Requirements
//!
//! Decides which narrative requirements of the smaragdine tablet would be met
//! if the player picked it up right now. Every check is a pure read of a
//! [`GameState`](game_state::GameState) snapshot.
//!
//! ## Core Components
//!
//! - **predicates**: the six requirement checks with their in-game constants
//! - **requirement**: names, descriptions and timer tiers of each requirement
//! - **config**: tunable tiers and excluded companions, loaded from TOML
//! - **evaluator**: evaluates requirements under a config and builds a [`TabletReport`]

pub mod config;
pub mod evaluator;
pub mod predicates;
pub mod report;
pub mod requirement;

pub use config::*;
pub use evaluator::*;
pub use predicates::*;
pub use report::*;
pub use requirement::*;
