//! The requirements engraved on the smaragdine tablet.

use serde::{Deserialize, Serialize};

/// One tablet requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Requirement {
    Speedrun,
    WorldRecord,
    Tas,
    Otp,
    SinglePlayer,
    Gourmet,
}

impl Requirement {
    /// Every requirement, in the order the tablet lists them.
    pub const ALL: [Requirement; 6] = [
        Requirement::Speedrun,
        Requirement::WorldRecord,
        Requirement::Tas,
        Requirement::Otp,
        Requirement::SinglePlayer,
        Requirement::Gourmet,
    ];

    /// In-game label.
    pub fn name(&self) -> &'static str {
        match self {
            Requirement::Speedrun => "Speedrun",
            Requirement::WorldRecord => "World Record",
            Requirement::Tas => "TAS",
            Requirement::Otp => "OTP",
            Requirement::SinglePlayer => "Single Player",
            Requirement::Gourmet => "Gourmet",
        }
    }

    /// Player-facing condition text.
    pub fn description(&self) -> &'static str {
        match self {
            Requirement::Speedrun => "At least 600 days remain before the spectre of the end.",
            Requirement::WorldRecord => "At least 710 days remain before the spectre of the end.",
            Requirement::Tas => "At least 750 days remain before the spectre of the end.",
            Requirement::Otp => "Exactly one companion has ever joined the expedition.",
            Requirement::SinglePlayer => "No companion has ever joined the expedition.",
            Requirement::Gourmet => "Every food and drink in the Abyss has been tasted.",
        }
    }

    /// The timer tier this requirement checks, if it is timer based.
    pub fn timer_tier(&self) -> Option<TimerTier> {
        match self {
            Requirement::Speedrun => Some(TimerTier::Speedrun),
            Requirement::WorldRecord => Some(TimerTier::WorldRecord),
            Requirement::Tas => Some(TimerTier::Tas),
            _ => None,
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Remaining-days tiers, from loosest to strictest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimerTier {
    Speedrun,
    WorldRecord,
    Tas,
}

impl TimerTier {
    pub const ALL: [TimerTier; 3] = [TimerTier::Speedrun, TimerTier::WorldRecord, TimerTier::Tas];

    /// Days that must remain on the spectre's timer.
    pub fn default_threshold(&self) -> i64 {
        match self {
            TimerTier::Speedrun => 600,
            TimerTier::WorldRecord => 710,
            TimerTier::Tas => 750,
        }
    }
}
