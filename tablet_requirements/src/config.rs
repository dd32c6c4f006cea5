//! Tunable thresholds for tablet requirements.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use game_state::CompanionId;

use crate::requirement::TimerTier;

/// Errors raised while loading a [`TabletConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Stricter tiers must not ask for fewer days than looser ones.
    #[error("timer tiers out of order: speedrun {speedrun}, world record {world_record}, tas {tas}")]
    UnorderedTiers {
        speedrun: i64,
        world_record: i64,
        tas: i64,
    },
}

/// Remaining-days threshold of each timer tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub speedrun: i64,
    pub world_record: i64,
    pub tas: i64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            speedrun: TimerTier::Speedrun.default_threshold(),
            world_record: TimerTier::WorldRecord.default_threshold(),
            tas: TimerTier::Tas.default_threshold(),
        }
    }
}

impl TierThresholds {
    /// Threshold for a tier.
    pub fn get(&self, tier: TimerTier) -> i64 {
        match tier {
            TimerTier::Speedrun => self.speedrun,
            TimerTier::WorldRecord => self.world_record,
            TimerTier::Tas => self.tas,
        }
    }
}

/// Configuration for a [`TabletEvaluator`](crate::TabletEvaluator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletConfig {
    /// Companions that never count toward party size.
    pub excluded_companions: Vec<CompanionId>,

    pub tiers: TierThresholds,
}

impl Default for TabletConfig {
    fn default() -> Self {
        Self {
            excluded_companions: CompanionId::special().to_vec(),
            tiers: TierThresholds::default(),
        }
    }
}

impl TabletConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Check that tiers are non-decreasing from speedrun to TAS.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TierThresholds {
            speedrun,
            world_record,
            tas,
        } = self.tiers;

        if speedrun <= world_record && world_record <= tas {
            return Ok(());
        }

        warn!(speedrun, world_record, tas, "Rejected tablet config with unordered tiers");
        Err(ConfigError::UnorderedTiers {
            speedrun,
            world_record,
            tas,
        })
    }
}
