//! Evaluates tablet requirements under a [`TabletConfig`].

use game_state::GameState;
use tracing::debug;

use crate::config::TabletConfig;
use crate::predicates::{counted_companions, gourmet, timer_tier_met};
use crate::report::TabletReport;
use crate::requirement::{Requirement, TimerTier};

/// Checks tablet requirements against game state snapshots.
#[derive(Debug, Clone, Default)]
pub struct TabletEvaluator {
    config: TabletConfig,
}

impl TabletEvaluator {
    pub fn new(config: TabletConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TabletConfig {
        &self.config
    }

    /// Whether `requirement` would be met if the tablet were picked up in `state`.
    pub fn is_satisfied(&self, requirement: Requirement, state: &GameState) -> bool {
        let satisfied = match requirement {
            Requirement::Speedrun => self.tier_met(TimerTier::Speedrun, state),
            Requirement::WorldRecord => self.tier_met(TimerTier::WorldRecord, state),
            Requirement::Tas => self.tier_met(TimerTier::Tas, state),
            Requirement::Otp => self.party_size(state) == 1,
            Requirement::SinglePlayer => self.party_size(state) == 0,
            Requirement::Gourmet => gourmet(state),
        };

        debug!(requirement = requirement.name(), satisfied, "Evaluated tablet requirement");
        satisfied
    }

    /// Evaluate every requirement against the same snapshot.
    pub fn report(&self, state: &GameState) -> TabletReport {
        let report: TabletReport = Requirement::ALL
            .iter()
            .map(|&requirement| (requirement, self.is_satisfied(requirement, state)))
            .collect();

        debug!(
            days_remaining = state.timeline.days_remaining(),
            spectre_active = state.timeline.spectre_active(),
            satisfied = report.count_satisfied(),
            "Built smaragdine tablet report"
        );
        report
    }

    fn tier_met(&self, tier: TimerTier, state: &GameState) -> bool {
        timer_tier_met(state, self.config.tiers.get(tier))
    }

    fn party_size(&self, state: &GameState) -> usize {
        counted_companions(state, &self.config.excluded_companions)
    }
}
