//! Requirement checks with the tablet's built-in constants.
//!
//! Each function would return its answer if the player picked the tablet up
//! in `state`. For tunable thresholds use [`TabletEvaluator`](crate::TabletEvaluator).

use game_state::{CompanionId, GameState};

use crate::requirement::TimerTier;

/// Whether at least `threshold` days remain, or the spectre is inactive.
pub fn timer_tier_met(state: &GameState, threshold: i64) -> bool {
    state.timeline.days_remaining() >= threshold || !state.timeline.spectre_active()
}

/// Companions across all three lists that count toward party size.
pub fn counted_companions(state: &GameState, excluded: &[CompanionId]) -> usize {
    state.companions.count_excluding(excluded)
}

/// At least 600 days left on the spectre's timer.
pub fn speedrun(state: &GameState) -> bool {
    timer_tier_met(state, TimerTier::Speedrun.default_threshold())
}

/// At least 710 days left on the spectre's timer.
pub fn world_record(state: &GameState) -> bool {
    timer_tier_met(state, TimerTier::WorldRecord.default_threshold())
}

/// At least 750 days left on the spectre's timer.
pub fn tas(state: &GameState) -> bool {
    timer_tier_met(state, TimerTier::Tas.default_threshold())
}

/// Exactly one ordinary companion, ever.
pub fn otp(state: &GameState) -> bool {
    counted_companions(state, &CompanionId::special()) == 1
}

/// No ordinary companion, ever.
pub fn single_player(state: &GameState) -> bool {
    counted_companions(state, &CompanionId::special()) == 0
}

/// Every food tasted and every water and food level stocked.
pub fn gourmet(state: &GameState) -> bool {
    let provisions = &state.provisions;
    provisions.all_food_consumed() && provisions.all_water_stocked() && provisions.all_food_stocked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_state::{Companion, CompanionRoster, Provisions, Timeline};

    fn at(time: i64, end_spectre: i64) -> GameState {
        GameState::new().with_timeline(Timeline::new(time, end_spectre))
    }

    fn hired(ids: &[&str]) -> GameState {
        GameState::new().with_companions(CompanionRoster {
            hired: ids.iter().map(|id| Companion::new(*id)).collect(),
            ..CompanionRoster::default()
        })
    }

    #[test]
    fn test_exactly_speedrun() {
        let state = at(300, 0);
        assert!(speedrun(&state));
        assert!(!world_record(&state));
        assert!(!tas(&state));
    }

    #[test]
    fn test_tier_boundaries() {
        // 900 - 190 + 0 = 710
        assert!(world_record(&at(190, 0)));
        assert!(!world_record(&at(191, 0)));
        // 900 - 150 + 0 = 750
        assert!(tas(&at(150, 0)));
        assert!(!tas(&at(151, 0)));
        // spectre offset extends the deadline
        assert!(tas(&at(300, 150)));
    }

    #[test]
    fn test_inactive_spectre_meets_every_tier() {
        for time in [0, 100, 899, 5000] {
            let state = at(time, -1);
            assert!(speedrun(&state));
            assert!(world_record(&state));
            assert!(tas(&state));
        }
    }

    #[test]
    fn test_extreme_timelines_do_not_overflow() {
        let far_spectre = at(0, i64::MAX);
        assert!(speedrun(&far_spectre));
        assert!(world_record(&far_spectre));
        assert!(tas(&far_spectre));

        let deep_past = at(i64::MIN + 1, 0);
        assert!(speedrun(&deep_past));
        assert!(tas(&deep_past));

        let far_future = at(i64::MAX, 0);
        assert!(!speedrun(&far_future));
        assert!(!world_record(&far_future));
        assert!(!tas(&far_future));

        assert!(tas(&at(i64::MAX, -1)));
    }

    #[test]
    fn test_tiers_are_monotonic() {
        for time in (0..=1000).step_by(7) {
            for end_spectre in [0, 3, 40, 200] {
                let state = at(time, end_spectre);
                if tas(&state) {
                    assert!(world_record(&state));
                }
                if world_record(&state) {
                    assert!(speedrun(&state));
                }
                assert_eq!(speedrun(&state), 900 - time + end_spectre >= 600);
            }
        }
    }

    #[test]
    fn test_special_companion_does_not_count() {
        let state = hired(&["bandit"]);
        assert!(!otp(&state));
        assert!(single_player(&state));

        let state = hired(&["ai", "twin", "bandit", "golem"]);
        assert!(single_player(&state));
    }

    #[test]
    fn test_single_ordinary_companion() {
        let state = hired(&["scout"]);
        assert!(otp(&state));
        assert!(!single_player(&state));

        let state = hired(&["scout", "golem"]);
        assert!(otp(&state));
    }

    #[test]
    fn test_party_of_two() {
        let state = hired(&["scout", "maru"]);
        assert!(!otp(&state));
        assert!(!single_player(&state));
    }

    #[test]
    fn test_companions_counted_across_lists_with_duplicates() {
        let state = GameState::new().with_companions(CompanionRoster {
            hired: vec![],
            deserted: vec![Companion::new("maru")],
            lost: vec![Companion::new("maru")],
        });
        assert_eq!(counted_companions(&state, &CompanionId::special()), 2);
        assert!(!otp(&state));

        let lost_only = GameState::new().with_companions(CompanionRoster {
            lost: vec![Companion::new("cherry")],
            ..CompanionRoster::default()
        });
        assert!(otp(&lost_only));
    }

    #[test]
    fn test_otp_and_single_player_exclusive() {
        let parties: [&[&str]; 4] = [&[], &["a"], &["a", "b"], &["a", "b", "c"]];
        for party in parties {
            let state = hired(party);
            assert!(!(otp(&state) && single_player(&state)));
        }
    }

    #[test]
    fn test_gourmet_vacuous() {
        assert!(gourmet(&GameState::new()));
    }

    #[test]
    fn test_gourmet_empty_food_level() {
        let state = GameState::new().with_provisions(Provisions::new().with_food_level("1", 0.0));
        assert!(!gourmet(&state));
    }

    #[test]
    fn test_gourmet_requires_everything() {
        let full = Provisions::new()
            .with_consumed("stonefruit", true)
            .with_water_level("1", 1.0)
            .with_food_level("1", 2.0);
        assert!(gourmet(&GameState::new().with_provisions(full.clone())));

        let uneaten = full.clone().with_consumed("glowcap", false);
        assert!(!gourmet(&GameState::new().with_provisions(uneaten)));

        let dry = full.with_water_level("2", 0.0);
        assert!(!gourmet(&GameState::new().with_provisions(dry)));
    }
}
