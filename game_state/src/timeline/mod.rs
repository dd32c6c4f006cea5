//! Expedition timeline: elapsed days and the spectre of the end.

use serde::{Deserialize, Serialize};

/// Length of an expedition, in days, before the spectre's own offset.
pub const BASE_EXPEDITION_DAYS: i64 = 900;

/// Elapsed time and the end-game countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Timeline {
    /// Elapsed in-game days.
    pub time: i64,
    /// Countdown offset of the spectre of the end. Negative = inactive.
    #[serde(rename = "endSpectre")]
    pub end_spectre: i64,
}

impl Timeline {
    pub fn new(time: i64, end_spectre: i64) -> Self {
        Self { time, end_spectre }
    }

    /// Whether the spectre's countdown is running.
    pub fn spectre_active(&self) -> bool {
        self.end_spectre >= 0
    }

    /// Days left before the spectre of the end arrives.
    ///
    /// Only meaningful while [`spectre_active`](Self::spectre_active) holds.
    /// Saturates at the `i64` bounds; with an active spectre the exact value
    /// never falls below `i64::MIN`, so comparisons against a threshold hold.
    pub fn days_remaining(&self) -> i64 {
        let exact =
            i128::from(BASE_EXPEDITION_DAYS) - i128::from(self.time) + i128::from(self.end_spectre);
        exact.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }
}
