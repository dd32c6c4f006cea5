//! Food and water bookkeeping read by the gourmet requirement.

use serde::Serialize;
use std::collections::BTreeMap;

/// Host variable prefix for water resource levels.
pub const WATER_LEVEL_PREFIX: &str = "waterL";

/// Host variable prefix for food resource levels.
pub const FOOD_LEVEL_PREFIX: &str = "foodL";

/// Consumption flags and resource levels.
///
/// Level maps are keyed by the part of the host variable name after its
/// prefix, so `waterL3` is stored under `"3"` in [`water_levels`](Self::water_levels).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Provisions {
    /// Food item key -> eaten at least once.
    #[serde(rename = "smaragdineFoodConsumed")]
    pub smaragdine_food_consumed: BTreeMap<String, bool>,
    pub water_levels: BTreeMap<String, f64>,
    pub food_levels: BTreeMap<String, f64>,
}

impl Provisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether a food item has been eaten.
    pub fn with_consumed(mut self, item: impl Into<String>, consumed: bool) -> Self {
        self.smaragdine_food_consumed.insert(item.into(), consumed);
        self
    }

    /// Set a water level.
    pub fn with_water_level(mut self, key: impl Into<String>, level: f64) -> Self {
        self.water_levels.insert(key.into(), level);
        self
    }

    /// Set a food level.
    pub fn with_food_level(mut self, key: impl Into<String>, level: f64) -> Self {
        self.food_levels.insert(key.into(), level);
        self
    }

    /// Every tracked food item has been eaten. True when nothing is tracked.
    pub fn all_food_consumed(&self) -> bool {
        self.smaragdine_food_consumed.values().all(|eaten| *eaten)
    }

    /// Every water level is positive. True when there are none.
    pub fn all_water_stocked(&self) -> bool {
        self.water_levels.values().all(|level| *level > 0.0)
    }

    /// Every food level is positive. True when there are none.
    pub fn all_food_stocked(&self) -> bool {
        self.food_levels.values().all(|level| *level > 0.0)
    }

    /// Food items not yet eaten, in key order.
    pub fn uneaten(&self) -> impl Iterator<Item = &str> {
        self.smaragdine_food_consumed
            .iter()
            .filter(|(_, eaten)| !**eaten)
            .map(|(item, _)| item.as_str())
    }
}
