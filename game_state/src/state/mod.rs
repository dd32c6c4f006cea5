//! The snapshot handed to requirement checks, and its import from host variables.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::companions::{Companion, CompanionRoster};
use crate::error::StateError;
use crate::provisions::{Provisions, FOOD_LEVEL_PREFIX, WATER_LEVEL_PREFIX};
use crate::timeline::Timeline;

/// Everything a tablet requirement may read, frozen at one moment.
///
/// Serializes in its own nested shape, not the host's flat variable store.
/// Build it from host variables with [`from_variables`](Self::from_variables).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GameState {
    pub timeline: Timeline,
    pub companions: CompanionRoster,
    pub provisions: Provisions,
}

impl GameState {
    /// Create an empty state: day 0, active spectre, no party, no provisions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn with_companions(mut self, companions: CompanionRoster) -> Self {
        self.companions = companions;
        self
    }

    pub fn with_provisions(mut self, provisions: Provisions) -> Self {
        self.provisions = provisions;
        self
    }

    /// Parse a JSON dump of the host variable store.
    pub fn from_json_str(raw: &str) -> Result<Self, StateError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_variables(&value)
    }

    /// Build a snapshot from the host variable store.
    ///
    /// Every variable the requirements read must be present with the right
    /// type. Unrelated variables are ignored.
    pub fn from_variables(variables: &Value) -> Result<Self, StateError> {
        let vars = variables.as_object().ok_or(StateError::NotAnObject)?;

        let timeline = Timeline {
            time: read_integer(vars, "time")?,
            end_spectre: read_integer(vars, "endSpectre")?,
        };

        let companions = CompanionRoster {
            hired: read_companions(vars, "hiredCompanions")?,
            deserted: read_companions(vars, "desertedCompanions")?,
            lost: read_companions(vars, "lostCompanions")?,
        };

        let mut provisions = Provisions {
            smaragdine_food_consumed: read_flags(vars, "smaragdineFoodConsumed")?,
            ..Provisions::default()
        };
        for (name, value) in vars {
            if let Some(key) = name.strip_prefix(WATER_LEVEL_PREFIX) {
                provisions
                    .water_levels
                    .insert(key.to_string(), read_level(name, value)?);
            } else if let Some(key) = name.strip_prefix(FOOD_LEVEL_PREFIX) {
                provisions
                    .food_levels
                    .insert(key.to_string(), read_level(name, value)?);
            }
        }

        debug!(
            time = timeline.time,
            end_spectre = timeline.end_spectre,
            companions = companions.len(),
            food_items = provisions.smaragdine_food_consumed.len(),
            water_levels = provisions.water_levels.len(),
            food_levels = provisions.food_levels.len(),
            "Imported game state from host variables"
        );

        Ok(Self {
            timeline,
            companions,
            provisions,
        })
    }
}

fn require<'a>(vars: &'a Map<String, Value>, field: &str) -> Result<&'a Value, StateError> {
    vars.get(field).ok_or_else(|| StateError::missing(field))
}

fn read_integer(vars: &Map<String, Value>, field: &str) -> Result<i64, StateError> {
    let value = require(vars, field)?;
    // The host stores every number as a double.
    match value.as_i64() {
        Some(n) => Ok(n),
        None => value
            .as_f64()
            // i64::MAX as f64 rounds up to 2^63, which is already out of range.
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
            .ok_or_else(|| StateError::mismatch(field, "integer")),
    }
}

fn read_level(field: &str, value: &Value) -> Result<f64, StateError> {
    value
        .as_f64()
        .ok_or_else(|| StateError::mismatch(field, "number"))
}

fn read_companions(vars: &Map<String, Value>, field: &str) -> Result<Vec<Companion>, StateError> {
    let entries = require(vars, field)?
        .as_array()
        .ok_or_else(|| StateError::mismatch(field, "array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Result<Companion, StateError> {
            let path = format!("{field}[{i}]");
            let record = entry
                .as_object()
                .ok_or_else(|| StateError::mismatch(path.as_str(), "object"))?;
            let id = record
                .get("id")
                .ok_or_else(|| StateError::missing(format!("{path}.id")))?
                .as_str()
                .ok_or_else(|| StateError::mismatch(format!("{path}.id"), "string"))?;

            let mut companion = Companion::new(id);
            if let Some(name) = record.get("name").and_then(Value::as_str) {
                companion = companion.with_name(name);
            }
            Ok(companion)
        })
        .collect()
}

fn read_flags(vars: &Map<String, Value>, field: &str) -> Result<BTreeMap<String, bool>, StateError> {
    let flags = require(vars, field)?
        .as_object()
        .ok_or_else(|| StateError::mismatch(field, "object"))?;

    flags
        .iter()
        .map(|(item, eaten)| {
            eaten
                .as_bool()
                .map(|eaten| (item.clone(), eaten))
                .ok_or_else(|| StateError::mismatch(format!("{field}.{item}"), "boolean"))
        })
        .collect()
}
