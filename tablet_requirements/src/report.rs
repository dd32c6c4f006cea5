//! Outcome of checking every tablet requirement against one snapshot.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::requirement::Requirement;

/// Which requirements hold, in tablet order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabletReport {
    results: Vec<(Requirement, bool)>,
}

impl TabletReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, replacing any earlier one for the same requirement.
    pub fn insert(&mut self, requirement: Requirement, satisfied: bool) {
        match self.results.iter_mut().find(|(r, _)| *r == requirement) {
            Some(entry) => entry.1 = satisfied,
            None => self.results.push((requirement, satisfied)),
        }
    }

    /// Outcome for a requirement, if it was evaluated.
    pub fn get(&self, requirement: Requirement) -> Option<bool> {
        self.results
            .iter()
            .find(|(r, _)| *r == requirement)
            .map(|(_, satisfied)| *satisfied)
    }

    /// All evaluated requirements with their outcome.
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        self.results.iter().copied()
    }

    /// Requirements that hold.
    pub fn satisfied(&self) -> impl Iterator<Item = Requirement> + '_ {
        self.iter().filter(|(_, ok)| *ok).map(|(r, _)| r)
    }

    pub fn count_satisfied(&self) -> usize {
        self.satisfied().count()
    }

    /// True when every evaluated requirement holds. False for an empty report.
    pub fn all_satisfied(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|(_, ok)| *ok)
    }

    /// JSON object keyed by in-game label, for the host UI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<(Requirement, bool)> for TabletReport {
    fn from_iter<I: IntoIterator<Item = (Requirement, bool)>>(iter: I) -> Self {
        let mut report = TabletReport::new();
        for (requirement, satisfied) in iter {
            report.insert(requirement, satisfied);
        }
        report
    }
}

impl Serialize for TabletReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for (requirement, satisfied) in &self.results {
            map.serialize_entry(requirement.name(), satisfied)?;
        }
        map.end()
    }
}
