//! Companion definitions and the hired/deserted/lost roster.

mod id;

pub use id::*;

use serde::{Deserialize, Serialize};

/// A recruitable character as recorded by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    pub id: CompanionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Companion {
    /// Create a companion from its host id.
    pub fn new(id: impl Into<CompanionId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Every companion the player has ever recruited, split by current standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompanionRoster {
    #[serde(rename = "hiredCompanions", default)]
    pub hired: Vec<Companion>,
    #[serde(rename = "desertedCompanions", default)]
    pub deserted: Vec<Companion>,
    #[serde(rename = "lostCompanions", default)]
    pub lost: Vec<Companion>,
}

impl CompanionRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// All companions: hired, then deserted, then lost.
    ///
    /// A companion listed more than once is yielded once per listing.
    pub fn iter(&self) -> impl Iterator<Item = &Companion> {
        self.hired
            .iter()
            .chain(self.deserted.iter())
            .chain(self.lost.iter())
    }

    /// Total listings across the three lists.
    pub fn len(&self) -> usize {
        self.hired.len() + self.deserted.len() + self.lost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count listings whose id is not in `excluded`.
    pub fn count_excluding(&self, excluded: &[CompanionId]) -> usize {
        self.iter().filter(|c| !excluded.contains(&c.id)).count()
    }
}
