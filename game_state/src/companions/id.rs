//! Companion identifiers.

use serde::{Deserialize, Serialize};

/// Identity of a companion, serialized as the host's lowercase string id.
///
/// The four named variants are the special companions that never count toward
/// party size. Everyone else is carried verbatim in [`CompanionId::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanionId {
    Ai,
    Twin,
    Bandit,
    Golem,
    Other(String),
}

impl CompanionId {
    /// The companions excluded from party-size counts.
    pub fn special() -> [CompanionId; 4] {
        [
            CompanionId::Ai,
            CompanionId::Twin,
            CompanionId::Bandit,
            CompanionId::Golem,
        ]
    }

    /// Whether this is one of the [`special`](Self::special) companions.
    pub fn is_special(&self) -> bool {
        !matches!(self, CompanionId::Other(_))
    }

    /// The host engine's string id.
    pub fn as_str(&self) -> &str {
        match self {
            CompanionId::Ai => "ai",
            CompanionId::Twin => "twin",
            CompanionId::Bandit => "bandit",
            CompanionId::Golem => "golem",
            CompanionId::Other(s) => s,
        }
    }
}

impl From<&str> for CompanionId {
    fn from(id: &str) -> Self {
        parse_special(id).unwrap_or_else(|| CompanionId::Other(id.to_string()))
    }
}

impl From<String> for CompanionId {
    fn from(id: String) -> Self {
        parse_special(&id).unwrap_or(CompanionId::Other(id))
    }
}

fn parse_special(id: &str) -> Option<CompanionId> {
    match id {
        "ai" => Some(CompanionId::Ai),
        "twin" => Some(CompanionId::Twin),
        "bandit" => Some(CompanionId::Bandit),
        "golem" => Some(CompanionId::Golem),
        _ => None,
    }
}

impl From<CompanionId> for String {
    fn from(id: CompanionId) -> Self {
        match id {
            CompanionId::Other(s) => s,
            special => special.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CompanionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
