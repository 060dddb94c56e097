//! Event record structures

use serde::{Deserialize, Serialize};

/// One entry of the event catalog.
///
/// Field names on the wire follow the bundled `events.json` format
/// (`from`, `to`, `money`, `get`, `lost`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    /// Lowest eligible age in years (inclusive)
    #[serde(rename = "from", alias = "ageFrom")]
    pub age_from: i32,
    /// Highest eligible age in years (inclusive)
    #[serde(rename = "to", alias = "ageTo")]
    pub age_to: i32,
    #[serde(rename = "money", alias = "moneyDelta")]
    pub money_delta: i64,
    #[serde(
        default,
        rename = "get",
        alias = "grantedItem",
        skip_serializing_if = "Option::is_none"
    )]
    pub granted_item: Option<String>,
    #[serde(
        default,
        rename = "lost",
        alias = "removedItem",
        skip_serializing_if = "Option::is_none"
    )]
    pub removed_item: Option<String>,
    #[serde(
        default,
        rename = "employment",
        alias = "newEmployment",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_employment: Option<String>,
    #[serde(
        default,
        rename = "unemployment",
        alias = "clearsEmployment",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub clears_employment: bool,
    #[serde(
        default,
        rename = "join",
        alias = "joinedCompanion",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined_companion: Option<String>,
    #[serde(
        default,
        rename = "leave",
        alias = "departedCompanion",
        skip_serializing_if = "Option::is_none"
    )]
    pub departed_companion: Option<String>,
}

/// Trimmed label, or `None` when absent or blank
#[inline]
pub fn label(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl EventRecord {
    pub fn new(title: impl Into<String>, age_from: i32, age_to: i32, money_delta: i64) -> Self {
        Self {
            title: title.into(),
            age_from,
            age_to,
            money_delta,
            ..Default::default()
        }
    }

    /// Whether `age` falls inside `[age_from, age_to]`
    #[inline]
    pub fn is_eligible_at(&self, age: i32) -> bool {
        self.age_from <= age && age <= self.age_to
    }

    pub fn granted(&self) -> Option<&str> {
        label(&self.granted_item)
    }

    pub fn removed(&self) -> Option<&str> {
        label(&self.removed_item)
    }

    pub fn employment(&self) -> Option<&str> {
        label(&self.new_employment)
    }

    pub fn joined(&self) -> Option<&str> {
        label(&self.joined_companion)
    }

    pub fn departed(&self) -> Option<&str> {
        label(&self.departed_companion)
    }
}
