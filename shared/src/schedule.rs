use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alliance::{Alliance, first_alliance_name};

/// One scheduled match as published by the event feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// Announcer label, e.g. "Qualification 12" or "Final 2".
    pub label: String,
    /// Alliances competing in this match, in feed order.
    #[serde(default)]
    pub alliances: Vec<Alliance>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_start: Option<DateTime<Utc>>,
}

impl ScheduledMatch {
    /// Name of the leading alliance in feed order, or `fallback` when the
    /// match has no named alliances yet.
    pub fn headline<'a>(&'a self, fallback: &'a str) -> &'a str {
        first_alliance_name(&self.alliances, fallback)
    }
}
