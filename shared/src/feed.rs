use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live snapshot of one polled feed, as exposed by its store.
///
/// The poller owns and mutates this; everything downstream reads it as an
/// immutable value. `Default` is a feed that has never loaded anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedState {
    /// Text of the last failed refresh. `None` (or empty) means no error.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// True while a refresh is in flight.
    #[serde(default)]
    pub is_loading: bool,
    /// Instant of the last successful refresh. `None` means never succeeded.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// What the status banner shows for a feed. Derived fresh on every snapshot
/// change, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedDisplay {
    Failed { message: String },
    Refreshing,
    Fresh { at: DateTime<Utc> },
    Empty,
}

impl FeedDisplay {
    /// Classify a feed snapshot. The three snapshot fields are not mutually
    /// exclusive, so the first matching rule wins: a failed refresh outranks
    /// an in-flight one, which outranks a stale success timestamp.
    pub fn from_state(state: &FeedState) -> Self {
        if let Some(message) = state.error.as_deref()
            && !message.is_empty()
        {
            return Self::Failed {
                message: message.to_string(),
            };
        }
        if state.is_loading {
            return Self::Refreshing;
        }
        match state.last_updated {
            Some(at) => Self::Fresh { at },
            None => Self::Empty,
        }
    }
}
