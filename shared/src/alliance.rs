use serde::{Deserialize, Serialize};

/// A competing alliance as published by the event feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alliance {
    /// Published display name. Elimination alliances are sometimes announced
    /// before they are named.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u8>,
    #[serde(default)]
    pub teams: Vec<String>,
}

impl Alliance {
    /// The alliance's published name, or `fallback` when it has none.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => fallback,
        }
    }
}

/// Name of the first alliance in a feed ordering, or `fallback` when the
/// list is empty or the first entry is unnamed.
pub fn first_alliance_name<'a>(alliances: &'a [Alliance], fallback: &'a str) -> &'a str {
    match alliances.first() {
        Some(alliance) => alliance.name_or(fallback),
        None => fallback,
    }
}
