use serde::{Deserialize, Serialize};

/// Outcome of comparing two digest strings.
///
/// Serialized as `{ "firstHash", "secondHash", "match" }` for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// First digest as supplied, trimmed, original case kept for display.
    pub first_hash: String,

    /// Second digest as supplied, trimmed, original case kept for display.
    pub second_hash: String,

    /// Whether the two digests are equal ignoring case.
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl ComparisonResult {
    pub fn new(first_hash: impl Into<String>, second_hash: impl Into<String>, is_match: bool) -> Self {
        Self {
            first_hash: first_hash.into(),
            second_hash: second_hash.into(),
            is_match,
        }
    }
}
