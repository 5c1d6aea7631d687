use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Claim totals across all communities, from `GET /api/summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    #[serde(default)]
    pub total_claims: u64,
    #[serde(default)]
    pub total_approved: u64,
    #[serde(default)]
    pub total_rejected: u64,
    #[serde(default)]
    pub total_in_process: u64,
    #[serde(default)]
    pub total_delayed: u64,
}

/// Occupations found in a community, each mapped to the welfare schemes
/// that apply to it. Schemes are opaque JSON.
pub type OccupationSchemes = IndexMap<String, Vec<serde_json::Value>>;
