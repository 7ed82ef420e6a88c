use serde::{Deserialize, Serialize};

/// Per-resource limits a subscription grants.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Limits {
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub users: u32,
    #[serde(default)]
    pub classes: u32,
    #[serde(default)]
    pub categories: u32,
}

/// A subscription tier.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub limits: Limits,
}

/// Create/update payload for a plan (server owns the id).
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub is_active: bool,
    pub limits: Limits,
}
