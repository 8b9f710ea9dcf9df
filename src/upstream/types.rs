//! Wire types for the upstream wait-time API.
//!
//! Field names are case-sensitive on the wire and must round-trip exactly;
//! every struct renames to camelCase to match the upstream JSON.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The response shape of this service: attraction ID → full record.
///
/// Built fresh per request; on duplicate IDs the last record in upstream
/// order wins.
pub type WaitTimeMap = HashMap<String, Attraction>;

/// One ride/show entity's live operational status, as published upstream.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,

    /// Current posted wait in minutes.
    pub wait_time: i64,

    pub status: String,
    pub active: bool,
    pub last_update: DateTime<Utc>,
    pub name: String,
    pub fast_pass: bool,
    pub meta: AttractionMeta,
}

/// Nested metadata block attached to each attraction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionMeta {
    #[serde(rename = "type")]
    pub kind: String,

    pub longitude: f64,
    pub latitude: f64,
    pub entity_id: String,
    pub single_rider: bool,
    pub return_time: ReturnTime,
}

/// Virtual-queue return window for an attraction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnTime {
    pub state: String,

    /// Shape is not fixed upstream (null, string, or object); kept as raw
    /// JSON so nothing is dropped or coerced on re-serialization.
    pub return_end: Value,

    pub return_start: String,
}
