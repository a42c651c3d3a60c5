use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-origin snapshot of monetized engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginVisitData {
    /// Milliseconds spent on the origin while it was streaming payments.
    pub monetized_time_spent: u64,
    pub number_of_visits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginData {
    pub origin: String,
    pub origin_visit_data: OriginVisitData,
}

impl OriginData {
    pub fn new(origin: impl Into<String>, monetized_time_spent: u64, number_of_visits: u64) -> Self {
        Self {
            origin: origin.into(),
            origin_visit_data: OriginVisitData {
                monetized_time_spent,
                number_of_visits,
            },
        }
    }

    pub fn monetized_time_spent(&self) -> u64 {
        self.origin_visit_data.monetized_time_spent
    }

    pub fn number_of_visits(&self) -> u64 {
        self.origin_visit_data.number_of_visits
    }
}

/// Aggregate totals across every recorded origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginStats {
    pub total_time_spent: u64,
    pub total_monetized_time_spent: u64,
    pub total_visits: u64,
    pub total_sent_assets_map: Option<HashMap<String, f64>>,
}
