// Aggregated statistics over official events

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceCount {
    pub province: String,
    pub events: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub events: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    pub total_events: u64,
    pub total_deaths: u64,
    pub total_injuries: u64,
    pub total_damaged_homes: u64,
    pub provinces_affected: u64,
    pub by_province: Vec<ProvinceCount>,
    pub by_month: Vec<MonthCount>,
    pub pending_reports: u64,
}
