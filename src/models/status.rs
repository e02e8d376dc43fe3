use serde::{Deserialize, Serialize};

/// Response of the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Row count and newest timestamp of one stored series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesStatus {
    pub count: u64,
    #[serde(default)]
    pub latest_timestamp: Option<String>,
}

impl SeriesStatus {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Summary of the historical data the backend holds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataStatus {
    pub generation: SeriesStatus,
    pub price: SeriesStatus,
}
