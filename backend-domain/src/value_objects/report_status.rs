// Report status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
    /// Terminal value written by older remote deployments on reject. Read-only.
    Processed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
            ReportStatus::Processed => "processed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReportStatus::Pending)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "approved" => Ok(ReportStatus::Approved),
            "rejected" => Ok(ReportStatus::Rejected),
            "processed" => Ok(ReportStatus::Processed),
            other => Err(anyhow::anyhow!("unknown report status '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_case_insensitively() {
        assert_eq!("Pending".parse::<ReportStatus>().unwrap(), ReportStatus::Pending);
        assert_eq!(" approved ".parse::<ReportStatus>().unwrap(), ReportStatus::Approved);
        assert_eq!("processed".parse::<ReportStatus>().unwrap(), ReportStatus::Processed);
        assert!("archived".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn only_pending_is_open() {
        assert!(!ReportStatus::Pending.is_terminal());
        assert!(ReportStatus::Approved.is_terminal());
        assert!(ReportStatus::Rejected.is_terminal());
        assert!(ReportStatus::Processed.is_terminal());
    }
}
