use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};

pub fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|err| anyhow!(err))
}
