use anyhow::{anyhow, Result};

pub fn validate_remote_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("remote_url is empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(anyhow!("remote_url must start with http:// or https://"));
    }
    Ok(())
}

pub fn validate_log_format(value: &str) -> Result<()> {
    match value {
        "text" | "json" => Ok(()),
        other => Err(anyhow!("log_format must be 'text' or 'json', got '{}'", other)),
    }
}
