pub mod content_commands;
pub mod event_commands;
pub mod report_commands;

pub(crate) fn parse_date(value: &str) -> Result<chrono::NaiveDate, crate::AppError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        crate::AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", value))
    })
}

pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub(crate) fn normalize_required_text(value: &str, field: &str) -> Result<String, crate::AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
