use crate::domain::error::DomainError;

/// Parse a percentage string such as `"12.5%"` into `12.5`.
///
/// Surrounding whitespace and any run of trailing `%` are stripped. Thousands
/// separators are not accepted.
pub fn parse_percentage(raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();
    let number = trimmed.trim_end_matches('%').trim();
    let value: f64 = number
        .parse()
        .map_err(|_| DomainError::Parse(format!("not a percentage: {raw:?}")))?;
    if !value.is_finite() {
        return Err(DomainError::Parse(format!("not a finite percentage: {raw:?}")));
    }
    Ok(value)
}
