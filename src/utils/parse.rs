use crate::errors::{AppError, AppResult};

/// Parse raw user text into a positive real number.
///
/// All numeric CLI input goes through here before anything touches the
/// database: non-numeric or non-positive values are rejected with a
/// distinguishable error and no record is persisted.
pub fn parse_positive_real(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidNumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(AppError::InvalidNumber(trimmed.to_string()));
    }

    if value <= 0.0 {
        return Err(AppError::NonPositive(trimmed.to_string()));
    }

    Ok(value)
}
