//! Token time-to-live parsing.
//!
//! Accepts a bare number of seconds (`"3600"`) or a number followed by a
//! single unit: `s`, `m`, `h`, `d`, `w` (`"7d"`, `"12h"`). Surrounding
//! whitespace and the unit's case are ignored.

use std::time::Duration;

use crate::error::AppError;

/// Default token lifetime: seven days.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub fn parse_ttl(raw: &str) -> Result<Duration, AppError> {
    let value = raw.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);

    if digits.is_empty() {
        return Err(AppError::config(format!(
            "JWT_EXPIRES_IN must start with a number, got '{value}'"
        )));
    }

    let amount: u64 = digits
        .parse()
        .map_err(|_| AppError::config(format!("JWT_EXPIRES_IN is out of range: '{value}'")))?;

    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        other => {
            return Err(AppError::config(format!(
                "JWT_EXPIRES_IN has unknown unit '{other}'"
            )))
        }
    };

    let secs = amount
        .checked_mul(multiplier)
        .ok_or_else(|| AppError::config(format!("JWT_EXPIRES_IN is out of range: '{value}'")))?;

    if secs == 0 {
        return Err(AppError::config("JWT_EXPIRES_IN must be positive"));
    }

    Ok(Duration::from_secs(secs))
}
