use crate::utils::error::{EnhanceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Outcome of reading a price field as text. Empty and non-numeric input
/// are kept apart from real numbers so each case gets its own handling
/// instead of falling through an implicit coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedPrice {
    Empty,
    NotANumber,
    Number(f64),
}

pub fn parse_price(raw: &str) -> ParsedPrice {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedPrice::Empty;
    }

    // f64's FromStr accepts "NaN" and "inf"; neither is a usable price.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedPrice::Number(value),
        _ => ParsedPrice::NotANumber,
    }
}

/// Class markers and element ids: non-empty, alphanumeric plus `-`/`_`.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnhanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(EnhanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported character in identifier: '{}'", bad),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EnhanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
