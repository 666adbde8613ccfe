//! Parsing boundary between raw input-field text and the engine.
//!
//! Pages hand every string through here before any model call, so the
//! `InvalidInput` taxonomy lives with the engine instead of being scattered
//! through event handlers.

use super::error::ModelError;

/// Parses a non-negative whole number (sales volumes, week counts).
pub fn parse_count(field: &'static str, expected: &'static str, raw: &str) -> Result<u32, ModelError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ModelError::InvalidInput { field, expected })
}

/// Parses a whole number that must be at least one (fleet sizes).
pub fn parse_positive_count(
    field: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<u32, ModelError> {
    match parse_count(field, expected, raw)? {
        0 => Err(ModelError::InvalidInput { field, expected }),
        value => Ok(value),
    }
}

/// Parses a finite, non-negative amount (costs, prices, demand).
pub fn parse_amount(field: &'static str, expected: &'static str, raw: &str) -> Result<f64, ModelError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ModelError::InvalidInput { field, expected })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::InvalidInput { field, expected });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_surrounding_whitespace() {
        assert_eq!(parse_count("Weeks", "a whole number", "  120 "), Ok(120));
    }

    #[test]
    fn counts_reject_fractions_and_junk() {
        for raw in ["12.5", "-3", "twelve", ""] {
            assert!(matches!(
                parse_count("Weeks", "a whole number", raw),
                Err(ModelError::InvalidInput { field: "Weeks", .. })
            ));
        }
    }

    #[test]
    fn positive_counts_reject_zero() {
        assert!(parse_positive_count("Machines", "at least 1", "0").is_err());
        assert_eq!(parse_positive_count("Machines", "at least 1", "4"), Ok(4));
    }

    #[test]
    fn amounts_reject_negatives_and_non_finite_text() {
        assert_eq!(parse_amount("Cost", "a non-negative amount", "0.35"), Ok(0.35));
        for raw in ["-0.10", "inf", "NaN", "abc"] {
            assert!(parse_amount("Cost", "a non-negative amount", raw).is_err());
        }
    }
}
