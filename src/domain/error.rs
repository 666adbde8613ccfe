use thiserror::Error;

/// Everything the calculation engine can refuse to do.
///
/// Both variants are recoverable at the calling boundary: pages surface the
/// message and keep running. The engine never panics on user input and never
/// hands back NaN or infinity in place of an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Raw text from an input field could not be parsed into the numeric
    /// type the field requires. No calculation is performed.
    #[error("{field} must be {expected}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
    },

    /// The inputs make the formula undefined or economically meaningless,
    /// e.g. a unit price at or below the unit cost so break-even is
    /// unreachable.
    #[error("{0}")]
    DegenerateScenario(String),
}

impl ModelError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        ModelError::DegenerateScenario(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_field() {
        let err = ModelError::InvalidInput {
            field: "Sales volume",
            expected: "a whole number of cups",
        };
        assert_eq!(err.to_string(), "Sales volume must be a whole number of cups");
    }

    #[test]
    fn degenerate_carries_its_reason() {
        let err = ModelError::degenerate("price does not cover the unit cost");
        assert_eq!(err.to_string(), "price does not cover the unit cost");
    }
}
