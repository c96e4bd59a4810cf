//! Errors raised while constructing shapes or generating their points

use thiserror::Error;

/// Errors that can occur while building a shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Polygon requires at least 2 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Slope is undefined for a line with zero run")]
    UndefinedSlope,

    #[error("Invalid {parameter}: {value} (must be positive and finite)")]
    InvalidConfig { parameter: &'static str, value: f32 },
}

/// Reject zero, negative, NaN and infinite values for a sizing parameter
pub(crate) fn check_positive(parameter: &'static str, value: f32) -> Result<(), ShapeError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::InvalidConfig { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert!(check_positive("epsilon", 0.01).is_ok());
        assert_eq!(
            check_positive("radius", 0.0),
            Err(ShapeError::InvalidConfig {
                parameter: "radius",
                value: 0.0
            })
        );
        assert!(check_positive("radius", -1.0).is_err());
        assert!(check_positive("radius", f32::INFINITY).is_err());
        assert!(check_positive("radius", f32::NAN).is_err());
    }

    #[test]
    fn test_messages() {
        let err = ShapeError::TooFewVertices { count: 1 };
        assert_eq!(err.to_string(), "Polygon requires at least 2 vertices, got 1");
    }
}
