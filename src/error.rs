// PixelPicker
// copyright zipxing@hotmail.com 2022~2024

//! Conversion error type
//!
//! A single kind: a hue / lightness / saturation component outside its valid
//! domain. Raised by the two hls conversions only; rgb <-> cmyk cannot fail.
//! Conversions never recover, the picker layer substitutes `Hls::ZERO` and
//! warns instead of crashing.

#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    // component, value, valid min, valid max
    RangeViolation(&'static str, f64, f64, f64),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::RangeViolation(component, value, min, max) => {
                write!(
                    f,
                    "{} out of range: {} (valid {} - {})",
                    component, value, min, max
                )
            }
        }
    }
}

impl std::error::Error for ColorError {}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorError::RangeViolation("hue", 361.0, 0.0, 360.0);
        assert_eq!(err.to_string(), "hue out of range: 361 (valid 0 - 360)");

        let err = ColorError::RangeViolation("lightness", 1.5, 0.0, 1.0);
        assert_eq!(err.to_string(), "lightness out of range: 1.5 (valid 0 - 1)");
    }

    #[test]
    fn test_result_type() {
        fn check() -> Result<()> {
            Err(ColorError::RangeViolation("saturation", -0.1, 0.0, 1.0))
        }
        assert!(check().is_err());
    }
}
