//! Input normalizer - turns raw text into a validated [`Pin`].

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::types::PinStrength;

/// Allowed PIN lengths.
pub const PIN_LENGTHS: [usize; 2] = [4, 6];

/// Why raw input could not be evaluated. Checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("MPIN is required")]
    MissingInput,
    #[error("MPIN must contain digits only")]
    NonNumericInput,
    #[error("MPIN must be 4 or 6 digits, got {0}")]
    InvalidLength(usize),
}

impl InvalidInput {
    /// Invalid input is never scored.
    pub fn strength(&self) -> PinStrength {
        PinStrength::Invalid
    }
}

/// A validated PIN: ASCII digits only, length 4 or 6.
#[derive(Debug)]
pub struct Pin {
    text: SecretString,
}

impl Pin {
    /// The PIN text. Callers must not log it.
    pub fn expose(&self) -> &str {
        self.text.expose_secret()
    }

    /// Numeric value of every digit, in order.
    pub fn digits(&self) -> Vec<i8> {
        self.expose().bytes().map(|b| (b - b'0') as i8).collect()
    }
}

/// Validates raw input.
///
/// # Errors
///
/// - [`InvalidInput::MissingInput`] for an empty string
/// - [`InvalidInput::NonNumericInput`] if any character is not `0-9`
/// - [`InvalidInput::InvalidLength`] if the digit count is not 4 or 6
pub fn normalize(raw: &SecretString) -> Result<Pin, InvalidInput> {
    let text = raw.expose_secret();

    if text.is_empty() {
        return Err(InvalidInput::MissingInput);
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInput::NonNumericInput);
    }

    if !PIN_LENGTHS.contains(&text.len()) {
        return Err(InvalidInput::InvalidLength(text.len()));
    }

    Ok(Pin {
        text: SecretString::new(text.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&secret("")).unwrap_err(), InvalidInput::MissingInput);
    }

    #[test]
    fn test_normalize_non_numeric() {
        assert_eq!(
            normalize(&secret("abcd")).unwrap_err(),
            InvalidInput::NonNumericInput
        );
        assert_eq!(
            normalize(&secret("123a")).unwrap_err(),
            InvalidInput::NonNumericInput
        );
        assert_eq!(
            normalize(&secret(" 1234")).unwrap_err(),
            InvalidInput::NonNumericInput
        );
        // Non-ASCII digits are rejected too
        assert_eq!(
            normalize(&secret("١٢٣٤")).unwrap_err(),
            InvalidInput::NonNumericInput
        );
    }

    #[test]
    fn test_normalize_non_numeric_wins_over_length() {
        assert_eq!(
            normalize(&secret("12a")).unwrap_err(),
            InvalidInput::NonNumericInput
        );
    }

    #[test]
    fn test_normalize_invalid_length() {
        assert_eq!(
            normalize(&secret("12345")).unwrap_err(),
            InvalidInput::InvalidLength(5)
        );
        assert_eq!(
            normalize(&secret("123")).unwrap_err(),
            InvalidInput::InvalidLength(3)
        );
        assert_eq!(
            normalize(&secret("12345678")).unwrap_err(),
            InvalidInput::InvalidLength(8)
        );
    }

    #[test]
    fn test_normalize_keeps_leading_zeros() {
        let pin = normalize(&secret("0070")).expect("valid pin");
        assert_eq!(pin.expose(), "0070");
        assert_eq!(pin.digits(), vec![0, 0, 7, 0]);
        assert_eq!(pin.expose().len(), 4);
    }

    #[test]
    fn test_normalize_six_digits() {
        let pin = normalize(&secret("748650")).expect("valid pin");
        assert_eq!(pin.expose().len(), 6);
    }

    #[test]
    fn test_invalid_input_reason_and_strength() {
        let err = InvalidInput::InvalidLength(5);
        assert_eq!(err.to_string(), "MPIN must be 4 or 6 digits, got 5");
        assert_eq!(err.strength(), PinStrength::Invalid);
    }
}
