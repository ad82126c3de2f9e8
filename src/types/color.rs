//! Definition for the validated [`Color`] type.
//!
//! Hue computation itself works on raw strings (see
//! [`crate::utils::hue`]) and never rejects anything. `Color` is for
//! callers, such as a form handler, that want to refuse malformed input
//! before it reaches the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker color used when a location has none.
pub const DEFAULT_MARKER_COLOR: &str = "#FF5733";

/// Errors returned when parsing a [`Color`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 7 characters (#RRGGBB), got {0}")]
    Length(usize),
    #[error("color must start with '#'")]
    MissingHash,
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

/// A `#RRGGBB` color. Case is preserved as given.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Returns the color as written, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hex digits without the leading `#`.
    pub fn hex_digits(&self) -> &str {
        &self.0[1..]
    }

    /// Returns the red, green and blue bytes.
    pub fn channels(&self) -> (u8, u8, u8) {
        // Validated on construction.
        let byte = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or_default();
        (byte(1), byte(3), byte(5))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 7 {
            return Err(ColorError::Length(s.chars().count()));
        }
        let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        Ok(Color(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
