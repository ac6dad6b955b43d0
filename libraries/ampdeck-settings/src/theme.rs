//! Accent colour theme

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default accent (green LCD)
pub const DEFAULT_ACCENT: &str = "#4caf50";

/// Accent colour stored as a lowercase hex string (`#rgb` or `#rrggbb`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Theme(String);

impl Theme {
    /// Parse a hex colour
    ///
    /// # Errors
    /// `InvalidTheme` unless the input is `#` followed by 3 or 6 hex digits
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let valid = value
            .strip_prefix('#')
            .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));

        if valid {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(SettingsError::InvalidTheme(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components (`#rgb` is expanded to `#rrggbb`)
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.0[1..];
        let channel = |i: usize| -> u8 {
            if hex.len() == 3 {
                let digit = u8::from_str_radix(&hex[i..=i], 16).unwrap_or(0);
                digit * 17
            } else {
                u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap_or(0)
            }
        };
        (channel(0), channel(1), channel(2))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(DEFAULT_ACCENT.to_string())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Theme {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
