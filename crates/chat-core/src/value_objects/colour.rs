//! Colour - 24-bit RGB value used by roles and embeds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// RGB colour packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(u32);

impl Colour {
    /// Create from a packed `0xRRGGBB` value
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create from individual channels
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Read a colour from a JSON number (or a numeric string)
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DomainError> {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v <= 0xFF_FFFF)
                .map(Colour)
                .ok_or_else(|| DomainError::InvalidColour(n.to_string())),
            serde_json::Value::String(s) => s.parse(),
            other => Err(DomainError::InvalidColour(other.to_string())),
        }
    }
}

/// `#rrggbb`
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Accepts `#rrggbb`, `0xrrggbb` or a decimal integer
impl FromStr for Colour {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            u32::from_str_radix(hex, 16).ok()
        } else if let Some(hex) = trimmed.strip_prefix("0x") {
            u32::from_str_radix(hex, 16).ok()
        } else {
            trimmed.parse::<u32>().ok()
        };

        parsed
            .filter(|v| *v <= 0xFF_FFFF)
            .map(Colour)
            .ok_or_else(|| DomainError::InvalidColour(s.to_string()))
    }
}

impl From<u32> for Colour {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
