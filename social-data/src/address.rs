use std::fmt::Display;

use serde::{Deserialize, Serialize};

use thiserror::Error;

const AVATAR_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

const FALLBACK_COLOR: &str = "#7B68EE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address: cannot be empty")]
    Empty,

    #[error("Address: cannot contain whitespace")]
    Whitespace,
}

/// Wallet address used as user identity.
///
/// The string a connected wallet exposes, taken at face value.
/// No checksum or curve validation happens here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Address(String);

impl core::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(addr_str: &str) -> Result<Self, Self::Err> {
        Self::try_from(addr_str)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::try_from(string.as_str())
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        let trimmed = str.trim();

        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }

        if trimmed.contains(char::is_whitespace) {
            return Err(AddressError::Whitespace);
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Address {
    /// Returns a display-shortened form; first 4 + "..." + last 4 characters.
    ///
    /// Addresses shorter than 8 characters are returned whole.
    pub fn shorten(&self) -> String {
        let count = self.0.chars().count();

        if count < 8 {
            return self.0.clone();
        }

        let head: String = self.0.chars().take(4).collect();
        let tail: String = self.0.chars().skip(count - 4).collect();

        format!("{}...{}", head, tail)
    }

    /// Deterministic avatar color derived from the last two characters.
    pub fn avatar_color(&self) -> &'static str {
        let count = self.0.chars().count();

        if count < 2 {
            return FALLBACK_COLOR;
        }

        let suffix: String = self.0.chars().skip(count - 2).collect();

        match u32::from_str_radix(&suffix, 16) {
            Ok(value) => AVATAR_COLORS[value as usize % AVATAR_COLORS.len()],
            Err(_) => FALLBACK_COLOR,
        }
    }
}
