//! # Licensing Mode
//!
//! A registration is issued either as a time-limited `TRIAL` or as an
//! unrestricted `FULL` license. The enum is closed: every `match` on
//! [`Mode`] is exhaustive, so adding a mode forces every consumer to decide
//! how it expires.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LicregError;

/// The licensing mode of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Time-limited evaluation license. Invalid once the expiry date passes.
    Trial,
    /// Unrestricted license. Never expires, whatever the stored expiry date.
    Full,
}

impl Mode {
    /// Returns both modes in declaration order.
    pub fn all_modes() -> &'static [Mode] {
        &[Self::Trial, Self::Full]
    }

    /// Returns the canonical text for this mode.
    ///
    /// Matches the serde representation and the only inputs accepted by
    /// [`Mode::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "TRIAL",
            Self::Full => "FULL",
        }
    }

    /// Whether registrations in this mode stop being valid after expiry.
    pub fn is_time_limited(&self) -> bool {
        matches!(self, Self::Trial)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = LicregError;

    /// Parse a mode from its canonical text. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRIAL" => Ok(Self::Trial),
            "FULL" => Ok(Self::Full),
            other => Err(LicregError::InvalidArgument(format!(
                "unknown licensing mode: {other:?} (expected one of TRIAL, FULL)"
            ))),
        }
    }
}
