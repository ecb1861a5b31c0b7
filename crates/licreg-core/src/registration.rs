//! # License Registration
//!
//! A [`Registration`] binds an owner to the terms of a license: when it was
//! issued, when a trial runs out, whether it is a trial at all, and how many
//! cluster nodes it covers.
//!
//! ## Validity
//!
//! ```text
//! FULL  ─────────────────────────────▶ valid (expiry ignored)
//! TRIAL ── now <= expiry_date ───────▶ valid
//!       └─ now >  expiry_date ───────▶ invalid
//! ```
//!
//! The node cap is carried as data only. Enforcing it against the actual
//! cluster size is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::LicregError;
use crate::mode::Mode;
use crate::temporal::Timestamp;

/// An immutable license registration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    owner: String,
    registry_date: Timestamp,
    expiry_date: Timestamp,
    mode: Mode,
    max_nodes: u32,
}

impl Registration {
    /// Build a registration from already-loaded license fields, with the
    /// mode given as text.
    ///
    /// # Errors
    ///
    /// Returns [`LicregError::InvalidArgument`] if `mode` is not exactly
    /// `"TRIAL"` or `"FULL"`.
    pub fn new(
        owner: impl Into<String>,
        registry_date: Timestamp,
        expiry_date: Timestamp,
        mode: &str,
        max_nodes: u32,
    ) -> Result<Self, LicregError> {
        let mode = mode.parse::<Mode>()?;
        Ok(Self::with_mode(owner, registry_date, expiry_date, mode, max_nodes))
    }

    /// Build a registration from an already-typed mode. Infallible.
    pub fn with_mode(
        owner: impl Into<String>,
        registry_date: Timestamp,
        expiry_date: Timestamp,
        mode: Mode,
        max_nodes: u32,
    ) -> Self {
        Self {
            owner: owner.into(),
            registry_date,
            expiry_date,
            mode,
            max_nodes,
        }
    }

    /// The license holder.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// When the registration was issued.
    pub fn registry_date(&self) -> Timestamp {
        self.registry_date
    }

    /// When a trial registration stops being valid.
    pub fn expiry_date(&self) -> Timestamp {
        self.expiry_date
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Maximum cluster size permitted under this license.
    pub fn max_nodes(&self) -> u32 {
        self.max_nodes
    }

    /// Whether the wall clock is strictly past the expiry date.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }

    /// Whether `now` is strictly past the expiry date. Equality is not expiry.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expiry_date
    }

    /// Whether the registration may be used right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Timestamp::now())
    }

    /// Whether the registration may be used at `now`: always for `FULL`,
    /// and for `TRIAL` only until the expiry date has passed.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        match self.mode {
            Mode::Full => true,
            Mode::Trial => !self.is_expired_at(now),
        }
    }
}
