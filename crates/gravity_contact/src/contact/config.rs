//! Configuration for building a [`crate::contact::GravityContactModel`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_DISTANCE: f64 = 0.25;
pub const DEFAULT_EXPONENT: f64 = -2.0;

/// Contact radius and distance-decay power.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityConfig {
    /// Individuals farther apart than this are not in contact.
    pub max_distance: f64,
    /// Power applied to the distance; negative values make gravity fall off with distance.
    pub exponent: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl GravityConfig {
    /// Creates a configuration with the default radius and exponent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contact radius.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Sets the gravity exponent.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Gravity between two individuals `distance` apart.
    #[inline]
    pub fn gravity(&self, distance: f64) -> f64 {
        distance.powf(self.exponent)
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// A radius of zero is accepted: it yields a model without contacts.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_distance must be >= 0, got {}",
                self.max_distance
            )));
        }
        if !self.exponent.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "exponent must be finite, got {}",
                self.exponent
            )));
        }

        Ok(())
    }
}
