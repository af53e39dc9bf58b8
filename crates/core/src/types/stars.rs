//! Star count for a submitted review.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a star count is outside 1..=5.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stars must be between {min} and {max}, got {got}", min = Stars::MIN, max = Stars::MAX)]
pub struct StarsError {
    /// The rejected value.
    pub got: u8,
}

/// A review star count, always in 1..=5.
///
/// Distinct from [`crate::Rating`]: a `Stars` is what a single reviewer
/// picked, a `Rating` is a product's fractional aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    /// Smallest allowed star count.
    pub const MIN: u8 = 1;
    /// Largest allowed star count.
    pub const MAX: u8 = 5;
    /// The picker's default selection.
    pub const FIVE: Self = Self(5);

    /// Create a star count, validating the 1..=5 range.
    ///
    /// # Errors
    ///
    /// Returns [`StarsError`] when `value` is 0 or greater than 5.
    pub const fn new(value: u8) -> Result<Self, StarsError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(StarsError { got: value })
        }
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Stars {
    type Error = StarsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}
