//! Aggregate product rating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product's aggregate rating, clamped to 0.0..=5.0.
///
/// The fractional part only matters for display (the half-star cue);
/// everything the filter engine does uses [`Rating::floor_stars`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    /// Create a rating, clamping the value into 0.0..=5.0.
    ///
    /// NaN is treated as 0.
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 5.0))
    }

    /// Get the raw fractional value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whole-star part, as used by the minimum-stars filter.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn floor_stars(self) -> u8 {
        self.0.floor() as u8
    }

    /// Whether the fractional part earns the half-star display cue.
    #[must_use]
    pub fn has_half_step(self) -> bool {
        self.0 - self.0.floor() >= 0.5
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_bounds() {
        assert!((Rating::clamped(-1.0).value() - 0.0).abs() < f32::EPSILON);
        assert!((Rating::clamped(7.3).value() - 5.0).abs() < f32::EPSILON);
        assert!((Rating::clamped(f32::NAN).value() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn floor_stars_truncates() {
        assert_eq!(Rating::clamped(4.9).floor_stars(), 4);
        assert_eq!(Rating::clamped(5.0).floor_stars(), 5);
        assert_eq!(Rating::clamped(0.4).floor_stars(), 0);
    }

    #[test]
    fn half_step_threshold() {
        assert!(Rating::clamped(4.5).has_half_step());
        assert!(Rating::clamped(3.7).has_half_step());
        assert!(!Rating::clamped(4.2).has_half_step());
        assert!(!Rating::clamped(4.0).has_half_step());
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(Rating::clamped(4.5).to_string(), "4.5");
        assert_eq!(Rating::clamped(4.0).to_string(), "4.0");
    }
}
