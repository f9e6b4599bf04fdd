//! Surge multiplier and displayed fares.

use crate::domain::errors::BookingError;

/// Multiplier above which the surge badge is shown.
pub const SURGE_BADGE_THRESHOLD: f64 = 1.1;

/// Runtime price factor applied to every base price. Always `>= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SurgeMultiplier(f64);

impl SurgeMultiplier {
    /// No surge.
    pub const NONE: Self = Self(1.0);

    /// Creates a multiplier.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidSurgeMultiplier` for values below 1.0 or non-finite values.
    pub fn new(value: f64) -> Result<Self, BookingError> {
        if value.is_finite() && value >= 1.0 {
            Ok(Self(value))
        } else {
            Err(BookingError::InvalidSurgeMultiplier { value })
        }
    }

    /// Raw multiplier.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Price shown to the rider: `base × multiplier` rounded to cents.
    #[must_use]
    pub fn apply(self, base_price: f64) -> f64 {
        round_to_cents(base_price * self.0)
    }

    /// True when the surge badge should be shown.
    #[must_use]
    pub fn is_surging(self) -> bool {
        self.0 > SURGE_BADGE_THRESHOLD
    }

    /// Badge text, one decimal place: `1.2x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:.1}x", self.0)
    }
}

impl Default for SurgeMultiplier {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for SurgeMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats an amount as `$12.50`.
#[must_use]
pub fn format_fare(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_values_below_one() {
        assert!(SurgeMultiplier::new(0.99).is_err());
        assert!(SurgeMultiplier::new(f64::NAN).is_err());
        assert!(SurgeMultiplier::new(f64::INFINITY).is_err());
        assert!(SurgeMultiplier::new(1.0).is_ok());
    }

    #[test]
    fn test_apply_rounds_to_cents() {
        let surge = SurgeMultiplier::new(1.237).unwrap();
        assert!((surge.apply(12.50) - 15.46).abs() < 1e-9);
        assert!((SurgeMultiplier::NONE.apply(18.75) - 18.75).abs() < 1e-9);
    }

    #[test]
    fn test_badge() {
        assert!(!SurgeMultiplier::new(1.1).unwrap().is_surging());
        let surge = SurgeMultiplier::new(1.24).unwrap();
        assert!(surge.is_surging());
        assert_eq!(surge.label(), "1.2x");
    }

    #[test]
    fn test_format_fare() {
        assert_eq!(format_fare(12.5), "$12.50");
        assert_eq!(format_fare(32.0), "$32.00");
    }
}
