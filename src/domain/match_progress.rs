/// Completion value of a matching episode.
pub const MATCH_COMPLETE: u8 = 100;

/// Simulated driver-matching progress, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MatchProgress(u8);

impl MatchProgress {
    /// No progress.
    pub const ZERO: Self = Self(0);

    /// Percentage in `0..=100`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True at 100.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 >= MATCH_COMPLETE
    }

    /// Advances by `step`, clamping at 100.
    #[must_use]
    pub fn advanced_by(self, step: u8) -> Self {
        Self(self.0.saturating_add(step).min(MATCH_COMPLETE))
    }

    /// Fraction for gauges, `0.0..=1.0`.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(MATCH_COMPLETE)
    }
}

impl std::fmt::Display for MatchProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_at_complete() {
        let progress = MatchProgress(95).advanced_by(10);
        assert_eq!(progress.value(), 100);
        assert!(progress.is_complete());
        assert_eq!(progress.advanced_by(u8::MAX).value(), 100);
    }

    #[test]
    fn test_ratio_and_display() {
        let progress = MatchProgress::ZERO.advanced_by(30);
        assert!((progress.ratio() - 0.3).abs() < 1e-9);
        assert_eq!(progress.to_string(), "30%");
    }
}
