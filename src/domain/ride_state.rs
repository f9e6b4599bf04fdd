/// Top-level state of a booking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RideState {
    #[default]
    Search,
    Options,
    Matching,
    Confirmed,
}

impl RideState {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Options => "options",
            Self::Matching => "matching",
            Self::Confirmed => "confirmed",
        }
    }

    /// True for `confirmed`.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl std::fmt::Display for RideState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
