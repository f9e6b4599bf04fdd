//! Ride option catalog entities.

use crate::domain::errors::BookingError;

/// Identifier of a ride tier in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RideOptionId(String);

impl RideOptionId {
    /// Creates an identifier from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RideOptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RideOptionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for RideOptionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RideOptionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A vehicle tier with a base price and ETA.
#[derive(Debug, Clone, PartialEq)]
pub struct RideOption {
    id: RideOptionId,
    name: String,
    description: String,
    base_price: f64,
    eta_minutes: u32,
    icon: String,
    /// Per-option surge override. Carried in the catalog but never applied.
    surge: Option<f64>,
    ai_optimized: bool,
}

impl RideOption {
    /// Creates a ride option.
    #[must_use]
    pub fn new(
        id: impl Into<RideOptionId>,
        name: impl Into<String>,
        description: impl Into<String>,
        base_price: f64,
        eta_minutes: u32,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price,
            eta_minutes,
            icon: icon.into(),
            surge: None,
            ai_optimized: false,
        }
    }

    /// Marks the option with the "AI Optimized" badge.
    #[must_use]
    pub const fn ai_optimized(mut self) -> Self {
        self.ai_optimized = true;
        self
    }

    /// Sets the per-option surge override.
    #[must_use]
    pub const fn with_surge(mut self, surge: f64) -> Self {
        self.surge = Some(surge);
        self
    }

    /// Unique id within the catalog.
    #[must_use]
    pub const fn id(&self) -> &RideOptionId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Base price before surge, in currency units.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Pickup estimate in minutes.
    #[must_use]
    pub const fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    /// Row icon.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Per-option surge override, not applied to fares.
    #[must_use]
    pub const fn surge(&self) -> Option<f64> {
        self.surge
    }

    /// Whether the row carries the AI badge.
    #[must_use]
    pub const fn is_ai_optimized(&self) -> bool {
        self.ai_optimized
    }
}

/// Immutable, ordered list of ride options offered by the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RideCatalog {
    options: Vec<RideOption>,
}

impl RideCatalog {
    /// Builds a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    /// Returns `BookingError::DuplicateRideOption` if two options share an id.
    pub fn new(options: Vec<RideOption>) -> Result<Self, BookingError> {
        for (index, option) in options.iter().enumerate() {
            if options[..index].iter().any(|o| o.id == option.id) {
                return Err(BookingError::DuplicateRideOption {
                    id: option.id.to_string(),
                });
            }
        }
        Ok(Self { options })
    }

    /// The five tiers offered by the demo.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            options: vec![
                RideOption::new("economy", "RideAI Economy", "Affordable rides", 12.50, 5, "🚗")
                    .ai_optimized(),
                RideOption::new(
                    "comfort",
                    "RideAI Comfort",
                    "Extra legroom & AC",
                    18.75,
                    3,
                    "🚙",
                ),
                RideOption::new("premium", "RideAI Premium", "Luxury vehicles", 32.00, 7, "🏎️"),
                RideOption::new("xl", "RideAI XL", "6 passengers", 24.50, 8, "🚐"),
                RideOption::new("green", "RideAI Green", "Electric vehicles", 14.00, 6, "⚡")
                    .ai_optimized(),
            ],
        }
    }

    /// Looks an option up by id.
    #[must_use]
    pub fn get(&self, id: &RideOptionId) -> Option<&RideOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Option at display position `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&RideOption> {
        self.options.get(index)
    }

    /// Display position of `id`.
    #[must_use]
    pub fn position(&self, id: &RideOptionId) -> Option<usize> {
        self.options.iter().position(|o| &o.id == id)
    }

    /// True if `id` is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &RideOptionId) -> bool {
        self.get(id).is_some()
    }

    /// Options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RideOption> {
        self.options.iter()
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when the catalog has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for RideCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
