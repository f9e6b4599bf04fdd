use crate::domain::NotificationLevel;

/// Port for transient user-facing notices. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    /// Surfaces a notice with a title, body and severity.
    fn send(&self, level: NotificationLevel, title: &str, body: &str);
}
