use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{Notification, NotificationLevel, NotificationPort};

/// Toast queue shown one notice at a time.
#[derive(Debug)]
pub struct NotificationManager {
    queue: Mutex<VecDeque<Notification>>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    /// Creates an empty queue whose notices last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_duration,
        }
    }

    /// Queues a notice behind any already waiting.
    pub fn notify(
        &self,
        level: NotificationLevel,
        title: impl Into<String>,
        body: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, body).with_duration(self.default_duration);
        debug!(title = %notification.title, level = ?notification.level, "Notice queued");
        self.queue.lock().push_back(notification);
    }

    /// Expires the visible notice and promotes the next one.
    pub fn tick(&self) {
        let mut queue = self.queue.lock();
        if let Some(front) = queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                queue.pop_front();
                if let Some(next) = queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Notice at the front of the queue.
    #[must_use]
    pub fn current_notification(&self) -> Option<Notification> {
        self.queue.lock().front().cloned()
    }

    /// Number of queued notices, visible one included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl NotificationPort for NotificationManager {
    fn send(&self, level: NotificationLevel, title: &str, body: &str) {
        self.notify(level, title, body);
    }
}
