//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::NotificationManager;
use crate::domain::{BookingSession, Driver, RideCatalog};
use crate::infrastructure::{AppConfig, TimerEvent, TimerReceiver, timer_channel};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{BookingScreen, BookingView, ViewKeyResult};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);

/// Top-level application: booking view, notice queue and timer channel.
pub struct App {
    view: BookingView,
    notifications: Arc<NotificationManager>,
    timer_rx: TimerReceiver,
    exiting: bool,
}

impl App {
    /// Builds the app from the resolved configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let notifications = Arc::new(NotificationManager::new(config.notification_duration()));
        let (timer_tx, timer_rx) = timer_channel();

        let session = BookingSession::new(
            RideCatalog::standard(),
            Driver::demo(),
            config.booking.default_pickup.clone(),
        );
        let view = BookingView::new(session, &config.booking, notifications.clone(), timer_tx)
            .with_theme(Theme::new(&config.theme.accent_color))
            .with_map(config.ui.show_map);

        Self {
            view,
            notifications,
            timer_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.view.mount();
        let result = self.run_event_loop(terminal).await;
        self.view.unmount();

        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                biased;

                Some(event) = self.timer_rx.recv() => {
                    self.handle_timer(event);
                }

                _ = notification_interval.tick() => {
                    self.notifications.tick();
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event) == EventResult::Exit {
                                self.exiting = true;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.exiting = true,
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        self.view.handle_timer(event);
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match EventHandler::key_press(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.view.handle_key(key) {
            ViewKeyResult::Quit => EventResult::Exit,
            ViewKeyResult::DriverAction(action) => {
                debug!(action = action.label(), "Driver action pressed");
                EventResult::Continue
            }
            ViewKeyResult::Consumed | ViewKeyResult::Ignored => EventResult::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let notification = self.notifications.current_notification();
        frame.render_widget(
            BookingScreen::new(&self.view).notification(notification.as_ref()),
            frame.area(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RideState;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_escape_exits() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(app.handle_terminal_event(&key(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn test_empty_search_queues_warning() {
        let mut app = App::new(&AppConfig::default());

        assert_eq!(
            app.handle_terminal_event(&key(KeyCode::Enter)),
            EventResult::Continue
        );

        let notice = app.notifications.current_notification().unwrap();
        assert_eq!(notice.title, "Enter destination");
        assert_eq!(app.view.state(), RideState::Search);
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_completion_queues_driver_notice() {
        let mut app = App::new(&AppConfig::default());
        for c in "Pier 39".chars() {
            app.handle_terminal_event(&key(KeyCode::Char(c)));
        }
        app.handle_terminal_event(&key(KeyCode::Enter));
        app.handle_terminal_event(&key(KeyCode::Char('1')));
        app.handle_terminal_event(&key(KeyCode::Enter));
        assert_eq!(app.view.state(), RideState::Matching);

        while app.view.state() == RideState::Matching {
            let event = app.timer_rx.recv().await.unwrap();
            app.handle_timer(event);
        }

        let notice = app.notifications.current_notification().unwrap();
        assert_eq!(notice.title, "Driver Found!");
        assert_eq!(app.notifications.len(), 1);
    }
}
