//! Booking view: owns the session, the form inputs and both timers.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, trace, warn};

use crate::application::SurgePricing;
use crate::domain::keybinding::{self, Action};
use crate::domain::{
    BookingError, BookingSession, MatchTick, NotificationLevel, NotificationPort, RideState,
};
use crate::infrastructure::{BookingConfig, PeriodicTask, TimerEvent, TimerSender};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Search form field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Pickup address.
    Pickup,
    /// Destination address.
    Destination,
}

/// Buttons on the confirmed card. Neither has behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAction {
    /// "Contact Driver".
    Contact,
    /// "Cancel Ride".
    Cancel,
}

impl DriverAction {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact Driver",
            Self::Cancel => "Cancel Ride",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Contact => Self::Cancel,
            Self::Cancel => Self::Contact,
        }
    }
}

/// Outcome of [`BookingView::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKeyResult {
    /// The key changed the view.
    Consumed,
    /// No binding and no text input for the key.
    Ignored,
    /// The user asked to leave.
    Quit,
    /// A driver button was activated on the confirmed card.
    DriverAction(DriverAction),
}

/// Interactive booking screen state.
///
/// Owns the [`BookingSession`], the address inputs and the surge and match
/// timers. Timer events come back through [`BookingView::handle_timer`].
pub struct BookingView {
    session: BookingSession,
    notifier: Arc<dyn NotificationPort>,
    surge_pricing: SurgePricing,
    surge_interval: Duration,
    match_tick: Duration,
    match_step: u8,
    timer_tx: TimerSender,
    surge_task: Option<PeriodicTask>,
    match_task: Option<PeriodicTask>,
    match_epoch: u64,
    pickup_input: TextInput,
    destination_input: TextInput,
    focus: FormField,
    highlighted: usize,
    driver_action: DriverAction,
    theme: Theme,
    show_map: bool,
}

impl BookingView {
    /// Builds a view over `session`. Invalid timings in `config` fall back
    /// to their defaults. Timers stay idle until [`BookingView::mount`].
    #[must_use]
    pub fn new(
        session: BookingSession,
        config: &BookingConfig,
        notifier: Arc<dyn NotificationPort>,
        timer_tx: TimerSender,
    ) -> Self {
        let config = config.clone().validated();
        let theme = Theme::default();

        let pickup_input = TextInput::new("Pickup")
            .placeholder("Pickup location")
            .accent(theme.accent)
            .with_value(session.pickup());
        let mut destination_input = TextInput::new("Destination")
            .placeholder("Where are you going?")
            .accent(theme.accent);
        destination_input.set_focused(true);

        Self {
            session,
            notifier,
            surge_pricing: SurgePricing::from_seed(config.surge_seed),
            surge_interval: config.surge_interval(),
            match_tick: config.match_tick(),
            match_step: config.match_step,
            timer_tx,
            surge_task: None,
            match_task: None,
            match_epoch: 0,
            pickup_input,
            destination_input,
            focus: FormField::Destination,
            highlighted: 0,
            driver_action: DriverAction::Contact,
            theme,
            show_map: true,
        }
    }

    /// Replaces the default theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.pickup_input = self.pickup_input.accent(theme.accent);
        self.destination_input = self.destination_input.accent(theme.accent);
        self.theme = theme;
        self
    }

    /// Shows or hides the map panel.
    #[must_use]
    pub fn with_map(mut self, show_map: bool) -> Self {
        self.show_map = show_map;
        self
    }

    /// Starts the surge timer. Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        if !self.is_surge_running() {
            self.surge_task = Some(PeriodicTask::spawn(
                "surge",
                self.surge_interval,
                TimerEvent::SurgeTick,
                self.timer_tx.clone(),
            ));
            info!(state = %self.session.state(), "Booking view mounted");
        }
    }

    /// Stops every timer. Later ticks still in the channel are ignored.
    pub fn unmount(&mut self) {
        let had_match = self.match_task.take().is_some();
        if self.surge_task.take().is_some() || had_match {
            info!(state = %self.session.state(), "Booking view unmounted");
        }
    }

    /// Booking state behind the view.
    #[must_use]
    pub const fn session(&self) -> &BookingSession {
        &self.session
    }

    /// Current ride state.
    #[must_use]
    pub const fn state(&self) -> RideState {
        self.session.state()
    }

    /// Pickup address input.
    #[must_use]
    pub const fn pickup_input(&self) -> &TextInput {
        &self.pickup_input
    }

    /// Destination address input.
    #[must_use]
    pub const fn destination_input(&self) -> &TextInput {
        &self.destination_input
    }

    /// Field receiving typed characters.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Index of the highlighted ride row.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Focused button on the confirmed card.
    #[must_use]
    pub const fn driver_action(&self) -> DriverAction {
        self.driver_action
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the map panel is drawn.
    #[must_use]
    pub const fn show_map(&self) -> bool {
        self.show_map
    }

    /// True while the surge loop is alive.
    #[must_use]
    pub fn is_surge_running(&self) -> bool {
        self.surge_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// True while matching is in progress and its timer is alive.
    #[must_use]
    pub fn is_match_running(&self) -> bool {
        self.match_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Resolves `key` against the current state's bindings, falling back to
    /// text editing on the search form.
    pub fn handle_key(&mut self, key: KeyEvent) -> ViewKeyResult {
        let state = self.session.state();
        match keybinding::resolve(state, &key) {
            Some(action) => self.apply(action),
            None if state == RideState::Search => self.edit_focused_input(key),
            None => ViewKeyResult::Ignored,
        }
    }

    fn apply(&mut self, action: Action) -> ViewKeyResult {
        match action {
            Action::Quit => return ViewKeyResult::Quit,
            Action::Search => self.search(),
            Action::FocusNextField | Action::FocusPreviousField => self.toggle_focus(),
            Action::NavigateUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            Action::NavigateDown => {
                let last = self.session.catalog().len().saturating_sub(1);
                self.highlighted = (self.highlighted + 1).min(last);
            }
            Action::SelectHighlighted => self.select_index(self.highlighted),
            Action::SelectIndex(index) => self.select_index(usize::from(index)),
            Action::ConfirmRide => self.confirm(),
            Action::NextDriverAction | Action::PreviousDriverAction => {
                self.driver_action = self.driver_action.toggled();
            }
            Action::ActivateDriverAction => {
                info!(action = self.driver_action.label(), "Driver action has no effect yet");
                return ViewKeyResult::DriverAction(self.driver_action);
            }
        }
        ViewKeyResult::Consumed
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Pickup => &mut self.pickup_input,
            FormField::Destination => &mut self.destination_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Pickup => FormField::Destination,
            FormField::Destination => FormField::Pickup,
        };
        self.pickup_input
            .set_focused(self.focus == FormField::Pickup);
        self.destination_input
            .set_focused(self.focus == FormField::Destination);
    }

    fn edit_focused_input(&mut self, key: KeyEvent) -> ViewKeyResult {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return ViewKeyResult::Ignored;
        }

        let input = self.focused_input();
        match key.code {
            KeyCode::Char(c) => input.input_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => return ViewKeyResult::Ignored,
        }

        self.sync_form();
        ViewKeyResult::Consumed
    }

    fn sync_form(&mut self) {
        self.session.set_pickup(self.pickup_input.value());
        self.session.set_destination(self.destination_input.value());
    }

    /// Submits the search form.
    pub fn search(&mut self) {
        self.sync_form();
        match self.session.search() {
            Ok(()) => {
                self.highlighted = 0;
                info!(destination = %self.session.destination(), "Searching rides");
            }
            Err(BookingError::EmptyDestination) => {
                self.notifier.send(
                    NotificationLevel::Warn,
                    "Enter destination",
                    "Please enter where you want to go",
                );
            }
            Err(e) => debug!(error = %e, "Search ignored"),
        }
    }

    fn select_index(&mut self, index: usize) {
        let Some(id) = self
            .session
            .catalog()
            .get_index(index)
            .map(|option| option.id().clone())
        else {
            return;
        };

        self.highlighted = index;
        if let Err(e) = self.session.select_ride(&id) {
            debug!(error = %e, "Selection ignored");
        } else {
            debug!(ride = %id, "Ride selected");
        }
    }

    /// Confirms the selected ride and starts matching.
    pub fn confirm(&mut self) {
        match self.session.confirm() {
            Ok(()) => {
                self.match_epoch += 1;
                self.match_task = Some(PeriodicTask::spawn(
                    "match",
                    self.match_tick,
                    TimerEvent::MatchTick {
                        epoch: self.match_epoch,
                    },
                    self.timer_tx.clone(),
                ));
                info!(
                    ride = ?self.session.selected_id().map(ToString::to_string),
                    epoch = self.match_epoch,
                    "Matching started"
                );
            }
            Err(e) => debug!(error = %e, "Confirm ignored"),
        }
    }

    /// Applies a timer event sent by one of the view's tasks.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::SurgeTick => {
                let surge = self.surge_pricing.sample();
                self.session.apply_surge(surge);
                debug!(surge = %surge, "Surge updated");
            }
            TimerEvent::MatchTick { epoch } => self.on_match_tick(epoch),
        }
    }

    fn on_match_tick(&mut self, epoch: u64) {
        if self.match_task.is_none() || epoch != self.match_epoch {
            trace!(epoch, current = self.match_epoch, "Stale match tick");
            return;
        }

        match self.session.advance_match(self.match_step) {
            MatchTick::Progressed(progress) => trace!(%progress, "Match progressed"),
            MatchTick::Completed => {
                self.match_task = None;
                let driver = self.session.driver().name().to_string();
                info!(driver = %driver, "Driver matched");
                self.notifier.send(
                    NotificationLevel::Success,
                    "Driver Found!",
                    &format!("{driver} is on the way"),
                );
            }
            MatchTick::Ignored => {
                warn!(state = %self.session.state(), "Match timer running outside matching");
                self.match_task = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockNotificationPort, RecordingNotificationPort};
    use crate::domain::{MatchProgress, RideOptionId};
    use crate::infrastructure::{TimerReceiver, timer_channel};

    fn press(view: &mut BookingView, code: KeyCode) -> ViewKeyResult {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut BookingView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    fn recording_view() -> (BookingView, Arc<RecordingNotificationPort>, TimerReceiver) {
        let port = Arc::new(RecordingNotificationPort::new());
        let (tx, rx) = timer_channel();
        let config = BookingConfig {
            surge_seed: Some(7),
            ..BookingConfig::default()
        };
        let view = BookingView::new(BookingSession::default(), &config, port.clone(), tx);
        (view, port, rx)
    }

    fn to_matching(view: &mut BookingView) {
        type_text(view, "456 Oak Ave");
        press(view, KeyCode::Enter);
        press(view, KeyCode::Char(' '));
        press(view, KeyCode::Enter);
        assert_eq!(view.state(), RideState::Matching);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_booking_flow() {
        let (mut view, port, mut rx) = recording_view();
        view.mount();

        type_text(&mut view, "456 Oak Ave");
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.state(), RideState::Options);
        assert_eq!(view.session().destination(), "456 Oak Ave");

        press(&mut view, KeyCode::Char(' '));
        assert_eq!(
            view.session().selected_id(),
            Some(&RideOptionId::new("economy"))
        );

        press(&mut view, KeyCode::Enter);
        assert_eq!(view.state(), RideState::Matching);
        assert_eq!(view.session().progress(), MatchProgress::ZERO);

        let mut match_ticks = 0;
        while view.state() == RideState::Matching {
            let event = rx.recv().await.unwrap();
            if matches!(event, TimerEvent::MatchTick { .. }) {
                match_ticks += 1;
            }
            view.handle_timer(event);
        }

        assert_eq!(match_ticks, 10);
        assert_eq!(view.state(), RideState::Confirmed);
        assert!(!view.is_match_running());
        assert_eq!(port.titles(), ["Driver Found!"]);
        let (level, _, body) = port.notifications.lock()[0].clone();
        assert_eq!(level, NotificationLevel::Success);
        assert_eq!(body, "Alex Johnson is on the way");

        tokio::time::sleep(Duration::from_secs(2)).await;
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event, TimerEvent::SurgeTick);
            view.handle_timer(event);
        }
        assert_eq!(port.count(), 1);
    }

    #[test]
    fn test_empty_destination_warns() {
        let mut mock = MockNotificationPort::new();
        mock.expect_send()
            .withf(|level, title, _| {
                *level == NotificationLevel::Warn && title.to_string() == "Enter destination"
            })
            .times(1)
            .return_const(());

        let (tx, _rx) = timer_channel();
        let mut view = BookingView::new(
            BookingSession::default(),
            &BookingConfig::default(),
            Arc::new(mock),
            tx,
        );

        type_text(&mut view, "   ");
        press(&mut view, KeyCode::Enter);

        assert_eq!(view.state(), RideState::Search);
    }

    #[test]
    fn test_confirm_without_selection_stays_in_options() {
        let (mut view, port, _rx) = recording_view();
        type_text(&mut view, "456 Oak Ave");
        press(&mut view, KeyCode::Enter);

        press(&mut view, KeyCode::Enter);

        assert_eq!(view.state(), RideState::Options);
        assert!(!view.is_match_running());
        assert_eq!(port.count(), 0);
    }

    #[test]
    fn test_selection_can_change_before_confirm() {
        let (mut view, _port, _rx) = recording_view();
        type_text(&mut view, "456 Oak Ave");
        press(&mut view, KeyCode::Enter);

        press(&mut view, KeyCode::Char('3'));
        assert_eq!(view.highlighted(), 2);
        assert_eq!(
            view.session().selected_id(),
            Some(&RideOptionId::new("premium"))
        );

        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Char(' '));
        assert_eq!(view.session().selected_id(), Some(&RideOptionId::new("xl")));

        press(&mut view, KeyCode::Char('9'));
        assert_eq!(view.session().selected_id(), Some(&RideOptionId::new("xl")));
        assert_eq!(view.state(), RideState::Options);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let (mut view, _port, _rx) = recording_view();
        assert_eq!(view.focus(), FormField::Destination);

        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus(), FormField::Pickup);
        assert!(view.pickup_input().is_focused());

        press(&mut view, KeyCode::Backspace);
        assert_eq!(view.session().pickup(), "123 Main Street, San Francisc");

        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "Pier 39");
        assert_eq!(view.session().destination(), "Pier 39");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_during_matching_stops_progress() {
        let (mut view, port, mut rx) = recording_view();
        view.mount();
        to_matching(&mut view);

        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            view.handle_timer(event);
        }
        assert_eq!(view.session().progress().value(), 20);

        view.unmount();
        assert!(!view.is_surge_running());
        assert!(!view.is_match_running());

        tokio::time::sleep(Duration::from_secs(30)).await;
        while let Ok(event) = rx.try_recv() {
            view.handle_timer(event);
        }

        assert_eq!(view.state(), RideState::Matching);
        assert_eq!(view.session().progress().value(), 20);
        assert_eq!(port.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_epoch_is_ignored() {
        let (mut view, _port, _rx) = recording_view();
        to_matching(&mut view);

        view.handle_timer(TimerEvent::MatchTick { epoch: 99 });
        assert_eq!(view.session().progress(), MatchProgress::ZERO);

        view.handle_timer(TimerEvent::MatchTick { epoch: 1 });
        assert_eq!(view.session().progress().value(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_surge_ticks_stay_in_range() {
        let (mut view, _port, mut rx) = recording_view();
        view.mount();
        view.mount();

        for _ in 0..3 {
            let event = rx.recv().await.unwrap();
            assert_eq!(event, TimerEvent::SurgeTick);
            view.handle_timer(event);

            let surge = view.session().surge().value();
            assert!((1.0..1.3).contains(&surge), "surge {surge} out of range");
        }
        assert_eq!(view.state(), RideState::Search);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_view_closes_timers() {
        let (mut view, _port, mut rx) = recording_view();
        view.mount();
        to_matching(&mut view);

        drop(view);

        let mut drained = 0;
        while rx.recv().await.is_some() {
            drained += 1;
        }
        assert!(drained <= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_match_step_falls_back_to_default() {
        let (tx, mut rx) = timer_channel();
        let config = BookingConfig {
            match_step: 0,
            ..BookingConfig::default()
        };
        let port = Arc::new(RecordingNotificationPort::new());
        let mut view = BookingView::new(BookingSession::default(), &config, port.clone(), tx);
        to_matching(&mut view);

        let mut match_ticks = 0;
        while view.state() == RideState::Matching {
            let event = rx.recv().await.unwrap();
            match_ticks += 1;
            view.handle_timer(event);
            assert_eq!(view.session().progress().value(), match_ticks * 10);
        }

        assert_eq!(match_ticks, 10);
        assert_eq!(port.titles(), ["Driver Found!"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_surge_timer_reported_stopped_after_receiver_closes() {
        let (mut view, _port, rx) = recording_view();
        view.mount();
        assert!(view.is_surge_running());

        drop(rx);
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(!view.is_surge_running());

        // Remounting replaces the dead task.
        view.mount();
        assert!(view.is_surge_running());
    }

    #[test]
    fn test_driver_actions_are_inert() {
        let (mut view, _port, _rx) = recording_view();
        assert_eq!(
            view.apply(Action::ActivateDriverAction),
            ViewKeyResult::DriverAction(DriverAction::Contact)
        );
        assert_eq!(view.state(), RideState::Search);
        assert_eq!(press(&mut view, KeyCode::Esc), ViewKeyResult::Quit);
    }
}
