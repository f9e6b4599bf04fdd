use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

use crate::domain::RideState;

/// What a key press asks the booking view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Search form
    Search,
    FocusNextField,
    FocusPreviousField,

    // Ride list
    NavigateUp,
    NavigateDown,
    SelectHighlighted,
    SelectIndex(u8),
    ConfirmRide,

    // Confirmed card
    NextDriverAction,
    PreviousDriverAction,
    ActivateDriverAction,
}

/// A key, the action it triggers and how the footer shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Binding shown in the footer under `label`.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Keeps the binding out of the footer.
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Overrides the key text shown in the footer.
    pub fn display(mut self, key_display: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(key_display.into());
        self
    }

    /// Compares code and modifiers, ignoring event kind. `BackTab` matches with
    /// any modifiers since terminals disagree on reporting `SHIFT` with it.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code
            && (self.key.modifiers == key.modifiers || key.code == KeyCode::BackTab)
    }
}

/// Digit shortcuts `1..=RIDE_SHORTCUTS`, one per option of the standard catalog.
const RIDE_SHORTCUTS: u8 = 5;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn global_bindings() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit"),
        Keybind::new(ctrl('c'), Action::Quit, "Quit").hidden(),
    ]
}

/// Bindings active in `state`, in footer display order.
#[must_use]
pub fn bindings_for(state: RideState) -> Vec<Keybind> {
    let mut bindings = match state {
        RideState::Search => vec![
            Keybind::new(key(KeyCode::Enter), Action::Search, "Search Rides"),
            Keybind::new(key(KeyCode::Tab), Action::FocusNextField, "Next Field"),
            Keybind::new(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                Action::FocusPreviousField,
                "Previous Field",
            )
            .hidden(),
            Keybind::new(key(KeyCode::Down), Action::FocusNextField, "Next Field").hidden(),
            Keybind::new(key(KeyCode::Up), Action::FocusPreviousField, "Previous Field").hidden(),
        ],
        RideState::Options => {
            let mut list = vec![
                Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up"),
                Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down"),
                Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Char(' ')), Action::SelectHighlighted, "Select")
                    .display("Space"),
                Keybind::new(key(KeyCode::Enter), Action::ConfirmRide, "Confirm"),
            ];
            for n in 1..=RIDE_SHORTCUTS {
                list.push(
                    Keybind::new(
                        key(KeyCode::Char(char::from(b'0' + n))),
                        Action::SelectIndex(n - 1),
                        "Pick",
                    )
                    .hidden(),
                );
            }
            list
        }
        RideState::Matching => Vec::new(),
        RideState::Confirmed => vec![
            Keybind::new(key(KeyCode::Right), Action::NextDriverAction, "Next"),
            Keybind::new(key(KeyCode::Left), Action::PreviousDriverAction, "Previous"),
            Keybind::new(key(KeyCode::Tab), Action::NextDriverAction, "Next").hidden(),
            Keybind::new(key(KeyCode::Enter), Action::ActivateDriverAction, "Activate"),
        ],
    };

    bindings.extend(global_bindings());
    bindings
}

/// Resolves a key press to the action bound in `state`.
#[must_use]
pub fn resolve(state: RideState, key: &KeyEvent) -> Option<Action> {
    bindings_for(state)
        .into_iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}
