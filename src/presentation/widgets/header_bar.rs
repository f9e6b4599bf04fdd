use crate::domain::RideState;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

trait RideStateExt {
    fn display_text(self) -> &'static str;
    fn indicator(self) -> &'static str;
}

impl RideStateExt for RideState {
    fn display_text(self) -> &'static str {
        match self {
            Self::Search => "SEARCH",
            Self::Options => "CHOOSE RIDE",
            Self::Matching => "MATCHING",
            Self::Confirmed => "CONFIRMED",
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Confirmed => "●",
            Self::Matching => "◐",
            Self::Search | Self::Options => "○",
        }
    }
}

/// Styles used by [`HeaderBar`].
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub badge: Style,
    pub state_idle: Style,
    pub state_matching: Style,
    pub state_confirmed: Style,
}

impl HeaderBarStyle {
    /// Header styles for `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            badge: theme.badge_style,
            state_idle: theme.selection_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            badge: Style::default().fg(Color::DarkGray),
            state_idle: Style::default().fg(Color::Gray),
            state_matching: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            state_confirmed: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar: app name, feature badge and the current ride state.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    badge: &'a str,
    ride_state: RideState,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Header showing `app_name` and `badge`.
    #[must_use]
    pub fn new(app_name: &'a str, badge: &'a str) -> Self {
        Self {
            app_name,
            badge,
            ride_state: RideState::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// State shown by the indicator.
    #[must_use]
    pub const fn ride_state(mut self, state: RideState) -> Self {
        self.ride_state = state;
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn state_style(&self) -> Style {
        match self.ride_state {
            RideState::Search | RideState::Options => self.style.state_idle,
            RideState::Matching => self.style.state_matching,
            RideState::Confirmed => self.style.state_confirmed,
        }
    }

    fn state_text(&self) -> String {
        format!(
            " {} {} ",
            self.ride_state.indicator(),
            self.ride_state.display_text()
        )
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name);
        let badge = format!(" ✦ {} ", self.badge);
        let left_width = u16::try_from(name.chars().count() + 1 + badge.chars().count())
            .unwrap_or(u16::MAX);

        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(badge, self.style.badge),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let state_text = self.state_text();
        let state_width = u16::try_from(state_text.chars().count()).unwrap_or(u16::MAX);

        if state_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(state_width);
            let right_area = Rect::new(right_x, area.y, state_width, 1);
            Paragraph::new(Line::from(Span::styled(state_text, self.state_style())))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_state_display() {
        assert_eq!(RideState::Search.display_text(), "SEARCH");
        assert_eq!(RideState::Options.display_text(), "CHOOSE RIDE");
        assert_eq!(RideState::Matching.indicator(), "◐");
        assert_eq!(RideState::Confirmed.indicator(), "●");
    }

    #[test]
    fn test_header_renders_name_and_state() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("RideAI", "AI-Powered Matching")
            .ride_state(RideState::Matching)
            .render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.starts_with(" RideAI "));
        assert!(line.trim_end().ends_with("MATCHING"));
    }
}
