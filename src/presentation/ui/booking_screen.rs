//! Booking screen rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::domain::keybinding::bindings_for;
use crate::domain::{Notification, RideState};
use crate::presentation::theme::Theme;
use crate::presentation::ui::booking_view::{BookingView, DriverAction};
use crate::presentation::ui::notification_popup::NotificationPopup;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, RideList,
};

const APP_TITLE: &str = "RideAI";
const APP_BADGE: &str = "AI-Powered Matching";
const MAP_MIN_WIDTH: u16 = 100;
const ROUTE_SUMMARY: &str = "~15 min • 4.2 mi";
const CREDITS: &str = "Built with AI/ML for intelligent ride matching";

/// Full-screen render of a [`BookingView`].
pub struct BookingScreen<'a> {
    view: &'a BookingView,
    notification: Option<&'a Notification>,
}

impl<'a> BookingScreen<'a> {
    /// Renders `view` without a toast.
    #[must_use]
    pub const fn new(view: &'a BookingView) -> Self {
        Self {
            view,
            notification: None,
        }
    }

    /// Toast drawn over the screen.
    #[must_use]
    pub const fn notification(mut self, notification: Option<&'a Notification>) -> Self {
        self.notification = notification;
        self
    }
}

impl Widget for BookingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, content_area, credits_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(self.view, header_area, buf);
        render_content(self.view, content_area, buf);
        Paragraph::new(Span::styled(CREDITS, self.view.theme().dimmed_style))
            .alignment(Alignment::Center)
            .render(credits_area, buf);
        render_footer(self.view, footer_area, buf);

        if let Some(notification) = self.notification {
            NotificationPopup::new(notification, self.view.theme()).render(area, buf);
        }
    }
}

fn render_header(view: &BookingView, area: Rect, buf: &mut Buffer) {
    HeaderBar::new(APP_TITLE, APP_BADGE)
        .ride_state(view.state())
        .style(HeaderBarStyle::from_theme(view.theme()))
        .render(area, buf);
}

fn render_footer(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let bindings = bindings_for(view.state());
    let context = view.state().as_str().to_uppercase();
    FooterBar::new(&bindings)
        .context(&context)
        .right_info(Some("Demo Project"))
        .style(FooterBarStyle::from_theme(view.theme()))
        .render(area, buf);
}

fn render_content(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let card_area = if view.show_map() && area.width >= MAP_MIN_WIDTH {
        let [map_area, card_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Min(50)]).areas(area);
        render_map(view, map_area, buf);
        card_area
    } else {
        area
    };

    match view.state() {
        RideState::Search => render_search(view, card_area, buf),
        RideState::Options => render_options(view, card_area, buf),
        RideState::Matching => render_matching(view, card_area, buf),
        RideState::Confirmed => render_confirmed(view, card_area, buf),
    }
}

fn card(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

fn render_map(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let theme = view.theme();
    let session = view.session();
    let destination = if session.destination().trim().is_empty() {
        "Not set"
    } else {
        session.destination()
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("🗺  Interactive Map View", theme.highlight_style)),
        Line::from(Span::styled("ML-optimized route displayed here", theme.dimmed_style)),
        Line::default(),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::raw(session.pickup().to_string()),
        ]),
        Line::from(Span::styled("┆", theme.dimmed_style)),
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(theme.warning)),
            Span::raw(destination.to_string()),
        ]),
        Line::default(),
        Line::from(Span::styled(ROUTE_SUMMARY, theme.dimmed_style)),
    ];

    Paragraph::new(lines)
        .block(card("Map", theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_search(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let theme = view.theme();
    let block = card("Where to?", theme);
    let inner = block.inner(area);
    block.render(area, buf);

    let [pickup_area, destination_area, hint_area, tiles_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(4),
    ])
    .areas(inner);

    view.pickup_input().render(pickup_area, buf);
    view.destination_input().render(destination_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("Enter", theme.highlight_style),
        Span::styled(" to search rides", theme.dimmed_style),
    ]))
    .alignment(Alignment::Center)
    .render(hint_area, buf);

    let tiles = [
        ("◎", "Smart Match"),
        ("⚡", "Dynamic Price"),
        ("◷", "ETA Prediction"),
    ];
    let tile_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(tiles_area);
    for ((icon, label), tile_area) in tiles.into_iter().zip(tile_areas.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(icon, theme.highlight_style)),
            Line::from(Span::styled(label, theme.dimmed_style)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.dimmed_style),
        )
        .render(*tile_area, buf);
    }
}

fn render_options(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let theme = view.theme();
    let session = view.session();

    let [list_area, confirm_area] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(3)]).areas(area);

    RideList::new(session.catalog(), theme)
        .surge(session.surge())
        .selected(session.selected_id())
        .highlighted(view.highlighted())
        .render(list_area, buf);

    if let Some(option) = session.selected_option() {
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" Confirm {} ", option.name()), theme.selection_style),
            Span::styled("  Enter", theme.dimmed_style),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(theme.dimmed_style))
        .render(confirm_area, buf);
    }
}

fn render_matching(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let theme = view.theme();
    let progress = view.session().progress();

    let block = card("Finding Your Driver", theme);
    let inner = block.inner(area);
    block.render(area, buf);

    let [_, text_area, gauge_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    Paragraph::new(vec![
        Line::from(Span::styled("◌ Finding Your Driver", theme.highlight_style)),
        Line::from(Span::styled(
            "AI matching based on ETA, rating & route",
            theme.dimmed_style,
        )),
    ])
    .alignment(Alignment::Center)
    .render(text_area, buf);

    let [_, bar_area, _] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .areas(gauge_area);

    Gauge::default()
        .gauge_style(Style::default().fg(theme.accent))
        .ratio(progress.ratio())
        .label(format!("{progress} matched"))
        .render(bar_area, buf);
}

fn render_confirmed(view: &BookingView, area: Rect, buf: &mut Buffer) {
    let theme = view.theme();
    let driver = view.session().driver();

    let block = card("Driver On The Way!", theme);
    let inner = block.inner(area);
    block.render(area, buf);

    let [details_area, buttons_area] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).areas(inner);

    let success = Style::default()
        .fg(theme.success)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("✓ Driver On The Way!", success)),
        Line::from(Span::styled(
            "Your AI-matched driver is arriving soon",
            theme.dimmed_style,
        )),
        Line::default(),
        Line::from(vec![
            Span::raw(format!("{} ", driver.avatar())),
            Span::styled(
                driver.name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("★ {:.2} • {} trips", driver.rating(), driver.trips()),
            theme.dimmed_style,
        )),
        Line::from(format!("{} • {}", driver.vehicle(), driver.plate())),
        Line::from(Span::styled("◷ Arriving in 3 minutes", theme.highlight_style)),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(details_area, buf);

    let button = |action: DriverAction| {
        let style = if view.driver_action() == action {
            theme.selection_style
        } else {
            theme.dimmed_style
        };
        Span::styled(format!(" {} ", action.label()), style)
    };
    Paragraph::new(Line::from(vec![
        button(DriverAction::Contact),
        Span::raw("   "),
        button(DriverAction::Cancel),
    ]))
    .alignment(Alignment::Center)
    .render(buttons_area, buf);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::domain::{BookingSession, NotificationLevel};
    use crate::domain::ports::mocks::RecordingNotificationPort;
    use crate::infrastructure::{BookingConfig, TimerEvent, timer_channel};

    fn view() -> BookingView {
        let (tx, _rx) = timer_channel();
        BookingView::new(
            BookingSession::default(),
            &BookingConfig::default(),
            Arc::new(RecordingNotificationPort::new()),
            tx,
        )
    }

    fn press(view: &mut BookingView, code: KeyCode) {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn to_options(view: &mut BookingView) {
        for c in "456 Oak Ave".chars() {
            press(view, KeyCode::Char(c));
        }
        press(view, KeyCode::Enter);
    }

    fn render(screen: BookingScreen<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 30);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_search_card_with_map() {
        let view = view();
        let text = render(BookingScreen::new(&view), 120);

        assert!(text.contains("RideAI"));
        assert!(text.contains("Interactive Map View"));
        assert!(text.contains("ML-optimized route displayed here"));
        assert!(!text.contains("Real-time"));
        assert!(text.contains("~15 min • 4.2 mi"));
        assert!(text.contains("Where to?"));
        assert!(text.contains("123 Main Street"));
        assert!(text.contains("Smart Match"));
        assert!(text.contains("ETA Prediction"));
        assert!(text.contains("Demo Project"));
        assert!(text.contains("Built with AI/ML for intelligent ride matching"));
    }

    #[test]
    fn test_map_hidden_when_disabled() {
        let view = view().with_map(false);
        let text = render(BookingScreen::new(&view), 120);
        assert!(!text.contains("Interactive Map View"));
        assert!(text.contains("Built with AI/ML for intelligent ride matching"));
    }

    #[test]
    fn test_options_card_shows_confirm_only_after_selection() {
        let mut view = view();
        to_options(&mut view);

        let text = render(BookingScreen::new(&view), 80);
        assert!(text.contains("Choose a Ride"));
        assert!(text.contains("RideAI Premium"));
        assert!(!text.contains("Confirm RideAI"));

        press(&mut view, KeyCode::Char('2'));
        let text = render(BookingScreen::new(&view), 80);
        assert!(text.contains("Confirm RideAI Comfort"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_matching_and_confirmed_cards() {
        let mut view = view();
        to_options(&mut view);
        press(&mut view, KeyCode::Char(' '));
        press(&mut view, KeyCode::Enter);

        for _ in 0..3 {
            view.handle_timer(TimerEvent::MatchTick { epoch: 1 });
        }
        let text = render(BookingScreen::new(&view), 80);
        assert!(text.contains("Finding Your Driver"));
        assert!(text.contains("30% matched"));

        for _ in 0..7 {
            view.handle_timer(TimerEvent::MatchTick { epoch: 1 });
        }
        let text = render(BookingScreen::new(&view), 80);
        assert!(text.contains("Driver On The Way!"));
        assert!(text.contains("Alex Johnson"));
        assert!(text.contains("★ 4.92 • 2847 trips"));
        assert!(text.contains("Tesla Model 3 • ABC 1234"));
        assert!(text.contains("Arriving in 3 minutes"));
        assert!(text.contains("Contact Driver"));
    }

    #[test]
    fn test_notification_overlay() {
        let view = view();
        let notice = Notification::new(
            NotificationLevel::Warn,
            "Enter destination",
            "Please enter where you want to go",
        );
        let text = render(BookingScreen::new(&view).notification(Some(&notice)), 100);
        assert!(text.contains("Enter destination"));
    }
}
