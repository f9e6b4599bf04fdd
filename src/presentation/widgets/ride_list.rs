//! Ride option list with surge-adjusted prices.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::pricing::format_fare;
use crate::domain::{RideCatalog, RideOptionId, SurgeMultiplier};
use crate::presentation::theme::Theme;

const ROW_HEIGHT: u16 = 2;

/// Bordered list of ride options with surge-adjusted fares.
pub struct RideList<'a> {
    catalog: &'a RideCatalog,
    surge: SurgeMultiplier,
    selected: Option<&'a RideOptionId>,
    highlighted: usize,
    theme: &'a Theme,
}

impl<'a> RideList<'a> {
    /// Lists `catalog` at base prices with nothing selected.
    #[must_use]
    pub fn new(catalog: &'a RideCatalog, theme: &'a Theme) -> Self {
        Self {
            catalog,
            surge: SurgeMultiplier::NONE,
            selected: None,
            highlighted: 0,
            theme,
        }
    }

    /// Multiplier applied to every fare.
    #[must_use]
    pub const fn surge(mut self, surge: SurgeMultiplier) -> Self {
        self.surge = surge;
        self
    }

    /// Ride drawn as the current selection.
    #[must_use]
    pub const fn selected(mut self, selected: Option<&'a RideOptionId>) -> Self {
        self.selected = selected;
        self
    }

    /// Row under the cursor.
    #[must_use]
    pub const fn highlighted(mut self, index: usize) -> Self {
        self.highlighted = index;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            " Choose a Ride ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.surge.is_surging() {
            spans.push(Span::styled(
                format!(" ⚡ {} Surge Pricing ", self.surge.label()),
                Style::default()
                    .bg(self.theme.warning)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

fn pad_between(left: &[Span<'_>], right: &str, width: u16) -> usize {
    let used: usize = left.iter().map(|s| s.content.width()).sum::<usize>() + right.width();
    usize::from(width).saturating_sub(used)
}

impl Widget for RideList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (index, option) in self.catalog.iter().enumerate() {
            if y + ROW_HEIGHT > inner.bottom() {
                break;
            }

            let is_selected = self.selected == Some(option.id());
            let row_style = if is_selected {
                self.theme.selection_style
            } else if index == self.highlighted {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                self.theme.base_style
            };

            let marker = if is_selected { "▌" } else { " " };
            let mut top = vec![
                Span::styled(marker, Style::default().fg(self.theme.accent)),
                Span::raw(format!("{} ", option.icon())),
                Span::styled(
                    option.name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if option.is_ai_optimized() {
                top.push(Span::raw(" "));
                top.push(Span::styled(" AI Optimized ", self.theme.badge_style));
            }
            let price = format_fare(self.surge.apply(option.base_price()));
            top.push(Span::raw(" ".repeat(pad_between(&top, &price, inner.width))));
            top.push(Span::styled(price, self.theme.highlight_style));

            let eta = format!("◷ {} min", option.eta_minutes());
            let mut bottom = vec![
                Span::raw("   "),
                Span::styled(option.description().to_string(), self.theme.dimmed_style),
            ];
            bottom.push(Span::raw(" ".repeat(pad_between(&bottom, &eta, inner.width))));
            bottom.push(Span::styled(eta, self.theme.dimmed_style));

            let row = Rect::new(inner.x, y, inner.width, ROW_HEIGHT);
            Paragraph::new(vec![Line::from(top), Line::from(bottom)])
                .style(row_style)
                .alignment(Alignment::Left)
                .render(row, buf);

            y += ROW_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(list: RideList<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_rows_show_name_price_and_eta() {
        let catalog = RideCatalog::standard();
        let theme = Theme::default();
        let lines = render(RideList::new(&catalog, &theme));

        assert!(lines[1].contains("RideAI Economy"));
        assert!(lines[1].contains("AI Optimized"));
        assert!(lines[1].contains("$12.50"));
        assert!(lines[2].contains("Affordable rides"));
        assert!(lines[2].contains("5 min"));
        assert!(lines[3].contains("RideAI Comfort"));
    }

    #[test]
    fn test_prices_follow_surge_and_badge_appears() {
        let catalog = RideCatalog::standard();
        let theme = Theme::default();
        let surge = SurgeMultiplier::new(1.2).unwrap();
        let lines = render(RideList::new(&catalog, &theme).surge(surge));

        assert!(lines[0].contains("1.2x Surge Pricing"));
        assert!(lines[1].contains("$15.00"));
    }

    #[test]
    fn test_no_badge_without_surge() {
        let catalog = RideCatalog::standard();
        let theme = Theme::default();
        let surge = SurgeMultiplier::new(1.08).unwrap();
        let lines = render(RideList::new(&catalog, &theme).surge(surge));

        assert!(!lines[0].contains("Surge"));
        assert!(lines[1].contains("$13.50"));
    }
}
