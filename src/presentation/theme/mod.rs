//! Accent-derived styles shared by screens and widgets.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const FALLBACK_ACCENT: Color = Color::Magenta;

/// Colors and styles derived from one accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub highlight_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub badge_style: Style,
    pub warning: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Magenta")
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code, falling back to magenta.
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = darken(accent);

        Self {
            accent,
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            highlight_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            badge_style: Style::default().bg(selection_bg).fg(accent),
            warning: Color::Red,
            success: Color::Green,
        }
    }
}

fn darken(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 4, g / 4, b / 4),
        Color::Red | Color::LightRed => Color::Indexed(52),
        Color::Green | Color::LightGreen => Color::Indexed(22),
        Color::Yellow | Color::LightYellow => Color::Indexed(58),
        Color::Blue | Color::LightBlue => Color::Indexed(17),
        Color::Cyan | Color::LightCyan => Color::Indexed(23),
        Color::Magenta | Color::LightMagenta => Color::Indexed(53),
        _ => Color::DarkGray,
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "violet" | "purple" => Color::Rgb(139, 92, 246),
        _ => FALLBACK_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1].repeat(2), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[1..2].repeat(2), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[2..3].repeat(2), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}
