//! 主题配色
//!
//! 页面只通过 [`Palette`] 取色，切换主题后下一帧即生效。

use ratatui::style::{Color, Style, Stylize};

use crate::dashboard::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                border: Color::Gray,
            },
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::White,
                accent: Color::Cyan,
                border: Color::Cyan,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).bold()
    }
}

/// `#rrggbb` → terminal color, unknown input falls back to the text color
pub fn parse_hex(value: &str, fallback: Color) -> Color {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return fallback;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light).background, Color::White);
        assert_eq!(Palette::for_theme(Theme::Dark).accent, Color::Cyan);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#4CAF50", Color::White), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(parse_hex("green", Color::White), Color::White);
        assert_eq!(parse_hex("#zzzzzz", Color::White), Color::White);
    }
}
