//! 单行输入框组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Адрес сервера", &view.form.remote_host)
///     .active(true)
///     .placeholder("192.168.1.10")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    /// 快捷键提示，显示在标题前
    hotkey: Option<char>,
    text_color: Color,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            hotkey: None,
            text_color: Color::White,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    fn display_title(&self) -> String {
        match self.hotkey {
            Some(key) => format!("[{}] {}", key, self.title),
            None => self.title.to_string(),
        }
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(colors::MUTED)
        }
    }

    /// 渲染输入框，`area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder.unwrap_or_default())
                .style(Style::default().fg(colors::MUTED))
        } else {
            Paragraph::new(self.value).style(Style::default().fg(self.text_color))
        };
        let input = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
