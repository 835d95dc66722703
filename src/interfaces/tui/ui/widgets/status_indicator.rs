//! 状态面板与按钮的渲染

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

use crate::dashboard::view::{Button, StatusKind, StatusPanel};
use crate::interfaces::tui::constants::colors;

/// 把控制器的 [`StatusPanel`] 渲染成一行文本
pub struct StatusIndicator;

impl StatusIndicator {
    pub fn color(kind: StatusKind, neutral: Color) -> Color {
        match kind {
            StatusKind::Success => colors::SUCCESS,
            StatusKind::Warning => colors::WARNING,
            StatusKind::Error => colors::ERROR,
            StatusKind::Info => neutral,
        }
    }

    /// 隐藏的面板渲染为空行
    pub fn line(panel: &StatusPanel, neutral: Color) -> Line<'static> {
        if !panel.visible {
            return Line::default();
        }
        let symbol = match panel.kind {
            StatusKind::Success => "✓",
            StatusKind::Warning => "⚠",
            StatusKind::Error => "✗",
            StatusKind::Info => "ℹ",
        };
        let color = Self::color(panel.kind, neutral);
        Line::from(vec![
            Span::styled(format!("{} ", symbol), Style::default().fg(color).bold()),
            Span::styled(panel.text.clone(), Style::default().fg(color)),
        ])
    }
}

/// `[key] label`，禁用的按钮显示为灰色
pub fn button_span(key: &str, button: &Button, color: Color) -> Vec<Span<'static>> {
    let style = if button.enabled {
        Style::default().fg(color).bold()
    } else {
        Style::default().fg(colors::MUTED)
    };
    vec![
        Span::styled(format!("[{}] ", key), style),
        Span::styled(button.label.clone(), style),
    ]
}
