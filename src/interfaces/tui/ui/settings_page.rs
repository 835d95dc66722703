//! 摄像头设置页

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::interfaces::tui::app::{App, SettingsColumn};
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::palette::Palette;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.settings.view();
    let view = view.read();
    let cursor = app.settings_cursor;

    let header = Row::new(
        std::iter::once(Cell::from("Камера"))
            .chain(SettingsColumn::ALL.iter().map(|column| Cell::from(column.title()))),
    )
    .style(palette.title());

    let rows = view.cameras.iter().enumerate().map(|(index, (camera, controls))| {
        let cells = SettingsColumn::ALL.iter().enumerate().map(|(column_index, column)| {
            let (text, mut style) = match column {
                SettingsColumn::Flag(setting) => match controls.flags.get(setting) {
                    Some(checkbox) if checkbox.locked => (
                        if checkbox.checked { "[x] 🔒" } else { "[ ] 🔒" }.to_string(),
                        Style::default().fg(colors::MUTED),
                    ),
                    Some(checkbox) => (
                        if checkbox.checked { "[x]" } else { "[ ]" }.to_string(),
                        Style::default().fg(palette.text),
                    ),
                    None => ("-".to_string(), Style::default().fg(colors::MUTED)),
                },
                SettingsColumn::Timeout => (
                    format!("{} с", controls.timeout),
                    Style::default().fg(palette.text),
                ),
                SettingsColumn::Sensitivity => (
                    format!("◀ {} ▶", controls.sensitivity_label),
                    Style::default().fg(palette.text),
                ),
            };
            if index == cursor.camera && column_index == cursor.column {
                style = Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG)
                    .bold();
            }
            Cell::from(text).style(style)
        });
        Row::new(std::iter::once(Cell::from(format!("Камера {}", camera))).chain(cells))
    });

    let mut widths = vec![Constraint::Length(10)];
    widths.extend(SettingsColumn::ALL.iter().map(|_| Constraint::Min(9)));

    let title = match &view.last_sync_error {
        Some(error) => format!("Настройки камер | {}", error),
        None => "Настройки камер".to_string(),
    };
    let title_style = if view.last_sync_error.is_some() {
        Style::default().fg(Color::Red).bold()
    } else {
        palette.title()
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(table, area);
}
