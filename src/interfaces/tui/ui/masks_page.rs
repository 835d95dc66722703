use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::palette::Palette;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.masks.view();
    let view = view.read();

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| ListItem::new(row.label.clone()).style(Style::default().fg(palette.text)))
        .collect();

    let title = if view.loaded {
        format!("Маски ({})", view.rows.len())
    } else {
        "Маски".to_string()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        )
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !view.rows.is_empty() {
        state.select(Some(app.mask_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
