//! 主页：系统启停与摄像头网格

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::button_span;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::palette::{Palette, parse_hex};

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    draw_system(frame, app, palette, chunks[0]);
    draw_grid(frame, app, palette, chunks[1]);
}

fn draw_system(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.system.view();
    let view = view.read();

    let status = Line::from(vec![
        Span::styled("Статус: ", Style::default().fg(palette.text)),
        Span::styled(
            view.status_text.clone(),
            Style::default()
                .fg(parse_hex(&view.status_color, palette.text))
                .bold(),
        ),
    ]);
    let mut buttons = button_span("s", &view.start, colors::SUCCESS);
    buttons.push(Span::raw("    "));
    buttons.extend(button_span("x", &view.stop, colors::ERROR));

    let panel = Paragraph::new(vec![status, Line::default(), Line::from(buttons)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Система")
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        );
    frame.render_widget(panel, area);
}

fn draw_grid(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let tiles: Vec<_> = app
        .dashboard
        .grid
        .tiles()
        .into_iter()
        .filter(|tile| tile.visible)
        .collect();

    let outer = Block::default()
        .title(format!("Камеры [{}]", app.dashboard.grid.filter()))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if tiles.is_empty() {
        return;
    }

    // 最多两列
    let columns = if tiles.len() > 1 { 2 } else { 1 };
    let rows = tiles.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, chunk) in tiles.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[row]);
        for (tile, cell) in chunk.iter().zip(cells.iter()) {
            let body = Paragraph::new(format!("Камера {}", tile.camera_id))
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.text))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(palette.border()),
                );
            frame.render_widget(body, *cell);
        }
    }
}
