use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::palette::Palette;

/// 第一可见行：默认贴底，`offset` 为向上滚动的行数
fn first_visible(total: usize, height: usize, offset: usize) -> usize {
    total.saturating_sub(height).saturating_sub(offset)
}

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.logs.view();
    let view = view.read();

    let level = if view.status_filter.is_empty() {
        "ALL"
    } else {
        view.status_filter.as_str()
    };
    let date = if view.date_filter.is_empty() {
        "latest"
    } else {
        view.date_filter.as_str()
    };

    let block = Block::default()
        .title(format!("Логи [{}] [{}]", level, date))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());
    let height = block.inner(area).height as usize;
    let top = first_visible(view.lines.len(), height, app.log_offset);

    let paragraph = Paragraph::new(view.content())
        .style(Style::default().fg(palette.text))
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0))
        .block(block);
    frame.render_widget(paragraph, area);
}
