use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{InputField, StatusIndicator};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::palette::Palette;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.biometric.view();
    let view = view.read();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Min(3),    // photos
            Constraint::Length(3), // upload status
            Constraint::Length(3), // training
        ])
        .split(area);

    InputField::new("Имя пользователя", &view.user_name)
        .hotkey('n')
        .text_color(palette.text)
        .render(frame, chunks[0]);

    let photos: Vec<Line> = view
        .photos
        .iter()
        .map(|path| Line::from(path.display().to_string()))
        .collect();
    let photos = Paragraph::new(photos)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(format!("[p] Фотографии ({})", view.photos.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        );
    frame.render_widget(photos, chunks[1]);

    let boxed = |title: &'static str| {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border())
    };
    frame.render_widget(
        Paragraph::new(StatusIndicator::line(&view.upload_status, palette.text))
            .block(boxed("[u] Загрузка")),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(StatusIndicator::line(&view.train_status, palette.text))
            .block(boxed("[t] Обучение")),
        chunks[3],
    );
}
