//! 弹窗：对话框、文本输入、帮助

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::TextInput;
use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::dialogs::DialogRequest;
use crate::interfaces::tui::palette::Palette;

pub fn draw_dialog(frame: &mut Frame, request: &DialogRequest, palette: &Palette) {
    let (title, color, hint) = match request {
        DialogRequest::Confirm { .. } => (" Подтверждение ", colors::WARNING, "[y] Да    [n] Нет"),
        DialogRequest::Alert { message, .. } if message.starts_with("Ошибка") => {
            (" Ошибка ", colors::ERROR, "[Enter] OK")
        }
        DialogRequest::Alert { .. } => (" Сообщение ", palette.accent, "[Enter] OK"),
    };

    let size = match request {
        DialogRequest::Confirm { .. } => popup::CONFIRM,
        DialogRequest::Alert { .. } => popup::ALERT,
    };
    let inner = Popup::new(title, size)
        .theme_color(color)
        .background(palette.background)
        .render(frame, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(request.message().to_string())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(color).bold())))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn draw_input(frame: &mut Frame, input: &TextInput, palette: &Palette) {
    let title = input.target.title();
    let inner = Popup::new(" Ввод ", popup::INPUT)
        .theme_color(palette.accent)
        .background(palette.background)
        .render(frame, frame.area());

    let area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner)[0];

    let value = input.display_value();
    InputField::new(&title, &value)
        .active(true)
        .render(frame, area);
}

const HELP_LINES: [(&str, &str); 10] = [
    ("1-6 / Tab", "Страницы"),
    ("F2", "День / Ночь"),
    ("s / x", "Запустить / Остановить систему"),
    ("Space, +/-, a", "Настройки камер"),
    ("d", "Удалить маску / дата"),
    ("f", "Фильтр уровня логов"),
    ("n, p, u, t", "Биометрия"),
    ("h, u, p, w, S", "Подключение к архиву"),
    ("Enter, Space, a, g", "Поиск и скачивание"),
    ("q", "Выход"),
];

pub fn draw_help(frame: &mut Frame, palette: &Palette) {
    let inner = Popup::new(" Справка ", popup::HELP)
        .theme_color(palette.accent)
        .background(palette.background)
        .render(frame, frame.area());

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<20}", key), Style::default().fg(palette.accent).bold()),
                Span::styled(*desc, Style::default().fg(palette.text)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
