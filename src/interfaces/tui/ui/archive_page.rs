//! 归档页：连接设置、按日期搜索、批量下载

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

use super::widgets::{InputField, StatusIndicator, button_span};
use crate::dashboard::archive::ArchiveView;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::palette::Palette;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = app.dashboard.archive.view();
    let view = view.read();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // connection form
            Constraint::Length(1), // connection banner
            Constraint::Length(3), // date / time / search
            Constraint::Length(1), // search status
            Constraint::Min(3),    // results
            Constraint::Length(3), // actions / progress
        ])
        .split(area);

    draw_connection(frame, &view, palette, chunks[0]);
    frame.render_widget(
        Paragraph::new(StatusIndicator::line(&view.connection_status, palette.text)),
        chunks[1],
    );
    draw_search(frame, &view, palette, chunks[2]);
    frame.render_widget(
        Paragraph::new(StatusIndicator::line(&view.search_status, palette.text)),
        chunks[3],
    );
    draw_results(frame, app, &view, palette, chunks[4]);
    draw_actions(frame, &view, palette, chunks[5]);
}

fn draw_connection(frame: &mut Frame, view: &ArchiveView, palette: &Palette, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(area);
    let form = &view.form;
    let masked = "*".repeat(form.password.chars().count());

    InputField::new("Сервер", &form.remote_host)
        .hotkey('h')
        .text_color(palette.text)
        .render(frame, cells[0]);
    InputField::new("Пользователь", &form.remote_user)
        .hotkey('u')
        .text_color(palette.text)
        .render(frame, cells[1]);
    InputField::new("Путь", &form.remote_path)
        .hotkey('p')
        .text_color(palette.text)
        .render(frame, cells[2]);
    InputField::new("Пароль", &masked)
        .hotkey('w')
        .placeholder(&form.password_placeholder)
        .text_color(palette.text)
        .render(frame, cells[3]);
}

fn draw_search(frame: &mut Frame, view: &ArchiveView, palette: &Palette, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(10),
        ])
        .split(area);

    InputField::new("Дата", &view.date)
        .hotkey('d')
        .text_color(palette.text)
        .render(frame, cells[0]);
    InputField::new("С", &view.time_from)
        .hotkey('f')
        .placeholder("00:00")
        .text_color(palette.text)
        .render(frame, cells[1]);
    InputField::new("По", &view.time_to)
        .hotkey('t')
        .placeholder("23:59")
        .text_color(palette.text)
        .render(frame, cells[2]);

    let button = Paragraph::new(Line::from(button_span(
        "Enter",
        &view.search_button,
        palette.accent,
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(button, cells[3]);
}

fn draw_results(frame: &mut Frame, app: &App, view: &ArchiveView, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title("Файлы")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());

    if let Some(placeholder) = view.results.placeholder() {
        let text = Paragraph::new(placeholder.to_string())
            .style(Style::default().fg(colors::MUTED))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|row| {
            let mark = if row.checked { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(palette.accent)),
                Span::styled(row.file.filename.clone(), Style::default().fg(palette.text)),
                Span::styled(format!("  {}", row.file.time), Style::default().fg(colors::MUTED)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !view.rows().is_empty() {
        state.select(Some(app.archive_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_actions(frame: &mut Frame, view: &ArchiveView, palette: &Palette, area: Rect) {
    if view.progress.visible {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(palette.border()),
            )
            .gauge_style(Style::default().fg(colors::SUCCESS))
            .percent(u16::from(view.progress.percent.min(100)))
            .label(view.progress.text.clone());
        frame.render_widget(gauge, area);
        return;
    }

    if !view.actions_visible {
        return;
    }

    let mut spans = vec![
        Span::styled("[a] ", Style::default().fg(palette.accent).bold()),
        Span::styled(view.select_all_label.clone(), Style::default().fg(palette.text)),
        Span::raw("    "),
    ];
    spans.extend(button_span("g", &view.download_button, colors::SUCCESS));
    if let Some(path) = &view.last_download {
        spans.push(Span::styled(
            format!("    ✓ {}", path.display()),
            Style::default().fg(colors::SUCCESS),
        ));
    }

    let actions = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(actions, area);
}
