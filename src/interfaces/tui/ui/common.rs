use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::dashboard::Page;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::palette::{Palette, parse_hex};

/// Draw title bar with page tabs, run state and theme
pub fn draw_title_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let active = app.page();
    let mut spans = vec![
        Span::styled("OCTO", palette.title()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    for page in Page::all() {
        let label = format!(" {}:{} ", page.index() + 1, page.title());
        let style = if page == active {
            Style::default().fg(palette.background).bg(palette.accent).bold()
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(label, style));
    }

    let system = app.dashboard.system.view();
    let system = system.read();
    spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        system.status_text.clone(),
        Style::default()
            .fg(parse_hex(&system.status_color, palette.text))
            .bold(),
    ));
    spans.push(Span::styled(
        format!(" | [F2] {}", app.dashboard.theme.label()),
        Style::default().fg(Color::DarkGray),
    ));

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let session = app.dashboard.session.view();
    let session = session.read();
    let sync_error = app.dashboard.settings.view().read().last_sync_error.clone();

    let error = session.error.as_ref().or(sync_error.as_ref());
    let (status_text, status_style) = if let Some(error) = error {
        (
            format!("[ERROR] {}", error),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (app.status_message.clone(), palette.title())
    } else {
        let who = match (session.logged_in, &session.role) {
            (true, Some(role)) => format!("Ready ({})", role),
            (true, None) => "Ready".to_string(),
            (false, _) => "Ready (anonymous)".to_string(),
        };
        (who, Style::default().fg(palette.accent))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn page_shortcuts(page: Page) -> Vec<(&'static str, &'static str, Color)> {
    match page {
        Page::Dashboard => vec![
            ("s", "Start", Color::Green),
            ("x", "Stop", Color::Red),
            ("c", "Cameras", Color::Cyan),
            ("r", "Refresh", Color::Cyan),
        ],
        Page::Settings => vec![
            ("Arrows", "Navigate", Color::Cyan),
            ("Space", "Toggle/Edit", Color::Green),
            ("+/-", "Sensitivity", Color::Yellow),
            ("a", "Apply", Color::Green),
        ],
        Page::Masks => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("d", "Delete", Color::Red),
            ("r", "Refresh", Color::Cyan),
        ],
        Page::Logs => vec![
            ("Up/Down", "Scroll", Color::Cyan),
            ("f", "Level", Color::Yellow),
            ("d", "Date", Color::Yellow),
            ("r", "Refresh", Color::Cyan),
        ],
        Page::Biometric => vec![
            ("n", "Name", Color::Yellow),
            ("p", "Photos", Color::Yellow),
            ("u", "Upload", Color::Green),
            ("t", "Train", Color::Magenta),
        ],
        Page::Archive => vec![
            ("h/u/p/w", "Connection", Color::Yellow),
            ("S", "Save", Color::Green),
            ("d/f/t", "Date/Time", Color::Yellow),
            ("Enter", "Search", Color::Cyan),
            ("Space/a", "Select", Color::Cyan),
            ("g", "Download", Color::Green),
        ],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let shortcuts = if app.modal.is_some() {
        vec![("y", "Yes", Color::Green), ("n/Esc", "No / Close", Color::Red)]
    } else if app.input.is_some() {
        vec![("Enter", "Confirm", Color::Green), ("Esc", "Cancel", Color::Red)]
    } else {
        let mut shortcuts = page_shortcuts(app.page());
        shortcuts.extend([
            ("1-6/Tab", "Pages", Color::Blue),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ]);
        shortcuts
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
