//! Terminal User Interface (TUI) module
//!
//! Interactive dashboard: the same controllers as the CLI, rendered live.
//! Controller operations run as background tasks; the loop redraws every
//! tick so busy animations, polls and banners show up as they change.

use std::io::{self, Stderr};
use std::sync::Arc;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod dialogs;
mod event_handler;
mod palette;
mod ui;

pub use dialogs::{DialogRequest, TuiDialogs};

use app::App;
use constants::TICK_RATE;
use ui::ui;

use crate::config::AppConfig;
use crate::errors::DashboardError;
use crate::interfaces::cli::connect_with;

/// Run the TUI application
pub async fn run_tui(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // 登录可能需要在普通终端里输入密码，先于 raw mode 完成
    let (dialogs, dialog_queue) = TuiDialogs::new();
    let dashboard = connect_with(config, Arc::new(dialogs)).await?;

    let startup = dashboard.clone();
    tokio::spawn(async move { startup.initialize().await });
    let polling = dashboard.start_polling();

    // Setup terminal
    enable_raw_mode().map_err(|e| DashboardError::terminal(format!("raw mode: {}", e)))?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)
        .map_err(|e| DashboardError::terminal(format!("alternate screen: {}", e)))?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(|e| DashboardError::terminal(e.to_string()))?;

    let mut app = App::new(dashboard, dialog_queue);
    let res = run_app(&mut terminal, &mut app);

    polling.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(()) => info!("TUI closed"),
        Err(err) => {
            error!("TUI error: {}", err);
            eprintln!("Error: {:?}", err);
        }
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_dialogs();
        app.clamp_cursors();
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            // 未回答的对话框按拒绝处理
            app.resolve_modal(false);
            return Ok(());
        }
    }
}
