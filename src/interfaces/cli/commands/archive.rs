//! Archive commands

use colored::Colorize;

use super::{print_panel, prompt_password};
use crate::cli::{ArchiveCommands, ArchiveSettingsCommands};
use crate::dashboard::Dashboard;
use crate::dashboard::archive::{ArchiveController, ArchiveView};
use crate::interfaces::cli::{CliError, finish};

fn print_connection(view: &ArchiveView) {
    let form = &view.form;
    println!("{}", "Archive connection".bold().green());
    println!("  {}:     {}", "Host".cyan(), form.remote_host);
    println!("  {}:     {}", "User".cyan(), form.remote_user);
    println!("  {}:     {}", "Path".cyan(), form.remote_path);
    println!("  {}: {}", "Password".cyan(), form.password_placeholder.dimmed());
}

fn print_results(view: &ArchiveView) {
    print_panel(&view.search_status);
    if let Some(placeholder) = view.results.placeholder() {
        println!("  {}", placeholder.dimmed());
    }
    for (index, row) in view.rows().iter().enumerate() {
        let mark = if row.checked { "[x]" } else { "[ ]" };
        println!(
            "  {:>3}. {} {}  {}",
            index + 1,
            mark,
            row.file.filename,
            row.file.time.dimmed()
        );
    }
}

async fn search(
    archive: &ArchiveController,
    date: &str,
    from: Option<String>,
    to: Option<String>,
) -> Result<(), CliError> {
    archive.set_date(date);
    archive.set_time_range(
        from.as_deref().unwrap_or_default(),
        to.as_deref().unwrap_or_default(),
    );
    let outcome = archive.search().await;
    print_results(&archive.view().read());
    finish(outcome, "Search")
}

pub async fn run_archive_command(
    dashboard: &Dashboard,
    action: ArchiveCommands,
) -> Result<(), CliError> {
    let archive = &dashboard.archive;
    match action {
        ArchiveCommands::Settings {
            action: ArchiveSettingsCommands::Show,
        } => {
            finish(archive.load_settings().await, "Settings request")?;
            print_connection(&archive.view().read());
            Ok(())
        }
        ArchiveCommands::Settings {
            action:
                ArchiveSettingsCommands::Set {
                    host,
                    user,
                    path,
                    password,
                },
        } => {
            // 先加载已有设置，未指定的字段保持不变
            archive.load_settings().await;
            archive.set_remote_host(&host);
            if let Some(user) = user {
                archive.set_remote_user(&user);
            }
            if let Some(path) = path {
                archive.set_remote_path(&path);
            }
            if password {
                let user = archive.view().read().form.remote_user.clone();
                archive.set_password(&prompt_password(&format!("{}@{}", user, host))?);
            }
            let outcome = archive.save_settings().await;
            print_panel(&archive.view().read().connection_status);
            finish(outcome, "Save")
        }
        ArchiveCommands::Search { date, from, to } => search(archive, &date, from, to).await,
        ArchiveCommands::Download {
            date,
            from,
            to,
            all,
            select,
        } => {
            search(archive, &date, from, to).await?;
            let found = archive.view().read().rows().len();
            if found == 0 {
                return Ok(());
            }

            if all {
                archive.toggle_select_all();
            } else {
                let mut select = select;
                select.sort_unstable();
                select.dedup();
                for position in select {
                    if position == 0 || archive.toggle_file(position - 1).is_none() {
                        return Err(CliError::ParseError(format!(
                            "No file #{} (found {})",
                            position, found
                        )));
                    }
                }
            }

            let outcome = archive.download().await;
            let view = archive.view();
            let view = view.read();
            println!("  [{:>3}%] {}", view.progress.percent, view.progress.text);
            if let Some(path) = &view.last_download {
                println!("{} {}", "✓".bold().green(), path.display());
            }
            finish(outcome, "Download")
        }
    }
}
