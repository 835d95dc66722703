use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::Colorize;

use crate::dashboard::Dialogs;

/// Confirmations read `y`/`N` from stdin, alerts are printed
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDialogs;

#[async_trait]
impl Dialogs for ConsoleDialogs {
    async fn confirm(&self, message: &str) -> bool {
        let prompt = format!("{} {} ", message.yellow(), "[y/N]".dimmed());
        tokio::task::spawn_blocking(move || {
            print!("{}", prompt);
            if io::stdout().flush().is_err() {
                return false;
            }
            let mut input = String::new();
            match io::stdin().lock().read_line(&mut input) {
                Ok(_) => matches!(input.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }

    async fn alert(&self, message: &str) {
        let marker = if message.starts_with("Ошибка") {
            "✗".bold().red()
        } else {
            "ℹ".bold().blue()
        };
        println!("{} {}", marker, message);
    }
}
