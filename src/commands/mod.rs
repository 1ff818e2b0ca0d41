// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod extensions;
pub mod items;
pub mod open;
pub mod projects;

use crate::config::Config;
use crate::dialog::{ConfirmPrompt, FixedAnswer, Prompter};
use crate::editor::App;
use crate::gateway::{Gateway, HttpBackend};
use crate::surface::{ConsoleSurface, Surface};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print JSON instead of text
    pub json: bool,
    /// Colour notices and headings
    pub color: bool,
}

impl Output {
    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
        Ok(())
    }
}

/// Build the application for one invocation
pub fn connect(config: &Config, output: Output, assume_yes: bool) -> Result<App> {
    let backend = HttpBackend::new(config)
        .with_context(|| format!("Failed to set up client for {}", config.backend_url))?;
    let surface: Arc<dyn Surface> = Arc::new(ConsoleSurface::new(output.color));
    let prompter: Arc<dyn Prompter> = if assume_yes {
        Arc::new(FixedAnswer::yes())
    } else {
        Arc::new(StdinPrompter)
    };

    tracing::debug!("using registry backend at {}", config.backend_url);
    let gateway = Gateway::new(Arc::new(backend), Arc::clone(&surface));
    Ok(App::new(gateway, surface, prompter))
}

/// Asks on stderr and reads the answer from stdin
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        eprintln!("{}", prompt.label);
        eprintln!("  {}", prompt.content);
        eprint!("[{}/{}] ", prompt.yes, prompt.no);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer, prompt.yes),
            Err(e) => {
                tracing::warn!("could not read answer: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str, yes: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case(yes)
}

/// Id argument required by an action
pub(crate) fn require_id(id: Option<i64>, action: &str) -> Result<i64> {
    id.ok_or_else(|| anyhow::anyhow!("An id is required for '{}'", action))
}
