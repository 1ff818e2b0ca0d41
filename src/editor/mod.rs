// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Per-entity editors
//!
//! Editors load their lists into the [`EntityStore`], render rows for the
//! list views, and run the create/update/delete flows against the gateway.
//! All of them work on one [`App`].

pub mod extensions;
pub mod items;
pub mod projects;

pub use extensions::{ExtensionEditor, ExtensionRow};
pub use items::{ItemEditor, ItemRow};
pub use projects::{ProjectEditor, ProjectRow};

use crate::dialog::{ConfirmPrompt, DialogOutcome, Prompter};
use crate::gateway::{Gateway, GatewayError};
use crate::store::{EmptyKind, EntityStore};
use crate::surface::{ErrorPage, Notice, Route, Surface};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;

/// Shown instead of an edit dialog for a record that was never saved
pub const UNSAVED_RECORD: &str = "Error: Unexpected internal error! Please restart application!";

/// Shown when a list comes back `null` again after the empty page was seen
pub const POPULATE_DATABASE: &str = "Please populate the database.";

/// Everything an editor needs
pub struct App {
    /// Backend access
    pub gateway: Gateway,
    /// Cached entities
    pub store: EntityStore,
    surface: Arc<dyn Surface>,
    prompter: Arc<dyn Prompter>,
}

impl App {
    /// Assemble an application with an empty store
    pub fn new(gateway: Gateway, surface: Arc<dyn Surface>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            gateway,
            store: EntityStore::new(),
            surface,
            prompter,
        }
    }

    /// Show a notice
    pub fn notify(&self, notice: Notice) {
        self.surface.notify(notice);
    }

    /// Ask the user to confirm
    pub fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.prompter.confirm(prompt)
    }

    /// A list fetch answered `null`: show the empty page once, then a notice
    pub(crate) fn surface_empty(&mut self, kind: EmptyKind, origin: &Route) {
        tracing::warn!("NULL response: {}", origin);
        if self.store.empty_notice_shown(kind) {
            self.notify(Notice::info(POPULATE_DATABASE));
        } else {
            self.surface.navigate(Route::Error {
                page: ErrorPage::NoContent,
                origin: Some(origin.to_string()),
            });
            self.store.mark_empty_notice(kind);
        }
    }

    /// Shared handling of a dialog outcome: `Some(values)` only when submitted
    pub(crate) fn accept<T>(&self, what: &str, outcome: DialogOutcome<T>) -> Option<T> {
        match outcome {
            DialogOutcome::Submitted(values) => Some(values),
            DialogOutcome::Cancelled => {
                tracing::debug!("{} dialog cancelled", what);
                None
            }
            DialogOutcome::Failed(message) => {
                self.notify(Notice::failure(message));
                None
            }
        }
    }

    /// Report a delete; true only when the backend answered 204
    pub(crate) fn deleted(&self, kind: &str, id: i64, result: Result<StatusCode, GatewayError>) -> bool {
        match result {
            Ok(StatusCode::NO_CONTENT) => {
                tracing::debug!("received 204 for {} {}", kind, id);
                self.notify(Notice::success("deleted", &capitalize(kind), Some(id)));
                true
            }
            Ok(status) => {
                self.notify(Notice::failure(format!(
                    "Could not delete {kind}: {id}! Received status code: {}",
                    status.as_u16()
                )));
                false
            }
            Err(e) => {
                self.notify(Notice::failure(format!("Could not delete {kind}: {id}! Error: {e}")));
                false
            }
        }
    }
}

// =============================================================================
// View helpers
// =============================================================================

/// Creation dates as `dd.mm.yyyy - HH:MM Uhr`
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y - %H:%M Uhr").to_string()
}

/// Case-insensitive substring match over a row's displayed columns
#[must_use]
pub fn matches_search(columns: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || columns.iter().any(|c| c.to_lowercase().contains(&query))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
