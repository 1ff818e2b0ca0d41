// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Extension editor

use super::{format_date, matches_search, App, UNSAVED_RECORD};
use crate::dialog::{ConfirmPrompt, Dialog};
use crate::forms::ExtensionFormValues;
use crate::store::EmptyKind;
use crate::surface::{Notice, Route};
use crate::types::{Extension, ExtensionRequest, ExtensionUpdateRequest, Scope};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// Descriptions longer than this are cut unless expanded
pub const MAX_DESCRIPTION_LENGTH: usize = 75;

/// One line of the extension table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRow {
    /// Extension id
    pub id: i64,
    /// Name
    pub name: String,
    /// Description, truncated unless expanded
    pub description: String,
    /// Owning project name, empty for shared extensions
    pub project: String,
    /// Scope
    pub scope: Scope,
    /// Number of items, when reported
    pub item_count: Option<i64>,
    /// Formatted creation date
    pub created: String,
}

/// Extension list view state
#[derive(Debug, Clone, Default)]
pub struct ExtensionEditor {
    search: String,
    expanded: HashSet<i64>,
}

impl ExtensionEditor {
    /// Fresh view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch all extensions and the projects owning them
    pub async fn load(&self, app: &mut App) {
        let (extensions, projects) = tokio::join!(app.gateway.extensions(None), app.gateway.projects());

        if let Ok(projects) = projects {
            app.store.set_projects(projects.unwrap_or_default());
        }
        if let Ok(extensions) = extensions {
            let empty = extensions.is_none();
            app.store.set_all_extensions(extensions);
            if empty {
                app.surface_empty(EmptyKind::Extensions, &Route::Extensions);
            }
        }
    }

    /// Filter rows by a search text
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Expand a collapsed description or collapse an expanded one
    pub fn toggle(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Whether the description of `id` is shown in full
    #[must_use]
    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    /// Rows matching the search, in store order
    #[must_use]
    pub fn rows(&self, app: &App) -> Vec<ExtensionRow> {
        app.store
            .all_extensions()
            .unwrap_or_default()
            .iter()
            .filter(|ext| {
                let project = ext.project_id.and_then(|id| app.store.project_name(id)).unwrap_or_default();
                matches_search(
                    &[ext.name.as_str(), ext.description.as_str(), project, ext.scope.as_str()],
                    &self.search,
                )
            })
            .map(|ext| ExtensionRow {
                id: ext.id,
                name: ext.name.clone(),
                description: truncate_description(&ext.description, self.is_expanded(ext.id)).into_owned(),
                project: ext
                    .project_id
                    .and_then(|id| app.store.project_name(id))
                    .unwrap_or_default()
                    .to_string(),
                scope: ext.scope,
                item_count: ext.item_count,
                created: format_date(&ext.creation_date),
            })
            .collect()
    }

    /// Add an extension from a submitted form
    pub async fn create(&self, app: &mut App, dialog: Dialog<ExtensionFormValues>) -> Option<Extension> {
        let values = app.accept("add extension", dialog.outcome().await)?;

        let project_id = match (values.scope, values.project.as_deref()) {
            (Scope::Shared, _) => None,
            (Scope::Project, project) => {
                let Some(id) = project.and_then(|name| app.store.project_id(name)) else {
                    tracing::error!("project {:?} not found", project);
                    app.notify(Notice::failure(format!(
                        "Project {} not found!",
                        project.unwrap_or_default()
                    )));
                    return None;
                };
                Some(id)
            }
        };

        let request = ExtensionRequest {
            project_id,
            name: values.name,
            scope: values.scope,
            description: values.description,
        };
        match app.gateway.create_extension(&request).await {
            Ok(extension) => {
                app.notify(Notice::success("created", "Extension", Some(extension.id)));
                app.store.insert_extension(extension.clone());
                Some(extension)
            }
            Err(e) => {
                app.notify(Notice::failure(format!(
                    "An error occurred while creating the extension. Please try again. {e}"
                )));
                None
            }
        }
    }

    /// Rename an extension or change its description
    pub async fn update(&self, app: &mut App, extension: &Extension, dialog: Dialog<ExtensionUpdateRequest>) -> bool {
        if extension.id == 0 {
            app.notify(Notice::failure(UNSAVED_RECORD));
            return false;
        }
        let Some(request) = app.accept("update extension", dialog.outcome().await) else {
            return false;
        };

        match app.gateway.update_extension(extension.id, &request).await {
            Ok(_) => {
                app.notify(Notice::success("updated", "Extension", Some(extension.id)));
                app.store
                    .update_extension(extension.id, request.name.as_deref(), request.description.as_deref());
                true
            }
            Err(e) => {
                app.notify(Notice::failure(format!("Error updating extension: {e}")));
                false
            }
        }
    }

    /// Delete an extension after confirmation
    pub async fn delete(&self, app: &mut App, extension: &Extension) -> bool {
        let prompt = ConfirmPrompt::remove(
            "Do you really want to delete this extension?",
            format!("This will delete the extension {}.", extension.name),
        );
        if !app.confirm(&prompt) {
            return false;
        }

        let result = app.gateway.delete_extension(extension.id).await;
        let deleted = app.deleted("extension", extension.id, result);
        if deleted {
            app.store.remove_extension(extension.id);
        }
        deleted
    }
}

/// Cut `text` to [`MAX_DESCRIPTION_LENGTH`] characters plus `...` unless expanded
#[must_use]
pub fn truncate_description(text: &str, expanded: bool) -> Cow<'_, str> {
    if expanded || text.chars().count() <= MAX_DESCRIPTION_LENGTH {
        return Cow::Borrowed(text);
    }
    let cut: String = text.chars().take(MAX_DESCRIPTION_LENGTH).collect();
    Cow::Owned(format!("{cut}..."))
}
