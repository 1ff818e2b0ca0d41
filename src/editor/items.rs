// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Item editor

use super::{format_date, matches_search, App, UNSAVED_RECORD};
use crate::dialog::{ConfirmPrompt, Dialog};
use crate::forms::ItemFormValues;
use crate::store::EmptyKind;
use crate::surface::{Notice, Route};
use crate::types::{Item, ItemRequest, ItemUpdateRequest, Scope};
use reqwest::StatusCode;
use serde::Serialize;

/// One line of the item table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// Item id
    pub id: i64,
    /// Scope column
    pub scope: String,
    /// Project column
    pub project: String,
    /// Extension name, empty when unknown
    pub extension: String,
    /// Type name
    pub name: String,
    /// Table name
    pub table_name: String,
    /// Typecode
    pub typecode: i32,
    /// Formatted creation date
    pub created: String,
}

/// Item list view state
#[derive(Debug, Clone, Default)]
pub struct ItemEditor {
    search: String,
    selected: Option<i64>,
}

impl ItemEditor {
    /// Fresh view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch items together with the extensions and projects they reference
    pub async fn load(&self, app: &mut App) {
        let gateway = &app.gateway;
        let (items, shared, project, projects) = tokio::join!(
            gateway.items(),
            gateway.extensions(Some(Scope::Shared)),
            gateway.extensions(Some(Scope::Project)),
            gateway.projects(),
        );

        // failed fetches were reported by the gateway; the cache keeps its last value
        if let Ok(shared) = shared {
            app.store.set_shared_extensions(shared.unwrap_or_default());
        }
        if let Ok(project) = project {
            app.store.set_project_extensions(project.unwrap_or_default());
        }
        if let Ok(projects) = projects {
            app.store.set_projects(projects.unwrap_or_default());
        }
        if let Ok(items) = items {
            let empty = items.is_none();
            app.store.set_items(items);
            if empty {
                app.surface_empty(EmptyKind::Items, &Route::Items);
            }
        }
    }

    /// Filter rows by a search text
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows matching the search, in store order
    #[must_use]
    pub fn rows(&self, app: &App) -> Vec<ItemRow> {
        app.store
            .items()
            .unwrap_or_default()
            .iter()
            .map(|item| ItemRow {
                id: item.id,
                scope: item.scope.clone(),
                project: item.project.clone(),
                extension: app.store.extension_name(item.extension_id).unwrap_or_default().to_string(),
                name: item.name.clone(),
                table_name: item.table_name.clone(),
                typecode: item.typecode,
                created: format_date(&item.creation_date),
            })
            .filter(|row| {
                let typecode = row.typecode.to_string();
                matches_search(
                    &[
                        row.scope.as_str(),
                        row.project.as_str(),
                        row.extension.as_str(),
                        row.name.as_str(),
                        row.table_name.as_str(),
                        typecode.as_str(),
                    ],
                    &self.search,
                )
            })
            .collect()
    }

    /// Select a row, or deselect it when it is already selected
    pub fn select(&mut self, id: i64) -> Option<i64> {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
        self.selected
    }

    /// Currently selected item
    #[must_use]
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Add an item from a submitted form
    pub async fn create(&self, app: &mut App, dialog: Dialog<ItemFormValues>) -> Option<Item> {
        let values = app.accept("add item", dialog.outcome().await)?;

        let extension_id = match values.scope {
            Scope::Shared => app.store.shared_extension_id(&values.extension),
            Scope::Project => values
                .project
                .as_deref()
                .and_then(|project| app.store.project_extension_id(project, &values.extension)),
        };
        let Some(extension_id) = extension_id.filter(|id| *id > 0) else {
            tracing::error!("extension {} not found in scope {}", values.extension, values.scope);
            app.notify(Notice::failure(format!("Extension {} not found!", values.extension)));
            return None;
        };

        let request = ItemRequest {
            name: values.name,
            table_name: values.table_name,
            extension_id,
        };
        match app.gateway.create_item(&request).await {
            Ok(mut item) => {
                if item.scope.is_empty() {
                    item.scope = values.scope.to_string();
                }
                if item.project.is_empty() {
                    item.project = values.project.unwrap_or_default();
                }
                app.notify(Notice::success("added", "Item", Some(item.id)));
                app.store.insert_item(item.clone());
                Some(item)
            }
            Err(e) => {
                app.notify(Notice::failure(format!(
                    "An error occurred while creating the item. Please try again. {e}"
                )));
                None
            }
        }
    }

    /// Rename an item or move it to another table
    pub async fn update(&self, app: &mut App, item: &Item, dialog: Dialog<ItemUpdateRequest>) -> bool {
        if item.id == 0 {
            app.notify(Notice::failure(UNSAVED_RECORD));
            return false;
        }
        let Some(request) = app.accept("update item", dialog.outcome().await) else {
            return false;
        };

        match app.gateway.update_item(item.id, &request).await {
            Ok(StatusCode::NO_CONTENT) => {
                let extension = app.store.extension_name(item.extension_id).unwrap_or_default();
                app.notify(Notice::success_text(format!(
                    "Item with ID {} ({}, {}, {}) updated!",
                    item.id, item.project, extension, item.typecode
                )));
                app.store.update_item(item.id, &request.name, &request.table_name);
                true
            }
            Ok(status) => {
                app.notify(Notice::failure(format!(
                    "Could not update item: {}! Received status code: {}",
                    item.id,
                    status.as_u16()
                )));
                false
            }
            Err(e) => {
                app.notify(Notice::failure(format!("Could not update item: {}! Error: {e}", item.id)));
                false
            }
        }
    }

    /// Delete an item after confirmation
    pub async fn delete(&self, app: &mut App, item: &Item) -> bool {
        let prompt = ConfirmPrompt::remove(
            "Do you really want to delete this Item?",
            format!(
                "This will delete Item {} in Table {} with Typecode {}.",
                item.name, item.table_name, item.typecode
            ),
        );
        if !app.confirm(&prompt) {
            return false;
        }

        let result = app.gateway.delete_item(item.id).await;
        let deleted = app.deleted("item", item.id, result);
        if deleted {
            app.store.remove_item(item.id);
        }
        deleted
    }
}

// =============================================================================
// Code snippets
// =============================================================================

/// `<itemtype>` declaration for an item
#[must_use]
pub fn item_snippet(item: &Item) -> String {
    [
        format!(r#"<itemtype code="{}">"#, item.name),
        format!(r#"    <deployment table="{}" typecode="{}"/>"#, item.table_name, item.typecode),
        "    <attributes>".to_string(),
        "        <!-- attributes -->".to_string(),
        "    </attributes>".to_string(),
        "</itemtype>".to_string(),
    ]
    .join("\n")
}

/// `<relation>` declaration for an item
#[must_use]
pub fn relation_snippet(item: &Item) -> String {
    [
        format!(r#"<relation code="{}" localized="false">"#, item.name),
        format!(r#"    <deployment table="{}" typecode="{}"/>"#, item.table_name, item.typecode),
        r#"    <sourceElement type="" cardinality="" ordered="" qualifier=""/>"#.to_string(),
        r#"    <targetElement type="" cardinality="" navigable=""/>"#.to_string(),
        "</relation>".to_string(),
    ]
    .join("\n")
}
