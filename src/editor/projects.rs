// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Project editor

use super::{format_date, matches_search, App, UNSAVED_RECORD};
use crate::dialog::{ConfirmPrompt, Dialog};
use crate::forms::ProjectFormValues;
use crate::surface::Notice;
use crate::types::{Project, ProjectRequest, ProjectUpdateRequest};
use serde::Serialize;

/// One line of the project table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    /// Project id
    pub id: i64,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Formatted creation date
    pub created: String,
}

/// Project list view state
#[derive(Debug, Clone, Default)]
pub struct ProjectEditor {
    search: String,
}

impl ProjectEditor {
    /// Fresh view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch all projects
    pub async fn load(&self, app: &mut App) {
        if let Ok(projects) = app.gateway.projects().await {
            app.store.set_projects(projects.unwrap_or_default());
        }
    }

    /// Filter rows by a search text
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows matching the search, in store order
    #[must_use]
    pub fn rows(&self, app: &App) -> Vec<ProjectRow> {
        app.store
            .projects()
            .iter()
            .filter(|p| matches_search(&[p.name.as_str(), p.description.as_str()], &self.search))
            .map(|p| ProjectRow {
                id: p.id,
                name: p.name.clone(),
                description: p.description.clone(),
                created: format_date(&p.creation_date),
            })
            .collect()
    }

    /// Add a project from a submitted form
    pub async fn create(&self, app: &mut App, dialog: Dialog<ProjectFormValues>) -> Option<Project> {
        let values = app.accept("create project", dialog.outcome().await)?;
        let request = ProjectRequest {
            name: values.name,
            description: values.description,
        };

        match app.gateway.create_project(&request).await {
            Ok(project) => {
                app.notify(Notice::success("added", "Project", Some(project.id)));
                app.store.insert_project(project.clone());
                Some(project)
            }
            Err(e) => {
                app.notify(Notice::failure(format!(
                    "An error occurred while creating the project. Please try again. {e}"
                )));
                None
            }
        }
    }

    /// Rename a project or change its description
    pub async fn update(&self, app: &mut App, project: &Project, dialog: Dialog<ProjectUpdateRequest>) -> bool {
        if project.id == 0 {
            app.notify(Notice::failure(UNSAVED_RECORD));
            return false;
        }
        let Some(request) = app.accept("update project", dialog.outcome().await) else {
            return false;
        };

        match app.gateway.update_project(project.id, &request).await {
            Ok(_) => {
                app.notify(Notice::success("updated", "Project", Some(project.id)));
                app.store
                    .update_project(project.id, request.name.as_deref(), request.description.as_deref());
                true
            }
            Err(e) => {
                app.notify(Notice::failure(format!("Error updating project: {e}")));
                false
            }
        }
    }

    /// Delete a project after confirmation
    pub async fn delete(&self, app: &mut App, project: &Project) -> bool {
        let prompt = ConfirmPrompt::remove(
            "Do you really want to delete this project?",
            format!("This will delete the project {}.", project.name),
        );
        if !app.confirm(&prompt) {
            return false;
        }

        let result = app.gateway.delete_project(project.id).await;
        let deleted = app.deleted("project", project.id, result);
        if deleted {
            app.store.remove_project(project.id);
        }
        deleted
    }
}
