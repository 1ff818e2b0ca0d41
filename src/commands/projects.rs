// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Project commands

use super::{require_id, Output};
use crate::dialog::{Dialog, DialogOutcome};
use crate::editor::{format_date, App, ProjectEditor};
use crate::forms::{ProjectForm, ProjectUpdateForm};
use crate::types::Project;
use anyhow::Result;

/// Arguments of `projects`
#[derive(Debug, Clone, clap::Args)]
pub struct ProjectArgs {
    /// Action: list, show, add, update, delete
    #[arg(default_value = "list")]
    pub action: String,

    /// Project id (show, update, delete)
    pub id: Option<i64>,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Only list projects matching this text
    #[arg(long)]
    pub search: Option<String>,
}

/// Run project command
pub async fn run(app: &mut App, output: Output, args: ProjectArgs) -> Result<()> {
    let mut editor = ProjectEditor::new();
    editor.load(app).await;

    match args.action.as_str() {
        "list" | "ls" => {
            if let Some(query) = &args.search {
                editor.set_search(query.as_str());
            }
            list(app, &editor, output)?;
        }

        "show" => {
            let project = find(app, require_id(args.id, "show")?)?;
            if output.json {
                return output.print_json(&project);
            }
            println!("Project: {}", project.name);
            println!("  id: {}", project.id);
            if !project.description.is_empty() {
                println!("  description: {}", project.description);
            }
            println!("  created: {}", format_date(&project.creation_date));
        }

        "add" | "create" => {
            let mut form = ProjectForm::new();
            form.set_name(args.name.unwrap_or_default());
            form.set_description(args.description.unwrap_or_default());
            let values = form
                .submit()
                .map_err(|errors| anyhow::anyhow!("Invalid project: {}", errors))?;

            if let Some(project) = editor.create(app, Dialog::ready(DialogOutcome::Submitted(values))).await {
                if output.json {
                    return output.print_json(&project);
                }
                println!("Created project: {} ({})", project.name, project.id);
            }
        }

        "update" => {
            let project = find(app, require_id(args.id, "update")?)?;
            let outcome = match ProjectUpdateForm::new(&project) {
                Ok(mut form) => {
                    if let Some(name) = args.name {
                        form.set_name(name);
                    }
                    if let Some(description) = args.description {
                        form.set_description(description);
                    }
                    if form.is_unchanged() {
                        println!("Nothing to update for project {}", project.id);
                        return Ok(());
                    }
                    form.submit().map_or_else(|e| DialogOutcome::Failed(e.to_string()), DialogOutcome::Submitted)
                }
                Err(e) => DialogOutcome::Failed(e.to_string()),
            };
            editor.update(app, &project, Dialog::ready(outcome)).await;
        }

        "delete" | "rm" => {
            let project = find(app, require_id(args.id, "delete")?)?;
            if editor.delete(app, &project).await {
                println!("Deleted project: {} ({})", project.name, project.id);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: list, show, add, update, delete", other);
        }
    }

    Ok(())
}

/// Print the project table
pub(crate) fn list(app: &App, editor: &ProjectEditor, output: Output) -> Result<()> {
    let rows = editor.rows(app);
    if output.json {
        return output.print_json(&rows);
    }
    if rows.is_empty() {
        println!("No projects defined. Use 'typecode-registry projects add --name <name>' to create one.");
        return Ok(());
    }

    println!("Projects ({}):", rows.len());
    for row in &rows {
        println!("  [{}] {} (created {})", row.id, row.name, row.created);
        if !row.description.is_empty() {
            println!("    {}", row.description);
        }
    }
    Ok(())
}

fn find(app: &App, id: i64) -> Result<Project> {
    app.store
        .project(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))
}
