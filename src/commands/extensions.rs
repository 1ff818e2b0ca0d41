// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Extension commands - shared and project-owned item groups

use super::{require_id, Output};
use crate::dialog::{Dialog, DialogOutcome};
use crate::editor::{format_date, App, ExtensionEditor};
use crate::forms::{ExtensionForm, ExtensionUpdateForm};
use crate::types::{Extension, Scope};
use anyhow::Result;

/// Arguments of `extensions`
#[derive(Debug, Clone, clap::Args)]
pub struct ExtensionArgs {
    /// Action: list, show, add, update, delete
    #[arg(default_value = "list")]
    pub action: String,

    /// Extension id (show, update, delete)
    pub id: Option<i64>,

    /// Extension name
    #[arg(long)]
    pub name: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Scope (shared, project)
    #[arg(long, default_value = "project")]
    pub scope: String,

    /// Owning project name
    #[arg(long)]
    pub project: Option<String>,

    /// Only list extensions matching this text
    #[arg(long)]
    pub search: Option<String>,

    /// Show full descriptions
    #[arg(long)]
    pub full: bool,
}

/// Run extension command
pub async fn run(app: &mut App, output: Output, args: ExtensionArgs) -> Result<()> {
    let mut editor = ExtensionEditor::new();
    editor.load(app).await;

    match args.action.as_str() {
        "list" | "ls" => {
            if let Some(query) = &args.search {
                editor.set_search(query.as_str());
            }
            if args.full {
                let ids: Vec<i64> = app.store.all_extensions().unwrap_or_default().iter().map(|e| e.id).collect();
                for id in ids {
                    editor.toggle(id);
                }
            }
            list(app, &editor, output)?;
        }

        "show" => {
            let extension = find(app, require_id(args.id, "show")?)?;
            if output.json {
                return output.print_json(&extension);
            }
            println!("Extension: {}", extension.name);
            println!("  id: {}", extension.id);
            println!("  scope: {}", extension.scope);
            if let Some(project_id) = extension.project_id {
                let project = app.store.project_name(project_id).unwrap_or("?");
                println!("  project: {} [{}]", project, project_id);
            }
            if !extension.description.is_empty() {
                println!("  description: {}", extension.description);
            }
            if let Some(count) = extension.item_count {
                println!("  items: {}", count);
            }
            println!("  created: {}", format_date(&extension.creation_date));
        }

        "add" | "create" => {
            let scope = Scope::parse(&args.scope)
                .ok_or_else(|| anyhow::anyhow!("Unknown scope: {}. Valid: shared, project", args.scope))?;

            let mut form = ExtensionForm::new();
            form.select_scope(scope);
            form.set_name(args.name.unwrap_or_default());
            form.set_description(args.description.unwrap_or_default());
            if let Some(project) = args.project {
                form.set_project(project);
            }

            let values = form
                .submit(&app.store)
                .map_err(|errors| anyhow::anyhow!("Invalid extension: {}", errors))?;

            if let Some(extension) = editor.create(app, Dialog::ready(DialogOutcome::Submitted(values))).await {
                if output.json {
                    return output.print_json(&extension);
                }
                println!("Created extension: {} ({})", extension.name, extension.id);
            }
        }

        "update" => {
            let extension = find(app, require_id(args.id, "update")?)?;
            let outcome = match ExtensionUpdateForm::new(&extension) {
                Ok(mut form) => {
                    if let Some(name) = args.name {
                        form.set_name(name);
                    }
                    if let Some(description) = args.description {
                        form.set_description(description);
                    }
                    if form.is_unchanged() {
                        println!("Nothing to update for extension {}", extension.id);
                        return Ok(());
                    }
                    form.submit().map_or_else(|e| DialogOutcome::Failed(e.to_string()), DialogOutcome::Submitted)
                }
                Err(e) => DialogOutcome::Failed(e.to_string()),
            };
            editor.update(app, &extension, Dialog::ready(outcome)).await;
        }

        "delete" | "rm" => {
            let extension = find(app, require_id(args.id, "delete")?)?;
            if editor.delete(app, &extension).await {
                println!("Deleted extension: {} ({})", extension.name, extension.id);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: list, show, add, update, delete", other);
        }
    }

    Ok(())
}

/// Print the extension table
pub(crate) fn list(app: &App, editor: &ExtensionEditor, output: Output) -> Result<()> {
    let rows = editor.rows(app);
    if output.json {
        return output.print_json(&rows);
    }
    if rows.is_empty() {
        println!("No extensions found. Use 'typecode-registry extensions add' to create one.");
        return Ok(());
    }

    println!("Extensions ({}):", rows.len());
    for row in &rows {
        let owner = if row.project.is_empty() {
            row.scope.to_string()
        } else {
            format!("{}/{}", row.scope, row.project)
        };
        let items = row.item_count.map(|n| format!(", {n} items")).unwrap_or_default();
        println!("  [{}] {} [{}{}]", row.id, row.name, owner, items);
        if !row.description.is_empty() {
            println!("    {}", row.description);
        }
    }
    Ok(())
}

fn find(app: &App, id: i64) -> Result<Extension> {
    app.store
        .extension(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Extension not found: {}", id))
}
