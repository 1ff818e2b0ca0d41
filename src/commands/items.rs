// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Item commands - list, add, rename and delete typecoded items

use super::{require_id, Output};
use crate::dialog::{Dialog, DialogOutcome};
use crate::editor::items::{item_snippet, relation_snippet};
use crate::editor::{format_date, App, ItemEditor};
use crate::forms::{ItemForm, ItemUpdateForm};
use crate::types::{Item, Scope};
use anyhow::Result;

/// Arguments of `items`
#[derive(Debug, Clone, clap::Args)]
pub struct ItemArgs {
    /// Action: list, show, add, update, delete, snippet
    #[arg(default_value = "list")]
    pub action: String,

    /// Item id (show, update, delete, snippet)
    pub id: Option<i64>,

    /// Type name
    #[arg(long)]
    pub name: Option<String>,

    /// Deployment table name
    #[arg(long)]
    pub table: Option<String>,

    /// Target extension name
    #[arg(long)]
    pub extension: Option<String>,

    /// Scope of the target extension (shared, project)
    #[arg(long, default_value = "shared")]
    pub scope: String,

    /// Project owning the target extension
    #[arg(long)]
    pub project: Option<String>,

    /// Only list items matching this text
    #[arg(long)]
    pub search: Option<String>,

    /// Print the relation snippet instead of the itemtype snippet
    #[arg(long)]
    pub relation: bool,
}

/// Run item command
pub async fn run(app: &mut App, output: Output, args: ItemArgs) -> Result<()> {
    let mut editor = ItemEditor::new();
    editor.load(app).await;

    match args.action.as_str() {
        "list" | "ls" => {
            if let Some(query) = &args.search {
                editor.set_search(query.as_str());
            }
            list(app, &editor, output)?;
        }

        "show" => {
            let item = find(app, require_id(args.id, "show")?)?;
            if output.json {
                return output.print_json(&item);
            }
            let extension = app.store.extension_name(item.extension_id).unwrap_or("?");
            println!("Item: {}", item.name);
            println!("  id: {}", item.id);
            println!("  table: {}", item.table_name);
            match Scope::parse(&item.scope) {
                Some(scope) => println!("  typecode: {} ({} band {})", item.typecode, scope, typecode_band(scope)),
                None => println!("  typecode: {}", item.typecode),
            }
            println!("  scope: {}", item.scope);
            if !item.project.is_empty() {
                println!("  project: {}", item.project);
            }
            println!("  extension: {} [{}]", extension, item.extension_id);
            println!("  created: {}", format_date(&item.creation_date));
        }

        "snippet" => {
            let item = find(app, require_id(args.id, "snippet")?)?;
            if args.relation {
                println!("{}", relation_snippet(&item));
            } else {
                println!("{}", item_snippet(&item));
            }
        }

        "add" | "create" => {
            let scope = Scope::parse(&args.scope)
                .ok_or_else(|| anyhow::anyhow!("Unknown scope: {}. Valid: shared, project", args.scope))?;

            let mut form = ItemForm::new();
            form.select_scope(scope);
            form.set_name(args.name.unwrap_or_default());
            form.set_table(args.table.unwrap_or_default());
            if let Some(project) = args.project {
                form.set_project(project);
            }
            form.set_extension(args.extension.unwrap_or_default());

            let values = form
                .submit(&app.store)
                .map_err(|errors| anyhow::anyhow!("Invalid item: {}", errors))?;

            if let Some(item) = editor.create(app, Dialog::ready(DialogOutcome::Submitted(values))).await {
                if output.json {
                    return output.print_json(&item);
                }
                println!("Created item: {} ({}) typecode {}", item.name, item.table_name, item.typecode);
            }
        }

        "update" => {
            let item = find(app, require_id(args.id, "update")?)?;
            let outcome = match ItemUpdateForm::new(&item) {
                Ok(mut form) => {
                    if let Some(name) = args.name {
                        form.set_name(name);
                    }
                    if let Some(table) = args.table {
                        form.set_table(table);
                    }
                    if form.is_unchanged() {
                        println!("Nothing to update for item {}", item.id);
                        return Ok(());
                    }
                    form.submit().map_or_else(|e| DialogOutcome::Failed(e.to_string()), DialogOutcome::Submitted)
                }
                Err(e) => DialogOutcome::Failed(e.to_string()),
            };
            editor.update(app, &item, Dialog::ready(outcome)).await;
        }

        "delete" | "rm" => {
            let item = find(app, require_id(args.id, "delete")?)?;
            if editor.delete(app, &item).await {
                println!("Deleted item: {} ({})", item.name, item.id);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: list, show, add, update, delete, snippet", other);
        }
    }

    Ok(())
}

/// Print the item table
pub(crate) fn list(app: &App, editor: &ItemEditor, output: Output) -> Result<()> {
    let rows = editor.rows(app);
    if output.json {
        return output.print_json(&rows);
    }
    if rows.is_empty() {
        println!("No items found. Use 'typecode-registry items add' to register one.");
        return Ok(());
    }

    println!("Items ({}):", rows.len());
    for row in &rows {
        let owner = if row.project.is_empty() {
            row.scope.clone()
        } else {
            format!("{}/{}", row.scope, row.project)
        };
        println!(
            "  [{}] {} ({}) typecode {} in {} [{}]",
            row.id, row.name, row.table_name, row.typecode, row.extension, owner
        );
    }
    Ok(())
}

/// Typecode band of a scope, e.g. `14000-19999` or `20000+`
fn typecode_band(scope: Scope) -> String {
    let range = scope.typecode_range();
    if *range.end() == i32::MAX {
        format!("{}+", range.start())
    } else {
        format!("{}-{}", range.start(), range.end())
    }
}

fn find(app: &App, id: i64) -> Result<Item> {
    app.store
        .item(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Item not found: {}", id))
}
