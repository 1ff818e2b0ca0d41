// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Open a client route - list views or error pages

use super::Output;
use crate::editor::{App, ExtensionEditor, ItemEditor, ProjectEditor};
use crate::surface::{ConsoleSurface, Route};
use anyhow::Result;

/// Run open command
pub async fn run(app: &mut App, output: Output, path: &str) -> Result<()> {
    let route = Route::parse(path);
    tracing::debug!("opening {} as {}", path, route);

    match route {
        Route::Items => {
            let editor = ItemEditor::new();
            editor.load(app).await;
            super::items::list(app, &editor, output)
        }
        Route::Extensions => {
            let editor = ExtensionEditor::new();
            editor.load(app).await;
            super::extensions::list(app, &editor, output)
        }
        Route::Projects => {
            let editor = ProjectEditor::new();
            editor.load(app).await;
            super::projects::list(app, &editor, output)
        }
        Route::Error { page, .. } => {
            if output.json {
                return output.print_json(&page.details());
            }
            print!("{}", ConsoleSurface::new(output.color).render_error_page(&route));
            Ok(())
        }
    }
}
