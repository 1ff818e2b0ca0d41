// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Item creation form

use super::{Control, Field, FieldError, FormErrors, Rule, ScopeState};
use crate::store::EntityStore;
use crate::types::{Extension, Scope};

/// Values of a valid item form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFormValues {
    /// Type name
    pub name: String,
    /// Deployment table name
    pub table_name: String,
    /// Scope of the target extension
    pub scope: Scope,
    /// Project owning the target extension (Project scope only)
    pub project: Option<String>,
    /// Target extension name
    pub extension: String,
}

/// Item creation form
#[derive(Debug, Clone)]
pub struct ItemForm {
    name: Control,
    table: Control,
    scope: ScopeState,
    project: Control,
    extension: Control,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    /// Empty form targeting a shared extension
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Control::new(""),
            table: Control::new(""),
            scope: ScopeState::new(Scope::Shared),
            project: Control::empty(),
            extension: Control::new(""),
        }
    }

    /// Enter the type name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    /// Enter the table name
    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table.set(table);
    }

    /// Pick the owning project
    pub fn set_project(&mut self, project: impl Into<String>) {
        self.project.set(project);
    }

    /// Pick the target extension
    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension.set(extension);
    }

    /// Switch scope; see [`ScopeState::select`]
    pub fn select_scope(&mut self, scope: Scope) -> bool {
        self.scope.select(scope, &mut self.project, Some(&mut self.extension))
    }

    /// Current scope
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope.scope()
    }

    /// Project control
    #[must_use]
    pub fn project(&self) -> &Control {
        &self.project
    }

    /// Extension control
    #[must_use]
    pub fn extension(&self) -> &Control {
        &self.extension
    }

    /// Extensions currently selectable
    #[must_use]
    pub fn extension_candidates<'a>(&self, store: &'a EntityStore) -> Vec<&'a Extension> {
        self.scope.extension_candidates(&self.project, store)
    }

    /// Run every rule against the current values
    #[must_use]
    pub fn validate(&self, store: &EntityStore) -> FormErrors {
        let extension_rule = Rule::MemberOf {
            names: self.extension_candidates(store).into_iter().map(|e| e.name.clone()).collect(),
            error: FieldError::InvalidExtension,
        };
        FormErrors::collect(
            [
                (Field::Name, &self.name, Rule::Required),
                (Field::Table, &self.table, Rule::Required),
                (Field::Project, &self.project, self.scope.project_rule(store)),
                (Field::Extension, &self.extension, extension_rule),
            ],
            self.scope.form_error(&self.project),
        )
    }

    /// Values, or what blocks submitting them
    pub fn submit(&self, store: &EntityStore) -> Result<ItemFormValues, FormErrors> {
        self.validate(store).into_result(|| ItemFormValues {
            name: self.name.text().trim().to_string(),
            table_name: self.table.text().trim().to_string(),
            scope: self.scope(),
            project: match self.scope() {
                Scope::Shared => None,
                Scope::Project => self.project.value().map(str::to_string),
            },
            extension: self.extension.text().to_string(),
        })
    }
}
