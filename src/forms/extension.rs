// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Extension creation form

use super::{Control, Field, FormErrors, Rule, ScopeState};
use crate::store::EntityStore;
use crate::types::Scope;

/// Values of a valid extension form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFormValues {
    /// Extension name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Requested scope
    pub scope: Scope,
    /// Owning project name (Project scope only)
    pub project: Option<String>,
}

/// Extension creation form, starting in `Project` scope
#[derive(Debug, Clone)]
pub struct ExtensionForm {
    name: Control,
    description: Control,
    scope: ScopeState,
    project: Control,
}

impl Default for ExtensionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Control::new(""),
            description: Control::new(""),
            scope: ScopeState::new(Scope::Project),
            project: Control::new(""),
        }
    }

    /// Enter the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    /// Enter the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description.set(description);
    }

    /// Pick the owning project
    pub fn set_project(&mut self, project: impl Into<String>) {
        self.project.set(project);
    }

    /// Switch scope; leaving `Project` clears the project
    pub fn select_scope(&mut self, scope: Scope) -> bool {
        self.scope.select(scope, &mut self.project, None)
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

    /// Run every rule against the current values
    #[must_use]
    pub fn validate(&self, store: &EntityStore) -> FormErrors {
        FormErrors::collect(
            [
                (Field::Name, &self.name, Rule::Required),
                (Field::Description, &self.description, Rule::None),
                (Field::Project, &self.project, self.scope.project_rule(store)),
            ],
            self.scope.form_error(&self.project),
        )
    }

    /// Values, or what blocks submitting them
    pub fn submit(&self, store: &EntityStore) -> Result<ExtensionFormValues, FormErrors> {
        self.validate(store).into_result(|| ExtensionFormValues {
            name: self.name.text().trim().to_string(),
            description: self.description.text().to_string(),
            scope: self.scope(),
            project: match self.scope() {
                Scope::Shared => None,
                Scope::Project => self.project.value().map(str::to_string),
            },
        })
    }
}
