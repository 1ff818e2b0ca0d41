// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Project creation form

use super::{Control, Field, FormErrors, Rule};

/// Values of a valid project form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFormValues {
    /// Project name, trimmed
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Project creation form
#[derive(Debug, Clone)]
pub struct ProjectForm {
    name: Control,
    description: Control,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Control::new(""),
            description: Control::new(""),
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

    /// Run every rule against the current values
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        FormErrors::collect([(Field::Name, &self.name, Rule::Required)], None)
    }

    /// Values, or what blocks submitting them
    pub fn submit(&self) -> Result<ProjectFormValues, FormErrors> {
        self.validate().into_result(|| ProjectFormValues {
            name: self.name.text().trim().to_string(),
            description: self.description.text().to_string(),
        })
    }
}
