// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Create and update forms
//!
//! Every form is a set of [`Control`]s. Validation derives one [`Rule`] per
//! control from the form's current state each time it runs, so there is no
//! validator state to keep in sync with the scope selection.

pub mod extension;
pub mod item;
pub mod project;
pub mod scope;
pub mod update;

pub use extension::{ExtensionForm, ExtensionFormValues};
pub use item::{ItemForm, ItemFormValues};
pub use project::{ProjectForm, ProjectFormValues};
pub use scope::ScopeState;
pub use update::{ExtensionUpdateForm, ItemUpdateForm, MissingRecord, ProjectUpdateForm};

use std::fmt;

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Entity name
    Name,
    /// Item table name
    Table,
    /// Free-form description
    Description,
    /// Owning project
    Project,
    /// Target extension of an item
    Extension,
}

impl Field {
    /// Field label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Table => "table",
            Self::Description => "description",
            Self::Project => "project",
            Self::Extension => "extension",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Empty required value
    #[error("This field is required.")]
    Required,
    /// Not a known project name
    #[error("The entered project does not exist.")]
    InvalidProject,
    /// Not one of the selectable extensions
    #[error("The entered extension does not exist.")]
    InvalidExtension,
}

/// Validation rule attached to a control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rule {
    /// Anything goes
    #[default]
    None,
    /// Non-empty after trimming
    Required,
    /// Exactly one of `names`
    MemberOf {
        /// Accepted values
        names: Vec<String>,
        /// Error raised for anything else
        error: FieldError,
    },
}

impl Rule {
    /// Check a value against this rule
    #[must_use]
    pub fn check(&self, value: Option<&str>) -> Option<FieldError> {
        match self {
            Self::None => None,
            Self::Required => match value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(FieldError::Required),
            },
            Self::MemberOf { names, error } => match value {
                Some(v) if names.iter().any(|n| n == v) => None,
                _ => Some(*error),
            },
        }
    }
}

/// A form input: its value and whether the user has interacted with it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    value: Option<String>,
    touched: bool,
}

impl Control {
    /// Untouched control seeded with `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            touched: false,
        }
    }

    /// Untouched control with no value
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// User input
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
        self.touched = true;
    }

    /// Drop the value and forget the interaction
    pub fn clear(&mut self) {
        self.value = None;
        self.touched = false;
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current value, empty when unset
    #[must_use]
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// True once the user has entered something
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }
}

/// One failing control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    /// Which field
    pub field: Field,
    /// What is wrong
    pub error: FieldError,
    /// Whether the error is displayed yet
    pub touched: bool,
}

/// Everything that blocks a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.fields, .form))]
pub struct FormErrors {
    /// Field-level failures
    pub fields: Vec<FieldIssue>,
    /// Failure of the form as a whole
    pub form: Option<FieldError>,
}

impl FormErrors {
    /// Run each control's rule
    pub(crate) fn collect<'a>(
        checks: impl IntoIterator<Item = (Field, &'a Control, Rule)>,
        form: Option<FieldError>,
    ) -> Self {
        let fields = checks
            .into_iter()
            .filter_map(|(field, control, rule)| {
                rule.check(control.value()).map(|error| FieldIssue {
                    field,
                    error,
                    touched: control.is_touched(),
                })
            })
            .collect();
        Self { fields, form }
    }

    /// True when the form may be submitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_none()
    }

    /// Error of one field, displayed or not
    #[must_use]
    pub fn field(&self, field: Field) -> Option<FieldError> {
        self.fields.iter().find(|i| i.field == field).map(|i| i.error)
    }

    /// Errors on controls the user has touched
    pub fn visible(&self) -> impl Iterator<Item = &FieldIssue> {
        self.fields.iter().filter(|i| i.touched)
    }

    pub(crate) fn into_result<T>(self, values: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(values())
        } else {
            Err(self)
        }
    }
}

fn describe(fields: &[FieldIssue], form: &Option<FieldError>) -> String {
    let mut parts: Vec<String> = fields.iter().map(|i| format!("{}: {}", i.field, i.error)).collect();
    if let Some(error) = form {
        if !fields.iter().any(|i| i.error == *error) {
            parts.push(error.to_string());
        }
    }
    if parts.is_empty() {
        "form is valid".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(Rule::Required.check(None), Some(FieldError::Required));
        assert_eq!(Rule::Required.check(Some("   ")), Some(FieldError::Required));
        assert_eq!(Rule::Required.check(Some("x")), None);
    }

    #[test]
    fn test_member_of() {
        let rule = Rule::MemberOf {
            names: vec!["alpha".into()],
            error: FieldError::InvalidProject,
        };
        assert_eq!(rule.check(Some("alpha")), None);
        assert_eq!(rule.check(Some("Alpha")), Some(FieldError::InvalidProject));
        assert_eq!(rule.check(None), Some(FieldError::InvalidProject));
        assert_eq!(Rule::None.check(None), None);
    }

    #[test]
    fn test_untouched_errors_block_but_stay_hidden() {
        let name = Control::empty();
        let mut table = Control::empty();
        table.set("");
        let errors = FormErrors::collect([(Field::Name, &name, Rule::Required), (Field::Table, &table, Rule::Required)], None);
        assert!(!errors.is_empty());
        assert_eq!(errors.visible().count(), 1);
        assert_eq!(errors.to_string(), "name: This field is required.; table: This field is required.");
    }

    #[test]
    fn test_clear_resets_touched() {
        let mut c = Control::new("seed");
        assert!(!c.is_touched());
        c.set("typed");
        assert!(c.is_touched());
        c.clear();
        assert_eq!(c.value(), None);
        assert!(!c.is_touched());
    }
}
