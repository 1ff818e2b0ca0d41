// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Update forms, seeded from the record being edited

use super::{Control, Field, FormErrors, Rule};
use crate::types::{Extension, ExtensionUpdateRequest, Item, ItemUpdateRequest, Project, ProjectUpdateRequest};

/// An update form was opened without a record to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Error: No {0} data provided.")]
pub struct MissingRecord(pub &'static str);

fn changed(control: &Control, original: &str) -> Option<String> {
    let value = control.text();
    (value != original).then(|| value.to_string())
}

fn changed_trimmed(control: &Control, original: &str) -> Option<String> {
    let value = control.text().trim();
    (value != original).then(|| value.to_string())
}

// =============================================================================
// Item
// =============================================================================

/// Rename an item or move it to another table
#[derive(Debug, Clone)]
pub struct ItemUpdateForm {
    item: Item,
    name: Control,
    table: Control,
}

impl ItemUpdateForm {
    /// Open for `item`; fails for an unsaved item
    pub fn new(item: &Item) -> Result<Self, MissingRecord> {
        if item.id == 0 {
            return Err(MissingRecord("item"));
        }
        Ok(Self {
            item: item.clone(),
            name: Control::new(&item.name),
            table: Control::new(&item.table_name),
        })
    }

    /// Enter the new name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    /// Enter the new table
    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table.set(table);
    }

    /// True while nothing differs from the record
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.name.text() == self.item.name && self.table.text() == self.item.table_name
    }

    /// Request body, or what blocks it
    pub fn submit(&self) -> Result<ItemUpdateRequest, FormErrors> {
        FormErrors::collect(
            [(Field::Name, &self.name, Rule::Required), (Field::Table, &self.table, Rule::Required)],
            None,
        )
        .into_result(|| ItemUpdateRequest {
            name: self.name.text().to_string(),
            table_name: self.table.text().to_string(),
        })
    }
}

// =============================================================================
// Extension
// =============================================================================

/// Rename an extension or change its description
#[derive(Debug, Clone)]
pub struct ExtensionUpdateForm {
    extension: Extension,
    name: Control,
    description: Control,
}

impl ExtensionUpdateForm {
    /// Open for `extension`; fails for an unsaved extension
    pub fn new(extension: &Extension) -> Result<Self, MissingRecord> {
        if extension.id == 0 {
            return Err(MissingRecord("extension"));
        }
        Ok(Self {
            extension: extension.clone(),
            name: Control::new(&extension.name),
            description: Control::new(&extension.description),
        })
    }

    /// Enter the new name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    /// Enter the new description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description.set(description);
    }

    /// True while nothing differs from the record
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.name.text() == self.extension.name && self.description.text() == self.extension.description
    }

    /// Request body with the changed fields only
    pub fn submit(&self) -> Result<ExtensionUpdateRequest, FormErrors> {
        FormErrors::collect([(Field::Name, &self.name, Rule::Required)], None).into_result(|| ExtensionUpdateRequest {
            name: changed(&self.name, &self.extension.name),
            description: changed(&self.description, &self.extension.description),
        })
    }
}

// =============================================================================
// Project
// =============================================================================

/// Rename a project or change its description
#[derive(Debug, Clone)]
pub struct ProjectUpdateForm {
    project: Project,
    name: Control,
    description: Control,
}

impl ProjectUpdateForm {
    /// Open for `project`; fails for an unsaved project
    pub fn new(project: &Project) -> Result<Self, MissingRecord> {
        if project.id == 0 {
            return Err(MissingRecord("project"));
        }
        Ok(Self {
            project: project.clone(),
            name: Control::new(&project.name),
            description: Control::new(&project.description),
        })
    }

    /// Enter the new name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    /// Enter the new description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description.set(description);
    }

    /// True while nothing differs from the record
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.name.text().trim() == self.project.name && self.description.text() == self.project.description
    }

    /// Request body with the changed fields only
    pub fn submit(&self) -> Result<ProjectUpdateRequest, FormErrors> {
        FormErrors::collect([(Field::Name, &self.name, Rule::Required)], None).into_result(|| ProjectUpdateRequest {
            name: changed_trimmed(&self.name, &self.project.name),
            description: changed(&self.description, &self.project.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_extension() -> Extension {
        Extension {
            id: 9,
            name: "core".into(),
            description: "base types".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unsaved_record_refused() {
        let err = ItemUpdateForm::new(&Item::default()).unwrap_err();
        assert_eq!(err.to_string(), "Error: No item data provided.");
        assert!(ExtensionUpdateForm::new(&Extension::default()).is_err());
        assert_eq!(
            ProjectUpdateForm::new(&Project::default()).unwrap_err().to_string(),
            "Error: No project data provided."
        );
    }

    #[test]
    fn test_unchanged_until_edited() {
        let mut form = ExtensionUpdateForm::new(&make_extension()).unwrap();
        assert!(form.is_unchanged());
        form.set_name("core");
        assert!(form.is_unchanged());
        form.set_description("shared base types");
        assert!(!form.is_unchanged());
    }

    #[test]
    fn test_only_changed_fields_sent() {
        let mut form = ExtensionUpdateForm::new(&make_extension()).unwrap();
        form.set_description("shared base types");
        let request = form.submit().unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.description.as_deref(), Some("shared base types"));
    }

    #[test]
    fn test_project_name_compared_after_trim() {
        let project = Project { id: 4, name: "alpha".into(), ..Default::default() };
        let mut form = ProjectUpdateForm::new(&project).unwrap();
        form.set_name("  alpha  ");
        form.set_description("new");
        let request = form.submit().unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.description.as_deref(), Some("new"));

        form.set_name(" beta ");
        assert_eq!(form.submit().unwrap().name.as_deref(), Some("beta"));
    }

    #[test]
    fn test_item_update_needs_both_fields() {
        let item = Item { id: 1, name: "Order".into(), table_name: "orders".into(), ..Default::default() };
        let mut form = ItemUpdateForm::new(&item).unwrap();
        form.set_table("");
        assert!(form.submit().is_err());
        form.set_table("order_v2");
        assert_eq!(form.submit().unwrap().table_name, "order_v2");
    }
}
