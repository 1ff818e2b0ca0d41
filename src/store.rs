// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! In-memory cache of registry entities

use crate::types::{Extension, Item, Project};

/// Lists whose empty result is surfaced to the user once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// `GET /items` answered `null`
    Items,
    /// `GET /extensions` answered `null`
    Extensions,
}

/// Cached registry state, owned by the application and passed to editors
///
/// `items` and `all_extensions` keep the difference between "the backend
/// answered `null`" (`None`) and "nothing loaded yet or loaded empty"
/// (an empty vector).
#[derive(Debug, Clone)]
pub struct EntityStore {
    projects: Vec<Project>,
    shared_extensions: Vec<Extension>,
    project_extensions: Vec<Extension>,
    all_extensions: Option<Vec<Extension>>,
    items: Option<Vec<Item>>,
    shown_empty_items: bool,
    shown_empty_extensions: bool,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            shared_extensions: Vec::new(),
            project_extensions: Vec::new(),
            all_extensions: Some(Vec::new()),
            items: Some(Vec::new()),
            shown_empty_items: false,
            shown_empty_extensions: false,
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Replace the cached projects
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// Replace the cached shared extensions
    pub fn set_shared_extensions(&mut self, extensions: Vec<Extension>) {
        self.shared_extensions = extensions;
    }

    /// Replace the cached project extensions
    pub fn set_project_extensions(&mut self, extensions: Vec<Extension>) {
        self.project_extensions = extensions;
    }

    /// Replace the cached list of all extensions (`None` = backend sent `null`)
    pub fn set_all_extensions(&mut self, extensions: Option<Vec<Extension>>) {
        self.all_extensions = extensions;
    }

    /// Replace the cached items (`None` = backend sent `null`)
    pub fn set_items(&mut self, items: Option<Vec<Item>>) {
        self.items = items;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All cached projects
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Cached shared extensions
    #[must_use]
    pub fn shared_extensions(&self) -> &[Extension] {
        &self.shared_extensions
    }

    /// Cached project extensions
    #[must_use]
    pub fn project_extensions(&self) -> &[Extension] {
        &self.project_extensions
    }

    /// Cached list of all extensions, `None` if the backend sent `null`
    #[must_use]
    pub fn all_extensions(&self) -> Option<&[Extension]> {
        self.all_extensions.as_deref()
    }

    /// Cached items, `None` if the backend sent `null`
    #[must_use]
    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    /// Names of all cached projects, in cache order
    #[must_use]
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Id of the first shared extension named exactly `name`
    #[must_use]
    pub fn shared_extension_id(&self, name: &str) -> Option<i64> {
        self.shared_extensions
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id)
    }

    /// Id of the extension called `extension_name` inside project `project_name`
    ///
    /// Extension names are only unique within a project, so the project is
    /// resolved first.
    #[must_use]
    pub fn project_extension_id(&self, project_name: &str, extension_name: &str) -> Option<i64> {
        let project_id = self.project_id(project_name)?;
        self.project_extensions
            .iter()
            .find(|e| e.is_owned_by(project_id) && e.name == extension_name)
            .map(|e| e.id)
    }

    /// Id of the project named exactly `name`
    #[must_use]
    pub fn project_id(&self, name: &str) -> Option<i64> {
        self.projects.iter().find(|p| p.name == name).map(|p| p.id)
    }

    /// Name of the project with the given id
    #[must_use]
    pub fn project_name(&self, id: i64) -> Option<&str> {
        self.project(id).map(|p| p.name.as_str())
    }

    /// Project by id
    #[must_use]
    pub fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Extension by id, searching project, shared and then all extensions
    #[must_use]
    pub fn extension(&self, id: i64) -> Option<&Extension> {
        self.project_extensions
            .iter()
            .chain(self.shared_extensions.iter())
            .chain(self.all_extensions.iter().flatten())
            .find(|e| e.id == id)
    }

    /// Name of the extension with the given id
    #[must_use]
    pub fn extension_name(&self, id: i64) -> Option<&str> {
        self.extension(id).map(|e| e.name.as_str())
    }

    /// Item by id
    #[must_use]
    pub fn item(&self, id: i64) -> Option<&Item> {
        self.items.iter().flatten().find(|i| i.id == id)
    }

    // =========================================================================
    // Patches after successful backend calls
    // =========================================================================

    /// Append a newly created project
    pub fn insert_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Append a newly created extension to the list matching its owner
    pub fn insert_extension(&mut self, extension: Extension) {
        if let Some(all) = self.all_extensions.as_mut() {
            all.push(extension.clone());
        }
        if extension.is_shared() {
            self.shared_extensions.push(extension);
        } else {
            self.project_extensions.push(extension);
        }
    }

    /// Append a newly created item
    ///
    /// A `null` item list becomes a one-element list.
    pub fn insert_item(&mut self, item: Item) {
        self.items.get_or_insert_with(Vec::new).push(item);
    }

    /// Update a cached project in place; returns false if it is not cached
    pub fn update_project(&mut self, id: i64, name: Option<&str>, description: Option<&str>) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if let Some(name) = name {
            project.name = name.to_string();
        }
        if let Some(description) = description {
            project.description = description.to_string();
        }
        true
    }

    /// Update every cached copy of an extension; returns false if none exists
    pub fn update_extension(&mut self, id: i64, name: Option<&str>, description: Option<&str>) -> bool {
        let mut found = false;
        let lists = [
            Some(&mut self.shared_extensions),
            Some(&mut self.project_extensions),
            self.all_extensions.as_mut(),
        ];
        for extension in lists.into_iter().flatten().flat_map(|l| l.iter_mut()) {
            if extension.id != id {
                continue;
            }
            found = true;
            if let Some(name) = name {
                extension.name = name.to_string();
            }
            if let Some(description) = description {
                extension.description = description.to_string();
            }
        }
        found
    }

    /// Update a cached item's name and table; returns false if it is not cached
    pub fn update_item(&mut self, id: i64, name: &str, table_name: &str) -> bool {
        match self.items.iter_mut().flatten().find(|i| i.id == id) {
            Some(item) => {
                item.name = name.to_string();
                item.table_name = table_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Drop a project from the cache
    pub fn remove_project(&mut self, id: i64) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() < before
    }

    /// Drop an extension from every extension list
    pub fn remove_extension(&mut self, id: i64) -> bool {
        let mut removed = false;
        let lists = [
            Some(&mut self.shared_extensions),
            Some(&mut self.project_extensions),
            self.all_extensions.as_mut(),
        ];
        for list in lists.into_iter().flatten() {
            let before = list.len();
            list.retain(|e| e.id != id);
            removed |= list.len() < before;
        }
        removed
    }

    /// Drop an item from the cache
    pub fn remove_item(&mut self, id: i64) -> bool {
        match self.items.as_mut() {
            Some(items) => {
                let before = items.len();
                items.retain(|i| i.id != id);
                items.len() < before
            }
            None => false,
        }
    }

    // =========================================================================
    // One-shot empty-result notices
    // =========================================================================

    /// Whether the empty-result page was already shown for this list
    #[must_use]
    pub fn empty_notice_shown(&self, kind: EmptyKind) -> bool {
        match kind {
            EmptyKind::Items => self.shown_empty_items,
            EmptyKind::Extensions => self.shown_empty_extensions,
        }
    }

    /// Record that the empty-result page was shown for this list
    pub fn mark_empty_notice(&mut self, kind: EmptyKind) {
        match kind {
            EmptyKind::Items => self.shown_empty_items = true,
            EmptyKind::Extensions => self.shown_empty_extensions = true,
        }
    }
}
