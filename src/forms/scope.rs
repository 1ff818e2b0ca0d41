// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shared/Project scope selection used by the item and extension forms

use super::{Control, FieldError, Rule};
use crate::store::EntityStore;
use crate::types::{Extension, Scope};

/// Which scope a form currently targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeState {
    scope: Scope,
}

impl ScopeState {
    /// Start in `scope`
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    /// Current scope
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Switch scope, resetting the controls that depend on it
    ///
    /// Entering `Project` clears the dependent extension; returning to
    /// `Shared` clears the project and the dependent extension. Selecting
    /// the current scope changes nothing. Returns whether a transition happened.
    pub fn select(&mut self, next: Scope, project: &mut Control, dependent: Option<&mut Control>) -> bool {
        if next == self.scope {
            return false;
        }
        tracing::debug!("changing scope from {} to {}", self.scope, next);

        if next == Scope::Shared {
            project.clear();
        }
        if let Some(extension) = dependent {
            extension.clear();
        }
        self.scope = next;
        true
    }

    /// Rule of the project control: a known project name in `Project` scope
    #[must_use]
    pub fn project_rule(&self, store: &EntityStore) -> Rule {
        match self.scope {
            Scope::Shared => Rule::None,
            Scope::Project => Rule::MemberOf {
                names: store.project_names().into_iter().map(str::to_string).collect(),
                error: FieldError::InvalidProject,
            },
        }
    }

    /// Form-level check: a project must be chosen outside `Shared` scope
    #[must_use]
    pub fn form_error(&self, project: &Control) -> Option<FieldError> {
        let chosen = project.value().is_some_and(|p| !p.is_empty());
        (self.scope != Scope::Shared && !chosen).then_some(FieldError::InvalidProject)
    }

    /// Extensions an item may be placed in
    ///
    /// Shared extensions in `Shared` scope; project extensions otherwise,
    /// narrowed to the selected project once it names a known project.
    #[must_use]
    pub fn extension_candidates<'a>(&self, project: &Control, store: &'a EntityStore) -> Vec<&'a Extension> {
        match self.scope {
            Scope::Shared => store.shared_extensions().iter().collect(),
            Scope::Project => {
                let owner = project.value().and_then(|name| store.project_id(name));
                store
                    .project_extensions()
                    .iter()
                    .filter(|e| owner.map_or(true, |id| e.is_owned_by(id)))
                    .collect()
            }
        }
    }
}
