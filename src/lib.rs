// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Typecode Registry client library
//!
//! This crate provides the client side of the Typecode Registry: a cache of
//! projects, extensions and typecoded items, the forms that create and edit
//! them, and the gateway that talks to the registry's REST backend.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod dialog;
pub mod editor;
pub mod forms;
pub mod gateway;
pub mod store;
pub mod surface;

/// Core data types exchanged with the registry backend
pub mod types {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize};
    use std::fmt;
    use std::ops::RangeInclusive;

    // =========================================================================
    // Scope
    // =========================================================================

    /// Visibility class of an extension
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum Scope {
        /// Global extension without an owning project
        #[default]
        Shared,
        /// Extension owned by exactly one project
        Project,
    }

    impl Scope {
        /// Wire name of the scope, also used in `/extensions/{scope}`
        #[must_use]
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Shared => "Shared",
                Self::Project => "Project",
            }
        }

        /// Parse a scope name, ignoring case
        #[must_use]
        pub fn parse(name: &str) -> Option<Self> {
            match name.to_ascii_lowercase().as_str() {
                "shared" => Some(Self::Shared),
                "project" => Some(Self::Project),
                _ => None,
            }
        }

        /// Typecode band the backend allocates from for items in this scope
        #[must_use]
        pub fn typecode_range(&self) -> RangeInclusive<i32> {
            match self {
                Self::Shared => 20_000..=i32::MAX,
                Self::Project => 14_000..=19_999,
            }
        }
    }

    impl fmt::Display for Scope {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    // =========================================================================
    // Project
    // =========================================================================

    /// A customer project that can own extensions
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Project {
        /// Backend identifier (0 = unset)
        pub id: i64,
        /// Project name, unique among projects
        pub name: String,
        /// Free-form description
        #[serde(default)]
        pub description: String,
        /// When the project was created
        #[serde(default)]
        pub creation_date: DateTime<Utc>,
    }

    // =========================================================================
    // Extension
    // =========================================================================

    /// An extension grouping items, either shared or owned by a project
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Extension {
        /// Backend identifier (0 = unset)
        pub id: i64,
        /// Owning project; `None` for shared extensions
        #[serde(default, deserialize_with = "owner_id", skip_serializing_if = "Option::is_none")]
        pub project_id: Option<i64>,
        /// Extension name, unique within its scope
        pub name: String,
        /// Scope of the extension
        #[serde(default)]
        pub scope: Scope,
        /// Free-form description
        #[serde(default)]
        pub description: String,
        /// When the extension was created
        #[serde(default)]
        pub creation_date: DateTime<Utc>,
        /// Number of items registered in this extension
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub item_count: Option<i64>,
    }

    impl Extension {
        /// True when the extension has no owning project
        #[must_use]
        pub fn is_shared(&self) -> bool {
            self.project_id.is_none()
        }

        /// True when the extension is owned by the given project
        #[must_use]
        pub fn is_owned_by(&self, project_id: i64) -> bool {
            self.project_id == Some(project_id)
        }
    }

    /// The backend writes `null` for shared extensions; a zero id means the same
    fn owner_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(deserializer)?.filter(|id| *id > 0))
    }

    // =========================================================================
    // Item
    // =========================================================================

    /// A typecoded item (a generated type with its own table)
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Item {
        /// Backend identifier (0 = unset)
        pub id: i64,
        /// Scope name of the owning extension, as reported by the backend
        #[serde(default)]
        pub scope: String,
        /// Project name of the owning extension, empty for shared items
        #[serde(default)]
        pub project: String,
        /// Type name
        pub name: String,
        /// Deployment table name
        pub table_name: String,
        /// Owning extension
        pub extension_id: i64,
        /// Allocated typecode
        #[serde(default)]
        pub typecode: i32,
        /// When the item was created
        #[serde(default)]
        pub creation_date: DateTime<Utc>,
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Body of `POST /items`
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ItemRequest {
        /// Type name
        pub name: String,
        /// Deployment table name
        pub table_name: String,
        /// Owning extension
        pub extension_id: i64,
    }

    /// Body of `PUT /items/{id}`
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ItemUpdateRequest {
        /// New type name
        pub name: String,
        /// New table name
        pub table_name: String,
    }

    /// Body of `POST /extensions`
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExtensionRequest {
        /// Owning project, omitted for shared extensions
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub project_id: Option<i64>,
        /// Extension name
        pub name: String,
        /// Requested scope
        pub scope: Scope,
        /// Free-form description
        pub description: String,
    }

    /// Body of `PUT /extensions/{id}`; only changed fields are sent
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExtensionUpdateRequest {
        /// New name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        /// New description
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }

    /// Body of `POST /projects`
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProjectRequest {
        /// Project name
        pub name: String,
        /// Free-form description
        pub description: String,
    }

    /// Body of `PUT /projects/{id}`; only changed fields are sent
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProjectUpdateRequest {
        /// New name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        /// New description
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }

    impl ExtensionUpdateRequest {
        /// True when nothing would change
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.name.is_none() && self.description.is_none()
        }
    }

    impl ProjectUpdateRequest {
        /// True when nothing would change
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.name.is_none() && self.description.is_none()
        }
    }

    // =========================================================================
    // Response envelopes
    // =========================================================================

    /// `{"items": [...]}`; a `null` list means the registry holds no items yet
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct ItemsEnvelope {
        /// Items, or `None` when the backend answered `null`
        #[serde(default)]
        pub items: Option<Vec<Item>>,
    }

    /// `{"item": {...}}`
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ItemEnvelope {
        /// The created item
        pub item: Item,
    }

    /// `{"extensions": [...]}`
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct ExtensionsEnvelope {
        /// Extensions, or `None` when the backend answered `null`
        #[serde(default)]
        pub extensions: Option<Vec<Extension>>,
    }

    /// `{"extension": {...}}`
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ExtensionEnvelope {
        /// The created extension
        pub extension: Extension,
    }

    /// `{"projects": [...]}`
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct ProjectsEnvelope {
        /// Projects, or `None` when the backend answered `null`
        #[serde(default)]
        pub projects: Option<Vec<Project>>,
    }

    /// `{"project": {...}}`
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ProjectEnvelope {
        /// The created project
        pub project: Project,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
