// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the editors and the entity store
//!
//! These tests verify critical invariants:
//! 1. Lookups - extension ids resolve only through the right scope/project
//! 2. Dialogs - a cancelled dialog never reaches the backend
//! 3. Deletes - only a confirmed 204 removes exactly the target
//! 4. Empty lists - the empty page is shown once per session

use async_trait::async_trait;
use proptest::prelude::*;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use typecode_registry::dialog::{self, Dialog, DialogOutcome, FixedAnswer};
use typecode_registry::editor::{App, ExtensionEditor, ItemEditor, ProjectEditor, POPULATE_DATABASE, UNSAVED_RECORD};
use typecode_registry::forms::{ExtensionForm, ItemForm, ItemFormValues, ProjectFormValues};
use typecode_registry::gateway::{Backend, Gateway, GatewayError};
use typecode_registry::store::EntityStore;
use typecode_registry::surface::{ErrorPage, MemorySurface, NoticeLevel, Route};
use typecode_registry::types::{
    Extension, ExtensionRequest, ExtensionUpdateRequest, Item, ItemRequest, ItemUpdateRequest, Project,
    ProjectRequest, ProjectUpdateRequest, Scope,
};

// =============================================================================
// Test Helpers
// =============================================================================

/// In-memory backend answering from fixed lists and recording every call
struct ScriptedBackend {
    items: Option<Vec<Item>>,
    shared: Vec<Extension>,
    project: Vec<Extension>,
    extensions_null: bool,
    projects: Vec<Project>,
    write_status: StatusCode,
    fail_reads: Option<GatewayError>,
    fail_writes: Option<GatewayError>,
    calls: Mutex<Vec<String>>,
    item_requests: Mutex<Vec<ItemRequest>>,
    extension_requests: Mutex<Vec<ExtensionRequest>>,
}

impl ScriptedBackend {
    fn new() -> Self {
        Self {
            items: Some(Vec::new()),
            shared: Vec::new(),
            project: Vec::new(),
            extensions_null: false,
            projects: Vec::new(),
            write_status: StatusCode::NO_CONTENT,
            fail_reads: None,
            fail_writes: None,
            calls: Mutex::default(),
            item_requests: Mutex::default(),
            extension_requests: Mutex::default(),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn writes(&self) -> Vec<String> {
        self.calls().into_iter().filter(|c| !c.starts_with("list")).collect()
    }

    fn read<T>(&self, call: &str, value: T) -> Result<T, GatewayError> {
        self.record(call);
        match &self.fail_reads {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }

    fn write<T>(&self, call: String, value: T) -> Result<T, GatewayError> {
        self.record(call);
        match &self.fail_writes {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn list_items(&self) -> Result<Option<Vec<Item>>, GatewayError> {
        self.read("list_items", self.items.clone())
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, GatewayError> {
        self.item_requests.lock().unwrap().push(request.clone());
        self.write(
            "create_item".into(),
            Item {
                id: 100,
                name: request.name.clone(),
                table_name: request.table_name.clone(),
                extension_id: request.extension_id,
                typecode: 20_000,
                ..Default::default()
            },
        )
    }

    async fn update_item(&self, id: i64, _request: &ItemUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.write(format!("update_item {id}"), self.write_status)
    }

    async fn delete_item(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.write(format!("delete_item {id}"), self.write_status)
    }

    async fn list_extensions(&self, scope: Option<Scope>) -> Result<Option<Vec<Extension>>, GatewayError> {
        let list = match scope {
            Some(Scope::Shared) => Some(self.shared.clone()),
            Some(Scope::Project) => Some(self.project.clone()),
            None if self.extensions_null => None,
            None => Some(self.shared.iter().chain(&self.project).cloned().collect()),
        };
        self.read("list_extensions", list)
    }

    async fn create_extension(&self, request: &ExtensionRequest) -> Result<Extension, GatewayError> {
        self.extension_requests.lock().unwrap().push(request.clone());
        self.write(
            "create_extension".into(),
            Extension {
                id: 50,
                project_id: request.project_id,
                name: request.name.clone(),
                scope: request.scope,
                description: request.description.clone(),
                ..Default::default()
            },
        )
    }

    async fn update_extension(&self, id: i64, _request: &ExtensionUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.write(format!("update_extension {id}"), self.write_status)
    }

    async fn delete_extension(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.write(format!("delete_extension {id}"), self.write_status)
    }

    async fn list_projects(&self) -> Result<Option<Vec<Project>>, GatewayError> {
        self.read("list_projects", Some(self.projects.clone()))
    }

    async fn create_project(&self, request: &ProjectRequest) -> Result<Project, GatewayError> {
        self.write(
            "create_project".into(),
            Project {
                id: 70,
                name: request.name.clone(),
                description: request.description.clone(),
                ..Default::default()
            },
        )
    }

    async fn update_project(&self, id: i64, _request: &ProjectUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.write(format!("update_project {id}"), self.write_status)
    }

    async fn delete_project(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.write(format!("delete_project {id}"), self.write_status)
    }
}

struct Harness {
    app: App,
    backend: Arc<ScriptedBackend>,
    surface: Arc<MemorySurface>,
    prompter: Arc<FixedAnswer>,
}

fn make_harness(backend: ScriptedBackend, prompter: FixedAnswer) -> Harness {
    let backend = Arc::new(backend);
    let surface = Arc::new(MemorySurface::new());
    let prompter = Arc::new(prompter);
    let gateway = Gateway::new(backend.clone(), surface.clone());
    Harness {
        app: App::new(gateway, surface.clone(), prompter.clone()),
        backend,
        surface,
        prompter,
    }
}

fn make_item(id: i64, name: &str) -> Item {
    Item {
        id,
        scope: "Shared".into(),
        name: name.into(),
        table_name: format!("{}_table", name.to_lowercase()),
        extension_id: 1,
        typecode: 20_000 + i32::try_from(id).unwrap(),
        ..Default::default()
    }
}

fn make_extension(id: i64, name: &str, owner: Option<i64>) -> Extension {
    Extension {
        id,
        project_id: owner,
        name: name.into(),
        scope: if owner.is_some() { Scope::Project } else { Scope::Shared },
        ..Default::default()
    }
}

fn make_project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.into(),
        ..Default::default()
    }
}

fn make_registry() -> ScriptedBackend {
    let mut backend = ScriptedBackend::new();
    backend.items = Some(vec![make_item(1, "Order"), make_item(2, "Cart"), make_item(3, "Invoice")]);
    backend.shared = vec![make_extension(1, "Extension A", None)];
    backend.project = vec![make_extension(2, "web", Some(7)), make_extension(3, "web", Some(8))];
    backend.projects = vec![make_project(7, "alpha"), make_project(8, "beta")];
    backend
}

fn item_ids(app: &App) -> Vec<i64> {
    app.store.items().unwrap_or_default().iter().map(|i| i.id).collect()
}

// =============================================================================
// Lookups
// =============================================================================

proptest! {
    #[test]
    fn prop_project_extension_lookup(names in prop::collection::vec("[a-z]{1,6}", 1..8), projects in 1usize..4) {
        let mut store = EntityStore::new();
        store.set_projects((0..projects).map(|p| make_project(p as i64 + 1, &format!("project-{p}"))).collect());

        let extensions: Vec<Extension> = names
            .iter()
            .enumerate()
            .map(|(j, name)| make_extension(100 + j as i64, &format!("{name}-{j}"), Some((j % projects) as i64 + 1)))
            .collect();
        store.set_project_extensions(extensions.clone());

        for (j, ext) in extensions.iter().enumerate() {
            let owner = format!("project-{}", j % projects);
            prop_assert_eq!(store.project_extension_id(&owner, &ext.name), Some(ext.id));
            prop_assert_eq!(store.project_extension_id("ghost", &ext.name), None);
        }
    }

    #[test]
    fn prop_shared_lookup_is_exact(names in prop::collection::vec("[a-z]{1,6}", 1..8), query in "[a-z]{1,6}") {
        let mut store = EntityStore::new();
        let extensions: Vec<Extension> = names
            .iter()
            .enumerate()
            .map(|(j, name)| make_extension(j as i64 + 1, &format!("{name}-{j}"), None))
            .collect();
        store.set_shared_extensions(extensions.clone());

        for ext in &extensions {
            prop_assert_eq!(store.shared_extension_id(&ext.name), Some(ext.id));
        }
        // generated names all carry a "-n" suffix, so a bare query never matches
        prop_assert_eq!(store.shared_extension_id(&query), None);
    }

    #[test]
    fn prop_scope_toggle_restores_shared_form(project in "[a-z]{0,8}", extension in "[a-z]{0,8}") {
        let mut store = EntityStore::new();
        store.set_projects(vec![make_project(7, "alpha")]);
        store.set_shared_extensions(vec![make_extension(1, "Extension A", None)]);

        let mut form = ItemForm::new();
        form.set_name("Test Item");
        form.set_table("Test Table");
        let before = form.validate(&store);

        form.select_scope(Scope::Project);
        form.set_project(project);
        form.set_extension(extension);
        form.select_scope(Scope::Shared);

        prop_assert_eq!(form.project().value(), None);
        prop_assert_eq!(form.extension().value(), None);
        prop_assert_eq!(form.validate(&store), before);
    }
}

#[test]
fn test_unknown_project_resolves_nothing() {
    let mut store = EntityStore::new();
    store.set_projects(vec![make_project(7, "alpha")]);
    store.set_project_extensions(vec![make_extension(2, "web", Some(7))]);
    assert_eq!(store.project_extension_id("alpha", "web"), Some(2));
    assert_eq!(store.project_extension_id("beta", "web"), None);
    assert_eq!(store.project_extension_id("alpha", "Web"), None);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_shared_item_sends_resolved_extension() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let mut form = ItemForm::new();
    form.set_name("Test Item");
    form.set_table("Test Table");
    form.set_extension("Extension A");
    let values = form.submit(&h.app.store).unwrap();

    let (handle, dialog) = dialog::open();
    handle.submit(values);
    let created = editor.create(&mut h.app, dialog).await.unwrap();

    assert_eq!(
        *h.backend.item_requests.lock().unwrap(),
        vec![ItemRequest {
            name: "Test Item".into(),
            table_name: "Test Table".into(),
            extension_id: 1,
        }]
    );
    assert_eq!(created.scope, "Shared");
    assert_eq!(item_ids(&h.app), vec![1, 2, 3, 100]);
    assert_eq!(h.surface.notices_of(NoticeLevel::Success)[0].message, "Item with ID 100 added!");
}

#[tokio::test]
async fn test_create_project_item_resolves_through_project() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let values = ItemFormValues {
        name: "Page".into(),
        table_name: "pages".into(),
        scope: Scope::Project,
        project: Some("beta".into()),
        extension: "web".into(),
    };
    editor.create(&mut h.app, Dialog::ready(DialogOutcome::Submitted(values))).await;

    assert_eq!(h.backend.item_requests.lock().unwrap()[0].extension_id, 3);
    assert_eq!(h.app.store.item(100).unwrap().project, "beta");
}

#[tokio::test]
async fn test_unresolvable_extension_never_reaches_backend() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let values = ItemFormValues {
        name: "Page".into(),
        table_name: "pages".into(),
        scope: Scope::Project,
        project: Some("ghost".into()),
        extension: "web".into(),
    };
    assert!(editor.create(&mut h.app, Dialog::ready(DialogOutcome::Submitted(values))).await.is_none());
    assert!(h.backend.writes().is_empty());
    assert_eq!(h.surface.notices_of(NoticeLevel::Failure).len(), 1);
}

#[tokio::test]
async fn test_create_project_extension() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ExtensionEditor::new();
    editor.load(&mut h.app).await;

    let mut form = ExtensionForm::new();
    form.set_name("erp");
    form.set_project("alpha");
    let values = form.submit(&h.app.store).unwrap();
    let created = editor
        .create(&mut h.app, Dialog::ready(DialogOutcome::Submitted(values)))
        .await
        .unwrap();

    assert_eq!(h.backend.extension_requests.lock().unwrap()[0].project_id, Some(7));
    assert!(created.is_owned_by(7));
    assert!(h.app.store.project_extensions().iter().any(|e| e.id == 50));
    assert!(h.app.store.all_extensions().unwrap().iter().any(|e| e.id == 50));
    assert_eq!(h.surface.notices()[0].message, "Extension with ID 50 created!");
}

#[tokio::test]
async fn test_create_failure_shows_server_text() {
    let mut backend = make_registry();
    backend.fail_writes = Some(GatewayError::Status {
        code: 409,
        message: "project name already taken".into(),
    });
    let mut h = make_harness(backend, FixedAnswer::yes());
    let editor = ProjectEditor::new();
    editor.load(&mut h.app).await;

    let values = ProjectFormValues {
        name: "alpha".into(),
        description: String::new(),
    };
    assert!(editor.create(&mut h.app, Dialog::ready(DialogOutcome::Submitted(values))).await.is_none());

    let failures = h.surface.notices_of(NoticeLevel::Failure);
    assert!(failures[0].message.contains("project name already taken"));
    assert_eq!(h.app.store.projects().len(), 2);
    assert_eq!(h.surface.routes(), vec![Route::error(ErrorPage::Unknown)]);
}

// =============================================================================
// Dialogs
// =============================================================================

#[tokio::test]
async fn test_cancelled_dialogs_never_call_backend() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let items = ItemEditor::new();
    let extensions = ExtensionEditor::new();
    let projects = ProjectEditor::new();
    items.load(&mut h.app).await;

    let (handle, dialog) = dialog::open();
    handle.cancel();
    assert!(items.create(&mut h.app, dialog).await.is_none());

    let (handle, dialog) = dialog::open::<ItemUpdateRequest>();
    drop(handle);
    let item = h.app.store.item(1).cloned().unwrap();
    assert!(!items.update(&mut h.app, &item, dialog).await);

    assert!(extensions.create(&mut h.app, Dialog::ready(DialogOutcome::Cancelled)).await.is_none());

    let project = make_project(7, "alpha");
    assert!(!projects.update(&mut h.app, &project, Dialog::ready(DialogOutcome::Cancelled)).await);

    assert!(h.backend.writes().is_empty());
    assert!(h.surface.notices().is_empty());
    assert_eq!(item_ids(&h.app), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_failed_dialog_shows_failure() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let outcome = DialogOutcome::Failed("Error: No item data provided.".into());
    editor.update(&mut h.app, &make_item(1, "Order"), Dialog::ready(outcome)).await;

    assert!(h.backend.writes().is_empty());
    assert_eq!(h.surface.notices_of(NoticeLevel::Failure)[0].message, "Error: No item data provided.");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_unsaved_record_rejected_before_dialog() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let request = ItemUpdateRequest {
        name: "x".into(),
        table_name: "y".into(),
    };
    let updated = ItemEditor::new()
        .update(&mut h.app, &Item::default(), Dialog::ready(DialogOutcome::Submitted(request)))
        .await;

    assert!(!updated);
    assert!(h.backend.writes().is_empty());
    assert_eq!(h.surface.notices()[0].message, UNSAVED_RECORD);
}

#[tokio::test]
async fn test_update_item_patches_store() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let item = h.app.store.item(2).cloned().unwrap();
    let request = ItemUpdateRequest {
        name: "Basket".into(),
        table_name: "baskets".into(),
    };
    assert!(editor.update(&mut h.app, &item, Dialog::ready(DialogOutcome::Submitted(request))).await);

    let updated = h.app.store.item(2).unwrap();
    assert_eq!(updated.name, "Basket");
    assert_eq!(updated.table_name, "baskets");
    assert_eq!(
        h.surface.notices()[0].message,
        "Item with ID 2 (, Extension A, 20002) updated!"
    );
}

#[tokio::test]
async fn test_update_item_needs_204() {
    let mut backend = make_registry();
    backend.write_status = StatusCode::OK;
    let mut h = make_harness(backend, FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let item = h.app.store.item(2).cloned().unwrap();
    let request = ItemUpdateRequest {
        name: "Basket".into(),
        table_name: "baskets".into(),
    };
    assert!(!editor.update(&mut h.app, &item, Dialog::ready(DialogOutcome::Submitted(request))).await);
    assert_eq!(h.app.store.item(2).unwrap().name, "Cart");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_204_removes_exactly_target() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let item = h.app.store.item(2).cloned().unwrap();
    assert!(editor.delete(&mut h.app, &item).await);

    assert_eq!(item_ids(&h.app), vec![1, 3]);
    assert_eq!(h.backend.writes(), vec!["delete_item 2".to_string()]);
    assert_eq!(h.surface.notices()[0].message, "Item with ID 2 deleted!");

    let prompt = &h.prompter.asked()[0];
    assert_eq!(prompt.label, "Do you really want to delete this Item?");
    assert_eq!(prompt.content, "This will delete Item Cart in Table cart_table with Typecode 20002.");
    assert_eq!((prompt.yes, prompt.no), ("Remove", "Cancel"));
}

#[tokio::test]
async fn test_delete_non_204_keeps_list() {
    let mut backend = make_registry();
    backend.write_status = StatusCode::OK;
    let mut h = make_harness(backend, FixedAnswer::yes());
    let editor = ItemEditor::new();
    editor.load(&mut h.app).await;

    let item = h.app.store.item(2).cloned().unwrap();
    assert!(!editor.delete(&mut h.app, &item).await);

    assert_eq!(item_ids(&h.app), vec![1, 2, 3]);
    assert_eq!(
        h.surface.notices_of(NoticeLevel::Failure)[0].message,
        "Could not delete item: 2! Received status code: 200"
    );
}

#[tokio::test]
async fn test_declined_delete_never_calls_backend() {
    let mut h = make_harness(make_registry(), FixedAnswer::no());
    let editor = ExtensionEditor::new();
    editor.load(&mut h.app).await;

    let extension = h.app.store.extension(2).cloned().unwrap();
    assert!(!editor.delete(&mut h.app, &extension).await);

    assert!(h.backend.writes().is_empty());
    assert_eq!(h.prompter.asked().len(), 1);
    assert!(h.app.store.extension(2).is_some());
}

#[tokio::test]
async fn test_delete_error_keeps_list_and_routes_to_error_page() {
    let mut backend = make_registry();
    backend.fail_writes = Some(GatewayError::Status {
        code: 500,
        message: "database unavailable".into(),
    });
    let mut h = make_harness(backend, FixedAnswer::yes());
    let editor = ProjectEditor::new();
    editor.load(&mut h.app).await;

    let project = h.app.store.project(8).cloned().unwrap();
    assert!(!editor.delete(&mut h.app, &project).await);

    assert_eq!(h.app.store.projects().len(), 2);
    assert_eq!(h.surface.routes(), vec![Route::error(ErrorPage::InternalServerError)]);
    assert!(h.surface.notices_of(NoticeLevel::Failure)[0]
        .message
        .starts_with("Could not delete project: 8! Error:"));
}

#[tokio::test]
async fn test_delete_extension_removes_from_every_list() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    let editor = ExtensionEditor::new();
    editor.load(&mut h.app).await;

    let extension = h.app.store.extension(3).cloned().unwrap();
    assert!(editor.delete(&mut h.app, &extension).await);
    assert!(h.app.store.extension(3).is_none());
    assert_eq!(h.app.store.all_extensions().unwrap().len(), 2);
}

// =============================================================================
// Empty lists
// =============================================================================

#[tokio::test]
async fn test_null_items_redirect_once() {
    let mut backend = make_registry();
    backend.items = None;
    let mut h = make_harness(backend, FixedAnswer::yes());
    let editor = ItemEditor::new();

    editor.load(&mut h.app).await;
    assert_eq!(
        h.surface.routes(),
        vec![Route::Error {
            page: ErrorPage::NoContent,
            origin: Some("/items".into()),
        }]
    );
    assert!(h.surface.notices().is_empty());
    assert!(h.app.store.items().is_none());

    editor.load(&mut h.app).await;
    editor.load(&mut h.app).await;
    assert_eq!(h.surface.routes().len(), 1);
    let infos = h.surface.notices_of(NoticeLevel::Information);
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].message, POPULATE_DATABASE);
}

#[tokio::test]
async fn test_null_extensions_redirect_back_to_extensions() {
    let mut backend = make_registry();
    backend.extensions_null = true;
    let mut h = make_harness(backend, FixedAnswer::yes());

    ExtensionEditor::new().load(&mut h.app).await;
    let routes = h.surface.routes();
    assert_eq!(routes[0].button_link(), Some("/extensions"));
    assert!(ExtensionEditor::new().rows(&h.app).is_empty());
}

#[tokio::test]
async fn test_read_failure_on_first_load_leaves_empty_store() {
    let mut backend = make_registry();
    backend.fail_reads = Some(GatewayError::Transport("connection refused".into()));
    let mut h = make_harness(backend, FixedAnswer::yes());

    ItemEditor::new().load(&mut h.app).await;

    assert_eq!(h.app.store.items().map(<[Item]>::len), Some(0));
    assert!(h.app.store.projects().is_empty());
    assert!(h.surface.routes().iter().all(|r| *r == Route::error(ErrorPage::NoConnection)));
    assert_eq!(h.surface.routes().len(), 4);
    assert!(h.surface.notices().is_empty());
}

#[tokio::test]
async fn test_failed_refetch_keeps_previous_store() {
    let mut h = make_harness(make_registry(), FixedAnswer::yes());
    ItemEditor::new().load(&mut h.app).await;
    ExtensionEditor::new().load(&mut h.app).await;
    assert_eq!(item_ids(&h.app), vec![1, 2, 3]);

    let mut failing = ScriptedBackend::new();
    failing.fail_reads = Some(GatewayError::Transport("connection refused".into()));
    h.app.gateway = Gateway::new(Arc::new(failing), h.surface.clone());

    ItemEditor::new().load(&mut h.app).await;
    ExtensionEditor::new().load(&mut h.app).await;
    ProjectEditor::new().load(&mut h.app).await;

    assert_eq!(item_ids(&h.app), vec![1, 2, 3]);
    assert_eq!(h.app.store.projects().len(), 2);
    assert_eq!(h.app.store.shared_extension_id("Extension A"), Some(1));
    assert_eq!(h.app.store.project_extension_id("beta", "web"), Some(3));
    assert_eq!(h.app.store.all_extensions().map(<[Extension]>::len), Some(3));
    assert_eq!(h.surface.routes().len(), 7);
    assert!(h.surface.routes().iter().all(|r| *r == Route::error(ErrorPage::NoConnection)));
}
