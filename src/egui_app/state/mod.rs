use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::egui_app::config::Config;
use crate::egui_app::conflict::{self, AddAction, FailureKind};
use crate::egui_app::notify::Notifier;
use crate::egui_app::persons_api::PersonsApiClient;
use crate::egui_app::store::PersonStore;
use crate::shared::error::ApiError;
use crate::shared::person::{Person, PersonDraft};

type LoadResult = Result<Vec<Person>, ApiError>;
type SaveResult = Result<Person, ApiError>;
type RemoveResult = Result<String, ApiError>;

/// Banner shown when the initial fetch fails and the list never arrives.
pub const LOAD_ERROR_BANNER: &str = "Could not load data. Backend may be offline.";

/// Central application state shared across egui views.
///
/// All remote calls run on worker threads; completion results come back
/// over channels and are folded into the store by
/// `check_pending_operations`, which the frame loop calls every frame.
/// At most one mutation is in flight at a time.
pub struct AppState {
    pub config: Config,
    pub store: PersonStore,
    pub notifier: Notifier,

    pub name_input: String,
    pub number_input: String,
    pub filter_input: String,

    /// True from startup until the initial fetch settles.
    pub loading: bool,
    /// Set when the initial fetch failed; the list view never appears.
    pub load_error: Option<String>,

    /// Existing entry whose number a submitted add would overwrite.
    /// Set while the overwrite confirmation dialog is open.
    pub pending_overwrite: Option<Person>,
    /// Entry awaiting delete confirmation.
    pub pending_destroy: Option<Person>,

    pending_load: Option<Receiver<LoadResult>>,
    pending_create: Option<(String, Receiver<SaveResult>)>,
    pending_update: Option<(Person, Receiver<SaveResult>)>,
    pending_remove: Option<(Person, Receiver<RemoveResult>)>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            store: PersonStore::new(),
            notifier: Notifier::new(),
            name_input: String::new(),
            number_input: String::new(),
            filter_input: String::new(),
            loading: false,
            load_error: None,
            pending_overwrite: None,
            pending_destroy: None,
            pending_load: None,
            pending_create: None,
            pending_update: None,
            pending_remove: None,
        }
    }

    /// Kick off the initial fetch of the person list.
    pub fn start_load(&mut self) {
        if self.pending_load.is_some() {
            return;
        }
        tracing::info!("requesting person list from {}", self.config.backend_url());
        self.loading = true;
        self.load_error = None;

        let client = PersonsApiClient::new(self.config.clone());
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = client.get_all();
            let _ = tx.send(result);
        });

        self.pending_load = Some(rx);
    }

    /// True while a create, update or delete is in flight. Submissions and
    /// delete requests are ignored until the outstanding one settles.
    pub fn is_busy(&self) -> bool {
        self.pending_create.is_some()
            || self.pending_update.is_some()
            || self.pending_remove.is_some()
    }

    /// True while a confirmation dialog is waiting for an answer.
    pub fn confirm_open(&self) -> bool {
        self.pending_overwrite.is_some() || self.pending_destroy.is_some()
    }

    /// Rows the list view should show for the current filter text, in
    /// stored order. Cloned so the view can mutate state while iterating.
    pub fn filtered_persons(&self) -> Vec<Person> {
        self.store
            .filtered_by(&self.filter_input)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Handle the add form being submitted.
    ///
    /// Validates the inputs, then either starts a create or, when an entry
    /// with exactly the typed name already exists, opens the overwrite
    /// confirmation instead of calling the backend.
    pub fn handle_submit(&mut self) {
        if self.is_busy() || self.confirm_open() {
            return;
        }

        let draft = match PersonDraft::new(self.name_input.clone(), self.number_input.clone()) {
            Ok(draft) => draft,
            Err(err) => {
                self.notifier.error(format!("{} is required", err.field));
                return;
            }
        };

        match conflict::classify_add(self.store.all(), &draft.name) {
            AddAction::UpdateExisting(existing) => {
                tracing::info!("name {} already present, asking to overwrite", existing.name);
                self.pending_overwrite = Some(existing);
            }
            AddAction::Create => self.spawn_create(draft),
        }
    }

    /// Answer the overwrite confirmation. Confirming sends the typed
    /// number to the existing record; declining leaves everything as it
    /// was, form inputs included.
    pub fn resolve_overwrite(&mut self, confirmed: bool) {
        let existing = match self.pending_overwrite.take() {
            Some(existing) => existing,
            None => return,
        };

        if !confirmed {
            tracing::info!("overwrite of {} declined", existing.name);
            return;
        }

        match PersonDraft::new(existing.name.clone(), self.number_input.clone()) {
            Ok(draft) => self.spawn_update(existing, draft),
            Err(err) => self.notifier.error(format!("{} is required", err.field)),
        }
    }

    /// Open the delete confirmation for the entry with this id. Unknown
    /// ids are ignored without a dialog or a remote call.
    pub fn request_delete(&mut self, id: &str) {
        if self.is_busy() || self.confirm_open() {
            return;
        }

        let target = match self.store.find_by_id(id) {
            Some(person) => person.clone(),
            None => return,
        };
        self.pending_destroy = Some(target);
    }

    /// Answer the delete confirmation.
    pub fn resolve_destroy(&mut self, confirmed: bool) {
        let target = match self.pending_destroy.take() {
            Some(target) => target,
            None => return,
        };

        if confirmed {
            self.spawn_remove(target);
        }
    }

    /// Clear the add form. The filter text is left alone.
    pub fn clear_form(&mut self) {
        self.name_input.clear();
        self.number_input.clear();
    }

    /// Poll completion channels and fold finished operations into the
    /// store. Called once per frame from the UI loop.
    pub fn check_pending_operations(&mut self) {
        if let Some(rx) = &self.pending_load {
            if let Ok(result) = rx.try_recv() {
                self.pending_load = None;
                self.loading = false;
                match result {
                    Ok(persons) => {
                        tracing::info!("loaded {} persons", persons.len());
                        self.store.load(persons);
                    }
                    Err(error) => {
                        tracing::warn!("initial load failed: {}", error);
                        self.load_error = Some(LOAD_ERROR_BANNER.to_string());
                    }
                }
            }
        }

        if let Some((name, rx)) = &self.pending_create {
            if let Ok(result) = rx.try_recv() {
                let name = name.clone();
                self.pending_create = None;
                match result {
                    Ok(person) => {
                        self.store.append(person);
                        self.notifier.success(format!("{} added successfully", name));
                        self.clear_form();
                    }
                    Err(error) => {
                        tracing::warn!("create failed for {}: {}", name, error);
                        let message = error
                            .server_message()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| {
                                "There was an error adding the person".to_string()
                            });
                        self.notifier.error(message);
                    }
                }
            }
        }

        if let Some((target, rx)) = &self.pending_update {
            if let Ok(result) = rx.try_recv() {
                let target = target.clone();
                self.pending_update = None;
                match result {
                    Ok(person) => {
                        self.store.replace(person);
                        self.notifier
                            .success(format!("{}'s number updated successfully", target.name));
                        self.clear_form();
                    }
                    Err(error) => match conflict::classify_failure(&error) {
                        FailureKind::NotFound => {
                            tracing::warn!("update target {} vanished server-side", target.id);
                            self.notifier
                                .error(format!("{} was already deleted", target.name));
                        }
                        FailureKind::Other => {
                            tracing::warn!("update failed for {}: {}", target.name, error);
                            self.notifier.error("There was an error updating the person");
                        }
                    },
                }
            }
        }

        if let Some((target, rx)) = &self.pending_remove {
            if let Ok(result) = rx.try_recv() {
                let target = target.clone();
                self.pending_remove = None;
                match result {
                    Ok(id) => {
                        self.store.remove(&id);
                        self.notifier
                            .success(format!("{} deleted successfully", target.name));
                    }
                    Err(error) => match conflict::classify_failure(&error) {
                        FailureKind::NotFound => {
                            tracing::warn!("delete target {} vanished server-side", target.id);
                            self.notifier.error(format!("{} already deleted", target.name));
                        }
                        FailureKind::Other => {
                            tracing::warn!("delete failed for {}: {}", target.name, error);
                            self.notifier.error("There was an error deleting the person");
                        }
                    },
                }
            }
        }
    }

    fn spawn_create(&mut self, draft: PersonDraft) {
        tracing::info!("creating {}", draft.name);
        let client = PersonsApiClient::new(self.config.clone());
        let (tx, rx) = channel();
        let name = draft.name.clone();

        thread::spawn(move || {
            let result = client.create(&draft);
            let _ = tx.send(result);
        });

        self.pending_create = Some((name, rx));
    }

    fn spawn_update(&mut self, target: Person, draft: PersonDraft) {
        tracing::info!("updating number for {}", target.name);
        let client = PersonsApiClient::new(self.config.clone());
        let (tx, rx) = channel();
        let id = target.id.clone();

        thread::spawn(move || {
            let result = client.update(&id, &draft);
            let _ = tx.send(result);
        });

        self.pending_update = Some((target, rx));
    }

    fn spawn_remove(&mut self, target: Person) {
        tracing::info!("deleting {}", target.name);
        let client = PersonsApiClient::new(self.config.clone());
        let (tx, rx) = channel();
        let id = target.id.clone();

        thread::spawn(move || {
            let result = client.remove(&id);
            let _ = tx.send(result);
        });

        self.pending_remove = Some((target, rx));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
