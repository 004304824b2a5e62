//! egui Native Desktop App Module
//!
//! This module provides a native desktop phonebook application using
//! egui/eframe that synchronizes an in-memory contact list with a remote
//! REST backend.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (backend origin, API URLs)
//! - **`persons_api`** - HTTP client for the `/api/persons` collection
//! - **`store`** - In-memory copy of the remote person list
//! - **`conflict`** - Add routing and failure classification
//! - **`notify`** - Transient notification slot with a fixed TTL
//! - **`state`** - Orchestration state driving all operations
//! - **`views`** - egui view tree
//! - **`theme`** - Color palette and frame builders
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── persons_api.rs  - Persons API client
//! ├── store.rs        - Person store
//! ├── conflict.rs     - Conflict classification
//! ├── notify.rs       - Notifications
//! ├── state/          - Application state
//! ├── views/          - Views
//! └── theme/          - Theme
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod conflict;
pub mod notify;
pub mod persons_api;
pub mod state;
pub mod store;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use conflict::{AddAction, FailureKind};
pub use notify::{Notification, Notifier, Severity};
pub use persons_api::PersonsApiClient;
pub use state::AppState;
pub use store::PersonStore;
