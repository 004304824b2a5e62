//! XFBook - Main Library
//!
//! XFBook is a native desktop phonebook client built with Rust. It keeps an
//! in-memory contact list synchronized with a remote REST backend across
//! create, update and delete operations, including conflict handling
//! (duplicate names, stale deletes) and transient user-facing notifications.
//!
//! # Overview
//!
//! This library provides the core functionality for XFBook, including:
//! - A person store mirroring the remote `/api/persons` collection
//! - Add routing (create vs. overwrite) and failure classification
//! - Transient notifications with a fixed time-to-live
//! - Native desktop application via egui
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared across the client
//!   - Person wire types and draft validation
//!   - Error types
//!   - Configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Persons API client over reqwest
//!   - Store, conflict classification, notifications
//!   - Orchestration state and views
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfbook::egui_app::AppState;
//!
//! let mut state = AppState::new();
//! state.start_load();
//! ```
//!
//! # Thread Safety
//!
//! - Remote calls run on short-lived worker threads
//! - Completions are drained on the UI thread once per frame
//! - The store is only ever mutated from the UI thread
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - Custom error types in `shared::error`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
