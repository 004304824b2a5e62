//! Shared Module
//!
//! This module contains the wire types and support types that the client
//! exchanges with the phonebook backend. Everything here is designed for
//! serialization and transmission over HTTP.

/// Person wire types for the `/api/persons` collection
pub mod person;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ApiError, ValidationError};
pub use person::{Person, PersonDraft};
