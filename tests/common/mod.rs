//! Shared helpers for integration tests
//!
//! Builds client configurations pointed at a mock backend and pumps
//! completion channels until pending operations settle.

#![allow(dead_code)]

use std::thread;
use std::time::Duration;

use mockito::ServerGuard;
use xfbook::egui_app::{AppState, Config};
use xfbook::shared::config::AppConfig;
use xfbook::shared::person::Person;

/// Client configuration pointed at the mock backend.
pub fn config_for(server: &ServerGuard) -> Config {
    Config::with_builder(AppConfig::builder().backend_url(server.url()))
        .expect("mock server URL is a valid origin")
}

/// Application state wired to the mock backend.
pub fn state_for(server: &ServerGuard) -> AppState {
    AppState::with_config(config_for(server))
}

pub fn person(id: &str, name: &str, number: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
    }
}

/// Serialize records the way the backend sends them.
pub fn persons_json(persons: &[Person]) -> String {
    serde_json::to_string(persons).expect("persons serialize")
}

/// Pump completion channels until nothing is pending.
pub fn settle(state: &mut AppState) {
    for _ in 0..200 {
        state.check_pending_operations();
        if !state.is_busy() && !state.loading {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("pending operation did not settle");
}
