//! Persons API Client
//!
//! HTTP client for the remote phonebook collection. All calls are blocking
//! and intended to run on worker threads spawned by the application state;
//! results travel back to the UI thread over completion channels.

use crate::egui_app::config::Config;
use crate::shared::error::ApiError;
use crate::shared::person::{Person, PersonDraft};
use reqwest::{Client, Response};
use serde::Deserialize;
use tokio::runtime::Runtime;

/// Structured error payload some backends attach to failure responses.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: String,
}

/// Client for the `/api/persons` collection.
pub struct PersonsApiClient {
    config: Config,
    client: Client,
}

impl PersonsApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch the whole collection.
    pub fn get_all(&self) -> Result<Vec<Person>, ApiError> {
        let url = self.config.persons_url();
        let rt = runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await?;
            let response = check_status(response).await?;
            Ok(response.json::<Vec<Person>>().await?)
        })
    }

    /// Create a new record; the server assigns the id.
    pub fn create(&self, draft: &PersonDraft) -> Result<Person, ApiError> {
        let url = self.config.persons_url();
        let rt = runtime()?;

        rt.block_on(async {
            let response = self.client.post(&url).json(draft).send().await?;
            let response = check_status(response).await?;
            Ok(response.json::<Person>().await?)
        })
    }

    /// Replace name and number of the record addressed by `id`.
    pub fn update(&self, id: &str, draft: &PersonDraft) -> Result<Person, ApiError> {
        let url = self.config.person_url(id);
        let rt = runtime()?;

        rt.block_on(async {
            let response = self.client.put(&url).json(draft).send().await?;
            let response = check_status(response).await?;
            Ok(response.json::<Person>().await?)
        })
    }

    /// Delete the record addressed by `id`, yielding the id back on success.
    pub fn remove(&self, id: &str) -> Result<String, ApiError> {
        let url = self.config.person_url(id);
        let rt = runtime()?;

        rt.block_on(async {
            let response = self.client.delete(&url).send().await?;
            check_status(response).await?;
            Ok(id.to_string())
        })
    }
}

fn runtime() -> Result<Runtime, ApiError> {
    Runtime::new().map_err(|e| ApiError::network(format!("failed to create runtime: {}", e)))
}

/// Turn a non-success response into `ApiError::Status`, keeping any
/// structured `{"error": ...}` payload the server attached.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let server_message = serde_json::from_str::<ServerErrorBody>(&body)
        .map(|b| b.error)
        .ok();
    Err(ApiError::status(status.as_u16(), server_message))
}
