use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiErrorResponse, CreateJournalRequest, CreatePlantRequest, GardenSettings, JournalEntry,
    JournalListResponse, Plant, PlantListResponse, PlantState, UpdatePlantStateRequest,
};
use std::fmt;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Backend origin, set at build time with `GARDEN_API_URL`
pub fn api_base_url() -> &'static str {
    base_url_or_default(option_env!("GARDEN_API_URL"))
}

fn base_url_or_default(configured: Option<&'static str>) -> &'static str {
    match configured.map(|url| url.trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BASE_URL,
    }
}

/// A failed remote operation. `message` is what the user sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// API client for the garden table service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the configured backend
    pub fn new() -> Self {
        Self {
            base_url: api_base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Limits the backend enforces
    pub async fn get_settings(&self) -> Result<GardenSettings, ApiError> {
        let url = format!("{}/api/settings", self.base_url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    /// All plants, newest first
    pub async fn list_plants(&self) -> Result<Vec<Plant>, ApiError> {
        let url = format!("{}/api/plants", self.base_url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let data: PlantListResponse = read_json(response).await?;
        Ok(data.plants)
    }

    /// Most recent journal entries, newest first
    pub async fn list_journals(&self, limit: u32) -> Result<Vec<JournalEntry>, ApiError> {
        let url = format!("{}/api/journals?limit={}", self.base_url, limit);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let data: JournalListResponse = read_json(response).await?;
        Ok(data.journals)
    }

    pub async fn get_journal(&self, journal_id: &str) -> Result<JournalEntry, ApiError> {
        let url = format!(
            "{}/api/journals/{}",
            self.base_url,
            String::from(js_sys::encode_uri_component(journal_id))
        );
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    /// Save a journal entry; the returned entry carries the new ID
    pub async fn create_journal(&self, content: String) -> Result<JournalEntry, ApiError> {
        let url = format!("{}/api/journals", self.base_url);
        let response = Request::post(&url)
            .json(&CreateJournalRequest { content })
            .map_err(serialize_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Plant a new seed
    pub async fn create_plant(&self, label: String) -> Result<Plant, ApiError> {
        let url = format!("{}/api/plants", self.base_url);
        let response = Request::post(&url)
            .json(&CreatePlantRequest { label })
            .map_err(serialize_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    pub async fn update_plant_state(&self, plant_id: &str, state: PlantState) -> Result<Plant, ApiError> {
        let url = format!(
            "{}/api/plants/{}",
            self.base_url,
            String::from(js_sys::encode_uri_component(plant_id))
        );
        let response = Request::patch(&url)
            .json(&UpdatePlantStateRequest { state })
            .map_err(serialize_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a success body, or turn an error response into its message
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(format!("Failed to parse response: {}", e)));
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::new(error_message(status, &text)))
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(error) => error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("Request failed with status {}", status),
    }
}

fn network_error(e: gloo::net::Error) -> ApiError {
    ApiError::new(format!("Network error: {}", e))
}

fn serialize_error(e: gloo::net::Error) -> ApiError {
    ApiError::new(format!("Failed to serialize request: {}", e))
}
