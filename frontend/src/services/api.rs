use chrono::NaiveDate;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiErrorResponse, AvailabilityResponse, BlockedDatesQuery, BlockedDatesResponse,
    CreateSchedulingRequest, CreateUserRequest, TimeIntervalsRequest, UpdateProfileRequest,
};
use thiserror::Error;

use crate::services::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Message the API itself sent, if the failure came from the server
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|error| error.message)
            .ok()
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| format!("Server error {}", status));

        ApiError::Server { status, message }
    }
}

/// API client for the Ignite Call REST API
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Blocked week days and day numbers of a host for one month
    pub async fn get_blocked_dates(
        &self,
        username: &str,
        query: BlockedDatesQuery,
    ) -> Result<BlockedDatesResponse, ApiError> {
        let url = self.url(&format!("/users/{}/blocked-dates", username));
        let year = query.year.to_string();
        let month = query.month.to_string();

        let response = Request::get(&url)
            .query([("year", year.as_str()), ("month", month.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Possible and available hours of a host on one day
    pub async fn get_availability(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> Result<AvailabilityResponse, ApiError> {
        let url = self.url(&format!("/users/{}/availability", username));
        let date = date.format("%Y-%m-%d").to_string();

        let response = Request::get(&url)
            .query([("date", date.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Register a new user
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/users"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }

    /// Store the signed-in user's weekly availability
    pub async fn set_time_intervals(&self, request: &TimeIntervalsRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/users/time-intervals"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }

    /// Update the signed-in user's bio
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        let response = Request::put(&self.url("/users/profile"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }

    /// Book a slot with a host
    pub async fn create_scheduling(
        &self,
        username: &str,
        request: &CreateSchedulingRequest,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/users/{}/schedule", username));

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response_body(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_server_error_uses_api_message() {
        let error = ApiError::from_response_body(400, r#"{"message":"Username already taken."}"#);

        assert_eq!(error.server_message(), Some("Username already taken."));
        assert_eq!(error.to_string(), "Username already taken.");
    }

    #[wasm_bindgen_test]
    fn test_server_error_falls_back_to_body_and_status() {
        assert_eq!(
            ApiError::from_response_body(502, "Bad Gateway"),
            ApiError::Server { status: 502, message: "Bad Gateway".to_string() }
        );
        assert_eq!(
            ApiError::from_response_body(500, "  "),
            ApiError::Server { status: 500, message: "Server error 500".to_string() }
        );
    }

    #[wasm_bindgen_test]
    fn test_network_error_has_no_server_message() {
        assert_eq!(ApiError::Network("offline".to_string()).server_message(), None);
    }

    #[wasm_bindgen_test]
    fn test_urls_are_joined_to_base() {
        let client = ApiClient::with_base_url("http://localhost:3333/api".to_string());
        assert_eq!(client.url("/users"), "http://localhost:3333/api/users");
    }
}
