use crate::config::Config;
use crate::models::{
    accuracy::AccuracySummary,
    error::AppError,
    forecast::{ForecastBundle, TimePoint},
    status::{DataStatus, HealthStatus},
    upload::{UploadForm, UploadOutcome},
};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, de::DeserializeOwned};

/// Shown when a rejected upload carries no usable `detail`
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Upload failed";

/// Forecast horizons offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizon {
    /// Next 24 hours
    Day,
    /// Next 48 hours
    #[default]
    TwoDays,
    /// Next 72 hours
    ThreeDays,
}

impl Horizon {
    /// Number of hours requested from the prediction endpoint.
    pub const fn hours(&self) -> u32 {
        match self {
            Self::Day => 24,
            Self::TwoDays => 48,
            Self::ThreeDays => 72,
        }
    }

    /// Returns a human-readable description of the horizon.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Day => "Next 24 hours",
            Self::TwoDays => "Next 48 hours",
            Self::ThreeDays => "Next 72 hours",
        }
    }

    /// All available horizons.
    pub const fn all() -> &'static [Self] {
        &[Self::Day, Self::TwoDays, Self::ThreeDays]
    }

    /// The horizon covering exactly `hours`, if one is offered
    pub fn from_hours(hours: u32) -> Option<Self> {
        Self::all().iter().copied().find(|h| h.hours() == hours)
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl std::str::FromStr for Horizon {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_end_matches('h')
            .parse::<u32>()
            .ok()
            .and_then(Self::from_hours)
            .ok_or_else(|| AppError::Config(format!("Invalid forecast horizon: {s}")))
    }
}

// API CONFIGURATION
/// Configuration for the forecast API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn data_status_url(&self) -> String {
        format!("{}/data/status", self.base_url)
    }

    /// Takes `area` and `hours` as query parameters
    pub fn latest_prediction_url(&self) -> String {
        format!("{}/predict/latest", self.base_url)
    }

    /// Takes `area` and `days` as query parameters
    pub fn accuracy_url(&self) -> String {
        format!("{}/predict/accuracy", self.base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/data/upload", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

/// API root on the page's own origin, so the dashboard works behind any host.
#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map_or_else(
            || Config::DEFAULT_BASE_URL.to_string(),
            |origin| format!("{origin}{}", Config::API_BASE_PATH),
        )
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    Config::DEFAULT_BASE_URL.to_string()
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self.base_url.unwrap_or_else(default_base_url);
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiPrediction {
    area: String,
    predictions: ApiSeries,
    generated_at: String,
}

#[derive(Deserialize, Debug)]
struct ApiSeries {
    #[serde(default)]
    generation: Vec<TimePoint>,
    #[serde(default)]
    price: Vec<TimePoint>,
}

impl From<ApiPrediction> for ForecastBundle {
    fn from(p: ApiPrediction) -> Self {
        Self::new(
            p.area,
            p.predictions.generation,
            p.predictions.price,
            p.generated_at,
        )
    }
}

// FastAPI reports errors as `{"detail": ...}`; request validation failures
// carry a list there instead of a string.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts the user-facing message from a rejected upload's body.
pub fn upload_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| detail.as_str().map(str::to_string))
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| UPLOAD_FALLBACK_MESSAGE.to_string())
}

/// Anything that can submit an upload form.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    async fn upload(&self, form: &UploadForm) -> Result<UploadOutcome, AppError>;
}

// FORECAST CLIENT
/// HTTP client for the forecast backend.
///
/// Every operation issues exactly one request and never retries.
#[derive(Debug, Clone)]
pub struct ForecastApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ForecastApiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn check_health(&self) -> Result<HealthStatus, AppError> {
        self.get_json(&self.config.health_url(), &[]).await
    }

    pub async fn get_data_status(&self) -> Result<DataStatus, AppError> {
        self.get_json(&self.config.data_status_url(), &[]).await
    }

    /// Fetches the latest forecast for `area` covering the next `hours`.
    pub async fn get_latest_prediction(
        &self,
        area: &str,
        hours: u32,
    ) -> Result<ForecastBundle, AppError> {
        let query = [("area", area.to_string()), ("hours", hours.to_string())];
        let prediction: ApiPrediction = self
            .get_json(&self.config.latest_prediction_url(), &query)
            .await?;
        Ok(prediction.into())
    }

    /// Fetches MAPE for `area` over the last `days`.
    pub async fn get_accuracy(&self, area: &str, days: u32) -> Result<AccuracySummary, AppError> {
        let query = [("area", area.to_string()), ("days", days.to_string())];
        self.get_json(&self.config.accuracy_url(), &query).await
    }

    /// Submits whichever files of `form` are non-empty as one multipart body.
    pub async fn upload_files(&self, form: &UploadForm) -> Result<UploadOutcome, AppError> {
        let url = self.config.upload_url();

        let body = form.files().fold(Form::new(), |body, (field, file)| {
            body.part(
                field,
                Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
            )
        });

        log::debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .multipart(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("POST {url} - upload rejected with {status}");
            return Err(AppError::Validation(upload_error_message(&body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to parse response: {e}")))
    }

    /// Executes a single GET and decodes the JSON body.
    ///
    /// `query` values are percent-encoded by reqwest.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        log::debug!("GET {url} {query:?}");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("GET {url} - {status}");
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        log::error!("Request failed: {error}");
        if error.is_timeout() {
            AppError::Transport(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Transport(format!("Request error: {error}"))
        } else {
            AppError::Transport(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            400..=499 => AppError::Transport(format!("Client error {status}: {body}")),
            500..=599 => AppError::Transport(format!("Server error {status}: {body}")),
            _ => AppError::Transport(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Uploader for ForecastApiClient {
    async fn upload(&self, form: &UploadForm) -> Result<UploadOutcome, AppError> {
        self.upload_files(form).await
    }
}

// CONVENIENCE FUNCTIONS
pub async fn fetch_health() -> Result<HealthStatus, AppError> {
    ForecastApiClient::new()?.check_health().await
}

pub async fn fetch_data_status() -> Result<DataStatus, AppError> {
    ForecastApiClient::new()?.get_data_status().await
}

pub async fn fetch_latest_prediction(area: String, hours: u32) -> Result<ForecastBundle, AppError> {
    ForecastApiClient::new()?
        .get_latest_prediction(&area, hours)
        .await
}

pub async fn fetch_accuracy(area: String, days: u32) -> Result<AccuracySummary, AppError> {
    ForecastApiClient::new()?.get_accuracy(&area, days).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig::builder()
            .base_url("http://example.test/api/")
            .build()
    }

    #[test]
    fn test_horizon_parsing() {
        assert_eq!("48".parse::<Horizon>().unwrap(), Horizon::TwoDays);
        assert_eq!("72h".parse::<Horizon>().unwrap(), Horizon::ThreeDays);
        assert!("36".parse::<Horizon>().is_err());
    }

    #[test]
    fn test_horizon_from_hours() {
        assert_eq!(Horizon::from_hours(24), Some(Horizon::Day));
        assert_eq!(Horizon::from_hours(72), Some(Horizon::ThreeDays));
        assert_eq!(Horizon::from_hours(0), None);
    }

    #[test]
    fn test_default_horizon_matches_default_hours() {
        assert_eq!(Horizon::default().hours(), Config::DEFAULT_HOURS);
        assert_eq!(Horizon::all().len(), 3);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = test_config();
        assert_eq!(config.health_url(), "http://example.test/api/health");
        assert_eq!(config.data_status_url(), "http://example.test/api/data/status");
        assert_eq!(config.upload_url(), "http://example.test/api/data/upload");
        assert_eq!(
            config.latest_prediction_url(),
            "http://example.test/api/predict/latest"
        );
        assert_eq!(
            config.accuracy_url(),
            "http://example.test/api/predict/accuracy"
        );
    }

    #[test]
    fn test_get_errors_are_transport_errors() {
        let client = ForecastApiClient::with_config(test_config()).unwrap();
        let err = client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(err.is_retryable());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_upload_error_message_uses_detail() {
        assert_eq!(upload_error_message(r#"{"detail": "bad csv"}"#), "bad csv");
    }

    #[test]
    fn test_upload_error_message_fallbacks() {
        assert_eq!(upload_error_message("not json"), UPLOAD_FALLBACK_MESSAGE);
        assert_eq!(upload_error_message("{}"), UPLOAD_FALLBACK_MESSAGE);
        assert_eq!(
            upload_error_message(r#"{"detail": [{"msg": "field required"}]}"#),
            UPLOAD_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_prediction_wire_format() {
        let json = r#"{
            "area": "tokyo",
            "predictions": {
                "generation": [{"timestamp": "2025-01-15T09:00:00", "value": 1200.5}],
                "price": [{"timestamp": "2025-01-15T09:00:00", "value": 12.3}]
            },
            "generated_at": "2025-01-15T08:59:00"
        }"#;

        let prediction: ApiPrediction = serde_json::from_str(json).unwrap();
        let bundle = ForecastBundle::from(prediction);
        assert_eq!(bundle.area, "tokyo");
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.price[0].value, 12.3);
    }
}
