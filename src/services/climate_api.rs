use crate::config::Config;
use crate::models::{climate::ClimateAnalysis, error::AppError};
pub use crate::models::query::ClimateQuery;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

const ANALYSIS_PATH: &str = "climate-analysis";

// API CONFIGURATION
/// Configuration for the climate-analysis client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    api_version: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full analysis URL, including the query string.
    pub fn analysis_url(&self, query: &ClimateQuery) -> Result<Url, AppError> {
        let endpoint = format!(
            "{}/{}/{ANALYSIS_PATH}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        );
        Url::parse_with_params(&endpoint, query.query_pairs())
            .map_err(|e| AppError::RequestError(format!("Invalid URL '{endpoint}': {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_version: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the version path segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
            api_version: self
                .api_version
                .unwrap_or_else(|| Config::API_VERSION.to_string()),
        }
    }
}

// API ERROR BODY
/// Error payload returned by the backend on non-success statuses.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    detail: Value,
}

/// Extracts the backend's `detail` message. A missing, null, false, zero or empty
/// detail falls back to the status line.
fn server_detail(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|ErrorBody { detail }| match detail {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(detail) if detail.is_empty() => None,
            Value::String(detail) => Some(detail),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| status.to_string())
}

// CLIMATE CLIENT
/// HTTP client for the climate-analysis backend.
pub struct ClimateClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ClimateClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::RequestError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the climate analysis for one location and day of year.
    pub async fn fetch_analysis(&self, query: &ClimateQuery) -> Result<ClimateAnalysis, AppError> {
        let url = self.config.analysis_url(query)?;
        gloo::console::log!(&format!("Fetching climate data: {url}"));

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            gloo::console::error!(&format!("Server error response {status}: {body}"));
            return Err(AppError::ServerError(server_detail(status, &body)));
        }

        let analysis: ClimateAnalysis = response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))?;

        gloo::console::log!(&format!(
            "Climate data received: {} years analysed",
            analysis.analysis_period.total_years_analyzed
        ));
        Ok(analysis)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_builder() {
            AppError::RequestError(error.to_string())
        } else {
            gloo::console::error!(&format!("No response from server: {error}"));
            AppError::NoResponse
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches a climate analysis using default configuration.
pub async fn fetch_climate_analysis(query: &ClimateQuery) -> Result<ClimateAnalysis, AppError> {
    ClimateClient::new()?.fetch_analysis(query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        calendar::{DateSelection, Month},
        location::Coordinates,
        preferences::{AdditionalParameter, UserPreferences},
    };

    fn query() -> ClimateQuery {
        ClimateQuery::from_inputs(
            Coordinates::default(),
            DateSelection::default(),
            &UserPreferences::default(),
        )
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
        assert_eq!(config.api_version, "v1");
    }

    #[test]
    fn test_analysis_url_without_additional_parameters() {
        let config = ApiConfig::builder()
            .base_url("https://climate.example.com/")
            .build();

        let url = config.analysis_url(&query()).unwrap();
        assert_eq!(url.path(), "/v1/climate-analysis");
        assert_eq!(
            url.query(),
            Some("lat=-9.665&lon=-35.735&day=4&month=10")
        );
    }

    #[test]
    fn test_analysis_url_with_additional_parameters() {
        let mut prefs = UserPreferences::default();
        prefs.toggle_parameter(AdditionalParameter::CloudCover);
        prefs.toggle_parameter(AdditionalParameter::SolarRadiation);
        let query = ClimateQuery::from_inputs(
            Coordinates::new(48.5, 2.25),
            DateSelection::new(29, Month::February),
            &prefs,
        );

        let config = ApiConfig::builder()
            .base_url("https://climate.example.com")
            .api_version("v2")
            .build();
        let url = config.analysis_url(&query).unwrap();

        assert_eq!(url.path(), "/v2/climate-analysis");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("lat".to_string(), "48.5".to_string()),
                ("lon".to_string(), "2.25".to_string()),
                ("day".to_string(), "29".to_string()),
                ("month".to_string(), "2".to_string()),
                (
                    "additional_parameters".to_string(),
                    "solar_radiation,cloud_cover".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_invalid_base_url_is_request_error() {
        let config = ApiConfig::builder().base_url("not a url").build();
        let err = config.analysis_url(&query()).unwrap_err();
        assert!(matches!(err, AppError::RequestError(_)));
        assert!(err.to_string().starts_with("Request error: "));
    }

    #[test]
    fn test_server_detail_extraction() {
        let status = reqwest::StatusCode::NOT_FOUND;
        assert_eq!(
            server_detail(status, r#"{"detail": "No historical data found"}"#),
            "No historical data found"
        );
        assert_eq!(
            server_detail(status, r#"{"detail": [{"msg": "bad"}]}"#),
            r#"[{"msg":"bad"}]"#
        );
        assert_eq!(server_detail(status, "<html>"), "404 Not Found");
    }

    #[test]
    fn test_empty_server_detail_falls_back_to_status() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        for body in [
            r#"{"detail": null}"#,
            r#"{"detail": ""}"#,
            r#"{"detail": false}"#,
            r#"{"detail": 0}"#,
            r#"{"message": "boom"}"#,
        ] {
            assert_eq!(server_detail(status, body), "500 Internal Server Error", "{body}");
        }
    }

    #[test]
    fn test_client_creation() {
        let client = ClimateClient::new();
        assert!(client.is_ok());
    }
}
