use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

use crate::{LookupConfig, LookupError, WeatherQuery, WeatherResult};

use super::WeatherProvider;

const UNITS: &str = "metric";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &LookupConfig) -> anyhow::Result<Self> {
        let api_key = config.api_key()?.to_owned();
        let base_url = Url::parse(&config.provider_base_url).with_context(|| {
            format!("Invalid provider base URL: {}", config.provider_base_url)
        })?;

        Ok(Self {
            api_key,
            base_url,
            http: Client::new(),
        })
    }

    /// `{base}?q={city}&appid={key}&units=metric`, form-encoded.
    pub fn request_url(&self, query: &WeatherQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query.city())
            .append_pair("appid", &self.api_key)
            .append_pair("units", UNITS);
        url
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self, query), fields(city = %query.city()))]
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError> {
        debug!(endpoint = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(self.request_url(query))
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        classify_status(status, query)?;

        let body = res.text().await.map_err(transport_error)?;

        serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

fn classify_status(status: StatusCode, query: &WeatherQuery) -> Result<(), LookupError> {
    match status {
        StatusCode::UNAUTHORIZED => Err(LookupError::Auth),
        StatusCode::NOT_FOUND => Err(LookupError::NotFound { city: query.city().to_string() }),
        s if !s.is_success() => Err(LookupError::Provider { status_text: status_text(s) }),
        _ => Ok(()),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

// The URL carries the API key, so it is stripped before the message is shown.
fn transport_error(err: reqwest::Error) -> LookupError {
    LookupError::Transport(err.without_url().to_string())
}
