use async_trait::async_trait;
use std::fmt::Debug;

use crate::{LookupError, WeatherQuery, WeatherResult};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current weather for the query. Issues exactly one request.
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError>;
}
