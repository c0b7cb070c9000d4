use serde::Deserialize;

use crate::error::{LookupError, QueryError};

const MPS_TO_KMH: f64 = 3.6;

/// A city name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn new(input: &str) -> Result<Self, QueryError> {
        let city = input.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current weather as returned by the provider (metric units).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResult {
    pub name: String,
    pub main: MainReading,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReading {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    /// Metres per second.
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef {
    pub src: String,
    pub alt: String,
}

/// Display-ready fields of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    pub city_name: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
    pub icon: IconRef,
}

impl WeatherView {
    pub fn from_result(result: &WeatherResult, icon_base_url: &str) -> Result<Self, LookupError> {
        let condition = result
            .weather
            .first()
            .ok_or_else(|| LookupError::Parse("response contained no weather conditions".into()))?;

        Ok(Self {
            city_name: result.name.clone(),
            temperature: format_temperature(result.main.temp),
            description: condition.description.clone(),
            humidity: format!("{}%", result.main.humidity),
            wind_speed: format_wind_speed(result.wind.speed),
            icon: IconRef {
                src: icon_url(icon_base_url, &condition.icon),
                alt: condition.description.clone(),
            },
        })
    }
}

/// What the display surface shows. Result and error are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Hidden,
    Showing(WeatherView),
    ShowingError(String),
}

/// Rounds half-way values toward positive infinity, so `-2.5` shows as `-2°C`.
fn format_temperature(celsius: f64) -> String {
    format!("{}°C", (celsius + 0.5).floor() as i64)
}

fn format_wind_speed(mps: f64) -> String {
    format!("{:.1} km/h", mps * MPS_TO_KMH)
}

fn icon_url(base: &str, code: &str) -> String {
    format!("{}/{code}@2x.png", base.trim_end_matches('/'))
}
