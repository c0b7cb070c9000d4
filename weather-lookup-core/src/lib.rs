//! Core library for the `weather-lookup` widget.
//!
//! This crate defines:
//! - Configuration (provider endpoint, icon endpoint, credential, default city)
//! - The OpenWeather client and its error classification
//! - Display state and the render-surface contract
//! - `WeatherLookup`, the fetch-and-render component
//!
//! It is used by `weather-lookup-cli`, but any surface implementing
//! [`RenderSurface`] can drive it.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod render;

pub use config::LookupConfig;
pub use error::{LookupError, QueryError};
pub use lookup::WeatherLookup;
pub use model::{DisplayState, IconRef, WeatherQuery, WeatherResult, WeatherView};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use render::{RenderSurface, render_text};
