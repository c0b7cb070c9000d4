use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{
    LookupConfig,
    error::QueryError,
    model::{DisplayState, WeatherQuery, WeatherView},
    provider::WeatherProvider,
    render::RenderSurface,
};

/// Fetch-and-render component bound to one display surface.
///
/// Overlapping searches are allowed. Each one takes a ticket from a
/// monotonically increasing counter, and only the holder of the latest ticket
/// may render its outcome; superseded responses are dropped.
#[derive(Debug)]
pub struct WeatherLookup<P, S> {
    provider: P,
    icon_base_url: String,
    default_city: String,
    latest: AtomicU64,
    surface: Mutex<S>,
}

impl<P, S> WeatherLookup<P, S>
where
    P: WeatherProvider,
    S: RenderSurface,
{
    pub fn new(provider: P, config: &LookupConfig, surface: S) -> Self {
        Self {
            provider,
            icon_base_url: config.icon_base_url.clone(),
            default_city: config.default_city.clone(),
            latest: AtomicU64::new(0),
            surface: Mutex::new(surface),
        }
    }

    /// Startup trigger: look up the configured default city.
    pub async fn load_default(&self) -> Result<Option<DisplayState>, QueryError> {
        self.search(&self.default_city).await
    }

    /// Look up `input` and render the outcome.
    ///
    /// Returns `Ok(None)` if a newer search started before this one resolved.
    /// Blank input is rejected up front and never reaches the provider.
    pub async fn search(&self, input: &str) -> Result<Option<DisplayState>, QueryError> {
        let query = WeatherQuery::new(input)?;
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        self.surface.lock().await.render(&DisplayState::Hidden);

        let outcome = self
            .provider
            .current(&query)
            .await
            .and_then(|result| WeatherView::from_result(&result, &self.icon_base_url));

        let state = match outcome {
            Ok(view) => DisplayState::Showing(view),
            Err(err) => {
                error!(city = %query.city(), error = %err, "Error fetching weather data");
                DisplayState::ShowingError(err.to_string())
            }
        };

        let mut surface = self.surface.lock().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(city = %query.city(), ticket, "discarding superseded response");
            return Ok(None);
        }
        surface.render(&state);

        Ok(Some(state))
    }

    pub fn into_surface(self) -> S {
        self.surface.into_inner()
    }
}
