use thiserror::Error;

/// Failures of a single lookup. The `Display` text is what the error panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// HTTP 401 from the provider.
    #[error("Invalid API Key. Please ensure your key is correct and has been activated.")]
    Auth,

    /// HTTP 404 from the provider.
    #[error("City '{city}' not found. Please check the spelling.")]
    NotFound { city: String },

    /// Any other non-2xx status.
    #[error("An error occurred: {status_text}")]
    Provider { status_text: String },

    /// A 2xx response whose body is not the expected shape.
    #[error("Failed to parse weather data: {0}")]
    Parse(String),

    /// The request never produced a response.
    #[error("An error occurred: {0}")]
    Transport(String),
}

/// Input rejected before any request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a city name.")]
    EmptyCity,
}
