#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the paddle-google crate.
//! [paddle_core]: https://docs.rs/paddle_core/latest/paddle_core/index.html
//! [paddle_google]: https://docs.rs/paddle_google/latest/paddle_google/index.html
#![doc = include_str!("../README.md")]

pub mod config;
mod forms;
mod sheets;

pub use forms::GoogleForm;
pub use sheets::{GvizSheets, parse_gviz};

use config::GoogleConfig;

/// The ways in which talking to Google can fail.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// The request could not be sent, or the response had an error status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The body was not wrapped in a visualization query callback
    #[error("response is not a visualization query response")]
    Envelope,
    /// The wrapped body was not the expected JSON
    #[error("malformed query response: {0}")]
    Json(#[from] serde_json::Error),
    /// The query endpoint answered with an error status
    #[error("query failed: {0}")]
    Query(String),
    /// An endpoint URL could not be constructed from the configuration
    #[error("invalid endpoint url {url}: {reason}")]
    Url {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl GoogleConfig {
    /// Build the HTTP client shared by the sheet source and the form transport.
    pub fn client(&self) -> Result<reqwest::Client, GoogleError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}
