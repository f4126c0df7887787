//! Application configuration management.
//!
//! Configuration is merged from default values, an optional configuration
//! file and environment variables, in increasing order of precedence.

use crate::{Cli, schedule::Refresher};
use paddle_axum::config::AxumConfig;
use paddle_core::rules::Rules;
use paddle_google::config::GoogleConfig;
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, notice delay)
    #[serde(default)]
    pub server: AxumConfig,

    /// Where the catalog is read from and bids are delivered to
    #[serde(default)]
    pub google: GoogleConfig,

    /// Bid derivation and validation rules
    #[serde(default)]
    pub rules: Rules,

    /// Catalog refresh configuration
    #[serde(default)]
    pub schedule: Refresher,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Point at the auction spreadsheet and form
    /// export APP_GOOGLE__SPREADSHEET_ID="<spreadsheet id>"
    /// export APP_GOOGLE__FORM_ID="<form id>"
    ///
    /// # Reload the catalog every minute
    /// export APP_SCHEDULE__REFRESH_EVERY="1m"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // This maps APP_GOOGLE__FORM_ID to google.form_id
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }

    /// Fail unless the spreadsheet and the form are both named.
    pub fn ensure_endpoints(&self) -> anyhow::Result<()> {
        if self.google.spreadsheet_id.trim().is_empty() {
            anyhow::bail!("google.spreadsheet_id is not set (try APP_GOOGLE__SPREADSHEET_ID)");
        }
        if self.google.form_id.trim().is_empty() {
            anyhow::bail!("google.form_id is not set (try APP_GOOGLE__FORM_ID)");
        }
        Ok(())
    }
}
