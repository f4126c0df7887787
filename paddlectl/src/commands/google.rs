use clap::{Args, ValueEnum};
use paddle_google::config::{DeliveryMode, GoogleConfig};
use std::time::Duration;

// Where the catalog lives and where bids go. The environment variables match
// the server's, so one environment serves both.
#[derive(Args)]
pub struct GoogleArgs {
    /// The auction spreadsheet id
    #[arg(long, env = "APP_GOOGLE__SPREADSHEET_ID")]
    pub spreadsheet_id: String,

    /// The auction form id (only needed to submit)
    #[arg(long, env = "APP_GOOGLE__FORM_ID", default_value = "")]
    pub form_id: String,

    /// The origin serving both sheets and forms
    #[arg(long, env = "APP_GOOGLE__BASE_URL", default_value = "https://docs.google.com")]
    pub base_url: String,

    /// Request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl GoogleArgs {
    pub fn config(&self, delivery: DeliveryArg) -> GoogleConfig {
        GoogleConfig {
            spreadsheet_id: self.spreadsheet_id.clone(),
            form_id: self.form_id.clone(),
            delivery: delivery.into(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        }
    }
}

// The server reads the delivery mode from its config; here it is a flag
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum DeliveryArg {
    Post,
    Link,
}

impl From<DeliveryArg> for DeliveryMode {
    fn from(value: DeliveryArg) -> Self {
        match value {
            DeliveryArg::Post => DeliveryMode::Post,
            DeliveryArg::Link => DeliveryMode::Link,
        }
    }
}
