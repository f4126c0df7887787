//! Configuration types for the Google adapters.
//!
//! This module provides the identifiers of the spreadsheet and the form, the
//! layout of the spreadsheet and the form's entry keys.

use paddle_core::loader::SheetLayout;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How an accepted bid reaches the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Post the bid to the form in the background
    #[default]
    Post,
    /// Hand the bidder a prefilled form link to open and confirm
    Link,
}

/// The form's entry keys for each payload value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    /// Key of the lot identifier
    pub lot: String,
    /// Key of the bidder name
    pub name: String,
    /// Key of the bidding number
    pub number: String,
    /// Key of the amount
    pub amount: String,
}

impl FormFields {
    /// The keys in payload order.
    pub fn keys(&self) -> [&str; 4] {
        [
            self.lot.as_str(),
            self.name.as_str(),
            self.number.as_str(),
            self.amount.as_str(),
        ]
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            lot: "entry.1393425854".to_owned(),
            name: "entry.2014194198".to_owned(),
            number: "entry.938652901".to_owned(),
            amount: "entry.849028228".to_owned(),
        }
    }
}

/// Configuration for the Google adapters.
///
/// # Examples
///
/// ```
/// use paddle_google::config::{DeliveryMode, GoogleConfig};
///
/// let config = GoogleConfig {
///     spreadsheet_id: "1aBcD-spreadsheet".to_owned(),
///     form_id: "1FAIpQL-form".to_owned(),
///     delivery: DeliveryMode::Link,
///     ..Default::default()
/// };
/// assert_eq!(config.layout.listings.sheet, "Lot Listings");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleConfig {
    /// The spreadsheet id, as found in its URL after `/spreadsheets/d/`
    #[serde(default)]
    pub spreadsheet_id: String,

    /// The published form id, as found in its URL after `/forms/d/e/`
    #[serde(default)]
    pub form_id: String,

    /// How accepted bids are delivered
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// The form's entry keys
    #[serde(default)]
    pub fields: FormFields,

    /// Where each dataset lives in the spreadsheet
    #[serde(default)]
    pub layout: SheetLayout,

    /// Timeout applied to every request
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// The origin serving both sheets and forms
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_base_url() -> String {
    "https://docs.google.com".to_owned()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            form_id: String::new(),
            delivery: DeliveryMode::default(),
            fields: FormFields::default(),
            layout: SheetLayout::default(),
            timeout: default_timeout(),
            base_url: default_base_url(),
        }
    }
}
