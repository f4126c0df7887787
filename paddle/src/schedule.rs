//! Periodic catalog refresh.
//!
//! The catalog is loaded once at startup. When a refresh interval is
//! configured, the sheets are read again on every tick and the desk's
//! snapshot is swapped for the new catalog.

use paddle_axum::Desk;
use paddle_core::{
    loader::{SheetLayout, load_catalog},
    ports::SheetSource,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{Instrument as _, Level, event, span};

/// Configuration for refreshing the catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Refresher {
    /// How often to reload the catalog (if omitted or zero, never)
    #[serde(default, with = "humantime_serde::option")]
    pub refresh_every: Option<Duration>,
}

impl Refresher {
    /// The refresh interval, if refreshing is enabled.
    pub fn interval(&self) -> Option<Duration> {
        self.refresh_every.filter(|every| !every.is_zero())
    }

    /// Refresh the desk's catalog at the configured interval.
    ///
    /// Never returns. When refreshing is disabled it waits forever without
    /// touching the catalog. A failed refresh is logged and the previous
    /// catalog stays in service until the next tick.
    pub async fn run<S: SheetSource, T>(&self, source: &S, layout: &SheetLayout, desk: &Desk<T>) {
        let Some(every) = self.interval() else {
            return std::future::pending().await;
        };

        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick is immediate, and the catalog is fresh at startup
        interval.tick().await;

        loop {
            interval.tick().await;

            let span = span!(Level::INFO, "refreshing catalog");
            refresh(source, layout, desk).instrument(span).await;
        }
    }
}

/// Reload the catalog once, replacing the desk's snapshot on success.
///
/// Returns whether the snapshot was replaced.
pub async fn refresh<S: SheetSource, T>(source: &S, layout: &SheetLayout, desk: &Desk<T>) -> bool {
    match load_catalog(source, layout).await {
        Ok(catalog) => {
            desk.replace_catalog(catalog);
            true
        }
        Err(err) => {
            event!(
                Level::ERROR,
                err = err.to_string(),
                "refresh failed, keeping the previous catalog"
            );
            false
        }
    }
}
