#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the paddle-axum crate.
//! [paddle_core]: https://docs.rs/paddle_core/latest/paddle_core/index.html
//! [paddle_axum]: https://docs.rs/paddle_axum/latest/paddle_axum/index.html
#![doc = include_str!("../README.md")]

mod bid_routes;
mod form;
mod lot_routes;

pub use bid_routes::{Acknowledgement, Rejection};
pub use lot_routes::{LotDetail, LotOption};

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{
    Extension, Json,
    http::{Method, header},
};
use paddle_core::{
    models::Catalog,
    ports::SubmissionTransport,
    rules::{Rules, SubmissionGate},
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tower_http::cors::{Any, CorsLayer};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies them upfront for
/// the submission transport.
pub trait ApiTransport: SubmissionTransport + Send + Sync + 'static {}

impl<T: SubmissionTransport + Send + Sync + 'static> ApiTransport for T {}

/// The shared state of the bid desk.
///
/// The catalog is an immutable snapshot. Refreshing it swaps the whole
/// snapshot, so a request always sees one consistent catalog. Clones share
/// the snapshot, the transport and the submission gate.
pub struct Desk<T> {
    catalog: Arc<RwLock<Arc<Catalog>>>,
    rules: Arc<Rules>,
    transport: Arc<T>,
    gate: SubmissionGate,
}

impl<T> Clone for Desk<T> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            rules: self.rules.clone(),
            transport: self.transport.clone(),
            gate: self.gate.clone(),
        }
    }
}

impl<T> Desk<T> {
    /// Create a desk serving the given catalog.
    pub fn new(catalog: Catalog, rules: Rules, transport: T) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            rules: Arc::new(rules),
            transport: Arc::new(transport),
            gate: SubmissionGate::default(),
        }
    }

    /// The current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the catalog snapshot. Requests in flight keep the old one.
    pub fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
    }

    /// The auction rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The submission transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The gate admitting one submission at a time.
    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }
}

/// Construct the full router for the desk with the given config
pub fn router<T: ApiTransport>(desk: Desk<T>, config: AxumConfig) -> axum::Router {
    let mut api = OpenApi::default();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    ApiRouter::new()
        .route("/", get(form::serve_form))
        .api_route("/health", get(health_check))
        .nest("/lots", lot_routes::router())
        .nest("/bids", bid_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        .layer(Extension(Arc::new(config)))
        .layer(cors)
        .with_state(desk)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiTransport>(
    config: AxumConfig,
    desk: Desk<T>,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(desk, config);
    axum::serve(listener, service).await
}
