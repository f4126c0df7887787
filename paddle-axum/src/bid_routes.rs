//! REST API endpoints for bids.
//!
//! A bid is validated against the current catalog snapshot. An accepted bid
//! is handed to the submission transport, one at a time; nothing is retried
//! and the catalog is not updated by a submission.

use crate::{ApiTransport, Desk, config::AxumConfig};
use aide::axum::{ApiRouter, routing::post};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use paddle_core::{
    models::{BidProposal, FieldError, LotId, ValidationReport},
    ports::{Delivery, SubmissionTransport as _},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{Level, event};
use uuid::Uuid;

/// Creates a router with bid-related endpoints.
pub fn router<T: ApiTransport>() -> ApiRouter<Desk<T>> {
    ApiRouter::new()
        .api_route_with("/", post(submit_bid::<T>), |route| route.tag("bids"))
        .api_route_with("/check", post(check_bid::<T>), |route| route.tag("bids"))
}

/// Confirms a submitted bid.
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct Acknowledgement {
    /// Identifies this submission in the server logs
    pub receipt: Uuid,
    /// When the bid was handed to the form
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    /// The lot bid on
    pub lot: LotId,
    /// The amount bid
    pub amount: u64,
    /// A notice to show the bidder
    pub message: String,
    /// If present, the bidder must open this URL to complete the submission
    pub redirect: Option<String>,
    /// How long to show the notice before dismissing it, in milliseconds
    pub dismiss_after_ms: u64,
}

/// Explains why a bid was not submitted.
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct Rejection {
    /// A notice to show the bidder
    pub message: String,
    /// Errors to show next to the offending fields
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl Rejection {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            errors: Vec::new(),
        }
    }
}

/// Unwrap a proposal body, answering an unreadable one with a [`Rejection`].
fn read_proposal(
    body: Result<Json<BidProposal>, JsonRejection>,
) -> Result<BidProposal, (StatusCode, Json<Rejection>)> {
    body.map(|Json(proposal)| proposal).map_err(|rejection| {
        event!(Level::DEBUG, err = rejection.body_text(), "unreadable bid");
        (
            rejection.status(),
            Json(Rejection::new(
                "The bid could not be read. Please reload the page and try again.",
            )),
        )
    })
}

/// Validate a bid without submitting it.
///
/// Answers `200 OK` for any readable proposal; the report tells whether the
/// bid is valid. An unreadable body gets a 4xx [`Rejection`].
async fn check_bid<T: ApiTransport>(
    State(desk): State<Desk<T>>,
    body: Result<Json<BidProposal>, JsonRejection>,
) -> Result<Json<ValidationReport>, (StatusCode, Json<Rejection>)> {
    let proposal = read_proposal(body)?;
    let catalog = desk.catalog();
    Ok(Json(desk.rules().validate(&catalog, &proposal)))
}

/// Validate a bid and submit it.
///
/// # Returns
///
/// - `200 OK`: The bid was handed to the form
/// - `400 Bad Request`, `415 Unsupported Media Type`: The body is not a proposal
/// - `409 Conflict`: Another bid is being submitted; try again shortly
/// - `422 Unprocessable Entity`: The bid is invalid; see the errors
/// - `502 Bad Gateway`: The form could not be reached
async fn submit_bid<T: ApiTransport>(
    State(desk): State<Desk<T>>,
    Extension(config): Extension<Arc<AxumConfig>>,
    body: Result<Json<BidProposal>, JsonRejection>,
) -> Result<Json<Acknowledgement>, (StatusCode, Json<Rejection>)> {
    let proposal = read_proposal(body)?;
    let catalog = desk.catalog();
    let payload = desk.rules().accept(&catalog, &proposal).map_err(|report| {
        event!(Level::DEBUG, errors = report.errors.len(), "bid rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Rejection {
                message: "The bid was not submitted. Please correct the errors and try again."
                    .to_owned(),
                errors: report.errors,
            }),
        )
    })?;

    let Some(_pass) = desk.gate().try_enter() else {
        return Err((
            StatusCode::CONFLICT,
            Json(Rejection::new(
                "A bid is already being submitted. Please wait a moment and try again.",
            )),
        ));
    };

    let receipt = Uuid::new_v4();
    let delivery = desk.transport().deliver(&payload).await.map_err(|err| {
        event!(Level::ERROR, %receipt, err = err.to_string());
        (
            StatusCode::BAD_GATEWAY,
            Json(Rejection::new(
                "The bid could not be submitted. Please try again.",
            )),
        )
    })?;

    event!(
        Level::INFO,
        %receipt,
        lot = &*payload.lot,
        amount = payload.amount,
        "bid submitted"
    );

    let (message, redirect) = match delivery {
        Delivery::Accepted => ("Bid submitted! Thank you for your support.", None),
        Delivery::Redirect { url } => (
            "Almost done! Confirm your bid on the form that has opened.",
            Some(url),
        ),
    };

    Ok(Json(Acknowledgement {
        receipt,
        submitted_at: OffsetDateTime::now_utc(),
        lot: payload.lot,
        amount: payload.amount,
        message: message.to_owned(),
        redirect,
        dismiss_after_ms: u64::try_from(config.acknowledgement.as_millis()).unwrap_or(u64::MAX),
    }))
}
