//! REST API endpoints for lots.
//!
//! These endpoints populate the lot selector and, once a lot is selected,
//! its image, the prefilled bid and the prompt explaining it.

use crate::{ApiTransport, Desk};
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use paddle_core::models::LotId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Creates a router with lot-related endpoints.
pub fn router<T: ApiTransport>() -> ApiRouter<Desk<T>> {
    ApiRouter::new()
        .api_route_with("/", get(list_lots::<T>), |route| route.tag("lots"))
        .api_route_with("/{lot_id}", get(get_lot::<T>), |route| route.tag("lots"))
}

/// Path parameter for lot-specific endpoints.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The lot identifier, as listed
    lot_id: String,
}

/// An entry of the lot selector.
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct LotOption {
    /// The lot identifier
    pub id: LotId,
    /// A URL of an image of the lot
    pub image: Option<String>,
}

/// A selected lot, with the bid to prefill.
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct LotDetail {
    /// The lot identifier
    pub id: LotId,
    /// A URL of an image of the lot
    pub image: Option<String>,
    /// The highest recorded bid, 0 if there are none
    pub current_bid: u64,
    /// The minimum acceptable next bid
    pub suggested_bid: u64,
    /// Explains the suggested bid to the bidder
    pub prompt: String,
}

/// List the lots on offer, in listing order.
async fn list_lots<T: ApiTransport>(State(desk): State<Desk<T>>) -> Json<Vec<LotOption>> {
    let catalog = desk.catalog();
    Json(
        catalog
            .lots()
            .map(|lot| LotOption {
                id: lot.id,
                image: lot.image,
            })
            .collect(),
    )
}

/// Retrieve a lot and its suggested next bid.
///
/// # Returns
///
/// - `200 OK`: The lot
/// - `404 Not Found`: The lot is not on offer
async fn get_lot<T: ApiTransport>(
    State(desk): State<Desk<T>>,
    Path(Id { lot_id }): Path<Id>,
) -> Result<Json<LotDetail>, (StatusCode, String)> {
    let catalog = desk.catalog();
    let lot = catalog
        .lot(&lot_id)
        .ok_or((StatusCode::NOT_FOUND, format!("unknown lot {lot_id}")))?;
    let suggestion = desk.rules().suggest(lot.current_bid);

    Ok(Json(LotDetail {
        id: lot.id,
        image: lot.image,
        current_bid: lot.current_bid,
        suggested_bid: suggestion.amount,
        prompt: suggestion.prompt,
    }))
}
