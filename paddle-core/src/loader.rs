//! The three sheets are read in order: listings, registry, board. A row
//! missing a required cell is skipped; skips are logged at DEBUG so that a
//! misconfigured column can be diagnosed without failing the load.

use crate::{models::Catalog, ports::SheetSource};
use tracing::{Level, event};

/// Where a two-column dataset lives in the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetColumns {
    /// The sheet (tab) name
    pub sheet: String,
    /// Zero-based column of the key (lot identifier or bidder name)
    pub key: usize,
    /// Zero-based column of the value (image URL, bidding number or amount)
    pub value: usize,
}

impl SheetColumns {
    fn new(sheet: &str, key: usize, value: usize) -> Self {
        Self {
            sheet: sheet.to_owned(),
            key,
            value,
        }
    }
}

/// The layout of the auction spreadsheet.
///
/// # Examples
///
/// ```
/// use paddle_core::loader::SheetLayout;
///
/// let layout = SheetLayout::default();
/// assert_eq!(layout.registry.sheet, "Bidding Number");
/// assert_eq!(layout.registry.value, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetLayout {
    /// Lot identifiers and image URLs
    #[cfg_attr(feature = "serde", serde(default = "default_listings"))]
    pub listings: SheetColumns,
    /// Bidder names and bidding numbers
    #[cfg_attr(feature = "serde", serde(default = "default_registry"))]
    pub registry: SheetColumns,
    /// Lot identifiers and current high bids
    #[cfg_attr(feature = "serde", serde(default = "default_board"))]
    pub board: SheetColumns,
}

fn default_listings() -> SheetColumns {
    SheetColumns::new("Lot Listings", 0, 1)
}

fn default_registry() -> SheetColumns {
    SheetColumns::new("Bidding Number", 0, 3)
}

fn default_board() -> SheetColumns {
    SheetColumns::new("Bid Board", 0, 1)
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            listings: default_listings(),
            registry: default_registry(),
            board: default_board(),
        }
    }
}

fn skipped(columns: &SheetColumns, row: usize, missing: &str) {
    event!(
        Level::DEBUG,
        sheet = columns.sheet.as_str(),
        row,
        "skipping row without {missing}"
    );
}

/// Load the catalog from the spreadsheet.
///
/// The sheets are fetched one after the other. Any fetch failure aborts the
/// load; there is no retry.
pub async fn load_catalog<S: SheetSource>(
    source: &S,
    layout: &SheetLayout,
) -> Result<Catalog, S::Error> {
    let mut catalog = Catalog::default();

    let columns = &layout.listings;
    for (index, row) in source.fetch_rows(&columns.sheet).await?.iter().enumerate() {
        match row.text(columns.key) {
            Some(lot) => {
                catalog.list_lot(lot, row.text(columns.value));
            }
            None => skipped(columns, index, "a lot identifier"),
        }
    }

    let columns = &layout.registry;
    for (index, row) in source.fetch_rows(&columns.sheet).await?.iter().enumerate() {
        match (row.text(columns.key), row.text(columns.value)) {
            (Some(name), Some(number)) => {
                catalog.register_bidder(name, number);
            }
            (None, _) => skipped(columns, index, "a bidder name"),
            (_, None) => skipped(columns, index, "a bidding number"),
        }
    }

    let columns = &layout.board;
    for (index, row) in source.fetch_rows(&columns.sheet).await?.iter().enumerate() {
        let Some(lot) = row.text(columns.key) else {
            skipped(columns, index, "a lot identifier");
            continue;
        };
        // an absent or unreadable amount means no bids yet
        let amount = row.amount(columns.value);
        if amount.is_none() && row.get(columns.value).is_some() {
            event!(
                Level::DEBUG,
                sheet = columns.sheet.as_str(),
                row = index,
                "unreadable amount for {lot}, recording no bids"
            );
        }
        catalog.record_bid(lot, amount.unwrap_or_default());
    }

    let (lots, bids, bidders) = catalog.counts();
    event!(Level::INFO, lots, bids, bidders, "catalog loaded");

    Ok(catalog)
}
