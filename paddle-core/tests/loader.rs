use paddle_core::{
    loader::{SheetLayout, load_catalog},
    models::{Cell, Row},
    ports::SheetSource,
    rules::Rules,
};
use rstest::*;
use std::{collections::HashMap, sync::Mutex};

/// A spreadsheet held in memory, which records the order sheets are read in.
#[derive(Default)]
struct MemorySheets {
    sheets: HashMap<String, Vec<Row>>,
    reads: Mutex<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
#[error("no such sheet: {0}")]
struct MissingSheet(String);

impl SheetSource for MemorySheets {
    type Error = MissingSheet;

    async fn fetch_rows(&self, sheet: &str) -> Result<Vec<Row>, Self::Error> {
        self.reads.lock().unwrap().push(sheet.to_owned());
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| MissingSheet(sheet.to_owned()))
    }
}

fn text(value: &str) -> Option<Cell> {
    Some(Cell::Text(value.to_owned()))
}

fn number(value: f64) -> Option<Cell> {
    Some(Cell::Number(value))
}

#[fixture]
fn sheets() -> MemorySheets {
    let mut sheets = MemorySheets::default();
    sheets.sheets.insert(
        "Lot Listings".into(),
        vec![
            Row(vec![text("Lot 1"), text("https://img/1.jpg")]),
            Row(vec![text("Lot 2")]),
            Row(vec![None, text("https://img/orphan.jpg")]),
            Row(vec![text("   "), text("https://img/blank.jpg")]),
            Row(vec![text("Lot 3"), None]),
        ],
    );
    sheets.sheets.insert(
        "Bidding Number".into(),
        vec![
            Row(vec![text("Ada Lovelace"), text("ada@example.org"), None, number(17.0)]),
            Row(vec![text("Grace Hopper"), None, None, text("42")]),
            Row(vec![text("No Number"), text("x@example.org")]),
            Row(vec![None, None, None, number(99.0)]),
        ],
    );
    sheets.sheets.insert(
        "Bid Board".into(),
        vec![
            Row(vec![text("Lot 1"), number(650.0)]),
            Row(vec![text("Lot 3")]),
            Row(vec![text("Lot 2"), text("pending")]),
            Row(vec![text("Lot 7"), number(900.0)]),
            Row(vec![None, number(100.0)]),
        ],
    );
    sheets
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_reads_sheets_in_order(sheets: MemorySheets) {
    load_catalog(&sheets, &SheetLayout::default()).await.unwrap();
    assert_eq!(
        *sheets.reads.lock().unwrap(),
        vec!["Lot Listings", "Bidding Number", "Bid Board"]
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_listings_skip_rows_without_lot(sheets: MemorySheets) {
    let catalog = load_catalog(&sheets, &SheetLayout::default()).await.unwrap();
    let lots: Vec<_> = catalog.lots().collect();

    assert_eq!(lots.len(), 3);
    assert_eq!(&*lots[0].id, "Lot 1");
    assert_eq!(lots[0].image.as_deref(), Some("https://img/1.jpg"));
    assert_eq!(lots[0].current_bid, 650);
    assert_eq!(&*lots[1].id, "Lot 2");
    assert_eq!(lots[1].image, None);
    assert_eq!(&*lots[2].id, "Lot 3");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_board_defaults_missing_amounts_to_zero(sheets: MemorySheets) {
    let catalog = load_catalog(&sheets, &SheetLayout::default()).await.unwrap();

    assert_eq!(catalog.current_bid("Lot 3"), 0);
    assert_eq!(catalog.current_bid("Lot 2"), 0);
    // on the board but not listed
    assert_eq!(catalog.current_bid("Lot 7"), 900);
    assert!(catalog.lot("Lot 7").is_none());
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_registry_requires_name_and_number(sheets: MemorySheets) {
    let catalog = load_catalog(&sheets, &SheetLayout::default()).await.unwrap();

    assert_eq!(catalog.bidding_number("Ada Lovelace"), Some("17"));
    assert_eq!(catalog.bidding_number("Grace Hopper"), Some("42"));
    assert_eq!(catalog.bidding_number("No Number"), None);
    assert_eq!(catalog.counts(), (3, 4, 2));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_missing_sheet_fails_the_load(mut sheets: MemorySheets) {
    sheets.sheets.remove("Bid Board");
    let err = load_catalog(&sheets, &SheetLayout::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no such sheet: Bid Board");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn test_loaded_catalog_drives_the_rules(sheets: MemorySheets) {
    let catalog = load_catalog(&sheets, &SheetLayout::default()).await.unwrap();
    let rules = Rules::default();

    assert_eq!(rules.suggest_for(&catalog, "Lot 1").amount, 750);
    assert_eq!(rules.suggest_for(&catalog, "Lot 2").amount, 400);

    let proposal = paddle_core::models::BidProposal {
        sale_lot: "Lot 1".into(),
        bidder_name: "Ada Lovelace".into(),
        bidding_number: "17".into(),
        bid_amount: "750".into(),
    };
    let payload = rules.accept(&catalog, &proposal).unwrap();
    assert_eq!(payload.amount, 750);
    assert_eq!(payload.bidding_number, "17");
}
