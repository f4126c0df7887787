use crate::models::Row;

/// Read-only access to a spreadsheet made of named sheets.
///
/// This is the only contract the loader has with the spreadsheet. Cells
/// that are empty or missing must be reported as `None`; numeric cells must
/// be reported as [`crate::models::Cell::Number`] so that bid amounts can be
/// read without parsing display strings.
pub trait SheetSource {
    /// Error type for fetch failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every data row of the named sheet, excluding the header row.
    fn fetch_rows(&self, sheet: &str) -> impl Future<Output = Result<Vec<Row>, Self::Error>> + Send;
}
