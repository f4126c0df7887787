//! A [`SheetSource`] backed by the visualization query endpoint of a
//! publicly shared spreadsheet.
//!
//! The endpoint answers `tqx=out:json` queries with a JavaScript callback,
//! `google.visualization.Query.setResponse({...});`, preceded by an
//! anti-hijacking comment. The JSON inside holds the table as rows of cells
//! where each cell is either `null` or an object whose `v` is the typed value.

use crate::{GoogleError, config::GoogleConfig};
use paddle_core::{
    models::{Cell, Row},
    ports::SheetSource,
};
use serde::Deserialize;
use tracing::{Level, event};

const CALLBACK: &str = "setResponse(";

/// Reads sheets of one spreadsheet.
#[derive(Clone, Debug)]
pub struct GvizSheets {
    client: reqwest::Client,
    endpoint: String,
}

impl GvizSheets {
    /// Create a source for the spreadsheet named in the config.
    pub fn new(client: reqwest::Client, config: &GoogleConfig) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/spreadsheets/d/{}/gviz/tq",
                config.base_url.trim_end_matches('/'),
                config.spreadsheet_id
            ),
        }
    }
}

impl SheetSource for GvizSheets {
    type Error = GoogleError;

    async fn fetch_rows(&self, sheet: &str) -> Result<Vec<Row>, Self::Error> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("tqx", "out:json"), ("sheet", sheet)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_gviz(&body)?;
        event!(Level::DEBUG, sheet, rows = rows.len(), "fetched sheet");
        Ok(rows)
    }
}

#[derive(Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    errors: Vec<Message>,
    table: Option<Table>,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    reason: String,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Deserialize)]
struct Table {
    #[serde(default)]
    rows: Vec<TableRow>,
}

#[derive(Deserialize)]
struct TableRow {
    #[serde(default)]
    c: Vec<Option<TableCell>>,
}

#[derive(Deserialize)]
struct TableCell {
    #[serde(default)]
    v: serde_json::Value,
}

impl TableCell {
    fn into_cell(self) -> Option<Cell> {
        match self.v {
            serde_json::Value::String(text) => Some(Cell::Text(text)),
            serde_json::Value::Number(number) => number.as_f64().map(Cell::Number),
            serde_json::Value::Bool(value) => Some(Cell::Bool(value)),
            _ => None,
        }
    }
}

/// Extract the rows of a visualization query response body.
///
/// # Errors
///
/// - [`GoogleError::Envelope`] if the body is not a `setResponse(...)` callback
/// - [`GoogleError::Json`] if the callback argument is not the expected JSON
/// - [`GoogleError::Query`] if the response reports an error status
pub fn parse_gviz(body: &str) -> Result<Vec<Row>, GoogleError> {
    let start = body.find(CALLBACK).ok_or(GoogleError::Envelope)? + CALLBACK.len();
    let end = body.rfind(')').ok_or(GoogleError::Envelope)?;
    if end < start {
        return Err(GoogleError::Envelope);
    }

    let response: Response = serde_json::from_str(&body[start..end])?;
    if response.status == "error" {
        let reasons = response
            .errors
            .into_iter()
            .map(|m| m.detailed_message.unwrap_or(m.reason))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GoogleError::Query(reasons));
    }

    Ok(response
        .table
        .map(|table| table.rows)
        .unwrap_or_default()
        .into_iter()
        .map(|row| {
            row.c
                .into_iter()
                .map(|cell| cell.and_then(TableCell::into_cell))
                .collect()
        })
        .collect())
}
