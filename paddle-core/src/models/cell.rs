/// A single typed spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Cell {
    /// A string cell
    Text(String),
    /// A numeric cell. Spreadsheets do not distinguish integers from floats.
    Number(f64),
    /// A checkbox cell
    Bool(bool),
}

impl Cell {
    /// Render the cell as trimmed text, or None if it is blank.
    ///
    /// Integral numbers are rendered without a fractional part, so a bidding
    /// number typed into a numeric column reads as `"12"` rather than `"12.0"`.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            Self::Text(text) => text.trim().to_owned(),
            // beyond i64, the float's own rendering is already integral
            Self::Number(value)
                if value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(value) =>
            {
                format!("{}", *value as i64)
            }
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        };

        if text.is_empty() { None } else { Some(text) }
    }

    /// Interpret the cell as a non-negative whole dollar amount.
    ///
    /// Fractional amounts are truncated. Negative, non-finite or non-numeric
    /// values yield None.
    pub fn as_amount(&self) -> Option<u64> {
        match self {
            Self::Number(value) if value.is_finite() && *value >= 0.0 => Some(value.trunc() as u64),
            Self::Text(text) => crate::rules::parse_amount(text),
            _ => None,
        }
    }
}

/// A row of cells. Absent cells are `None`, whether they were omitted by the
/// source or lie past the end of the row.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Row(pub Vec<Option<Cell>>);

impl Row {
    /// The cell at `column`, if present.
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.0.get(column).and_then(Option::as_ref)
    }

    /// The non-blank text at `column`.
    pub fn text(&self, column: usize) -> Option<String> {
        self.get(column).and_then(Cell::as_text)
    }

    /// The amount at `column`.
    pub fn amount(&self, column: usize) -> Option<u64> {
        self.get(column).and_then(Cell::as_amount)
    }
}

impl FromIterator<Option<Cell>> for Row {
    fn from_iter<I: IntoIterator<Item = Option<Cell>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
