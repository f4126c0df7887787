/// The identifier of a sale lot, exactly as it appears in the listings sheet.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LotId(String);

impl From<String> for LotId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LotId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<LotId> for String {
    fn from(value: LotId) -> Self {
        value.0
    }
}

impl std::borrow::Borrow<str> for LotId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for LotId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for LotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A lot as offered to bidders.
///
/// Lots are assembled from the listings and the bid board when the catalog
/// is read. A lot nobody has bid on has a `current_bid` of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lot {
    /// The lot identifier
    pub id: LotId,
    /// A URL of an image of the lot, if the listing has one
    pub image: Option<String>,
    /// The highest recorded bid in whole dollars
    pub current_bid: u64,
}
