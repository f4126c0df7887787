/// The raw contents of the bid form, as typed by the bidder.
///
/// Nothing here has been checked yet: the lot may be empty, the amount may
/// not be a number. See [`crate::rules::Rules::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidProposal {
    /// The selected lot, empty if none was selected
    #[cfg_attr(feature = "serde", serde(default))]
    pub sale_lot: String,
    /// The bidder's name
    #[cfg_attr(feature = "serde", serde(default))]
    pub bidder_name: String,
    /// The bidder's assigned bidding number
    #[cfg_attr(feature = "serde", serde(default))]
    pub bidding_number: String,
    /// The proposed amount
    #[cfg_attr(feature = "serde", serde(default))]
    pub bid_amount: String,
}
