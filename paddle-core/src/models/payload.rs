use super::LotId;

/// An accepted bid, shaped for delivery to the form endpoint.
///
/// Only [`crate::rules::Rules::accept`] produces payloads, so a payload has
/// always passed validation. The name and number are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidPayload {
    /// The lot being bid on
    pub lot: LotId,
    /// The bidder's name
    pub bidder_name: String,
    /// The bidder's bidding number
    pub bidding_number: String,
    /// The bid in whole dollars
    pub amount: u64,
}

impl BidPayload {
    /// Pair each value with the endpoint's key for it.
    ///
    /// The keys are given in the order lot, name, number, amount.
    pub fn fields<'a>(&'a self, keys: [&'a str; 4]) -> [(&'a str, String); 4] {
        let [lot, name, number, amount] = keys;
        [
            (lot, self.lot.to_string()),
            (name, self.bidder_name.clone()),
            (number, self.bidding_number.clone()),
            (amount, self.amount.to_string()),
        ]
    }
}
