use super::Rules;
use crate::models::Catalog;

/// The bid to prefill for a lot, and the prompt to show next to it.
///
/// This is only a suggestion; the bidder may type any amount.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The minimum acceptable next bid
    pub amount: u64,
    /// A human-readable explanation of the amount
    pub prompt: String,
}

impl Rules {
    /// Derive the minimum next bid given the current high bid.
    ///
    /// Below the opening bid (including "no bids yet", which is 0) the floor
    /// is the opening bid. Otherwise it is one increment above the current bid.
    pub fn suggest(&self, current_bid: u64) -> Suggestion {
        if current_bid < self.opening_bid {
            Suggestion {
                amount: self.opening_bid,
                prompt: format!(
                    "You are placing the opening bid. Minimum starting bid is ${}.",
                    self.opening_bid
                ),
            }
        } else {
            Suggestion {
                amount: current_bid.saturating_add(self.increment.get()),
                prompt: format!(
                    "Current bid is ${}. Your bid is autofilled ${} above.",
                    current_bid, self.increment
                ),
            }
        }
    }

    /// Derive the minimum next bid for a lot in the catalog.
    pub fn suggest_for(&self, catalog: &Catalog, lot: &str) -> Suggestion {
        self.suggest(catalog.current_bid(lot))
    }
}
