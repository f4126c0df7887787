use super::{Lot, LotId, Map};

/// Everything the bid rules need to know about the auction.
///
/// A catalog is built once from the three sheets and then shared read-only
/// (typically behind an `Arc`). The listings, the bid board and the registry
/// are kept separately because the sheets are maintained by hand and may
/// disagree: a lot on the board that is missing from the listings is not
/// offered for selection, but its recorded bid is still honoured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Map<LotId, Option<String>>,
    board: Map<LotId, u64>,
    registry: Map<String, String>,
}

impl Catalog {
    /// Add a lot to the listings.
    ///
    /// A repeated identifier keeps its original position; its image is
    /// replaced by the newer one.
    pub fn list_lot(&mut self, id: impl Into<LotId>, image: Option<String>) -> &mut Self {
        self.listings.insert(id.into(), image);
        self
    }

    /// Record the current high bid of a lot.
    pub fn record_bid(&mut self, id: impl Into<LotId>, amount: u64) -> &mut Self {
        self.board.insert(id.into(), amount);
        self
    }

    /// Register a bidder under their assigned bidding number.
    pub fn register_bidder(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> &mut Self {
        self.registry.insert(name.into(), number.into());
        self
    }

    /// The selectable lots, in listing order.
    pub fn lots(&self) -> impl ExactSizeIterator<Item = Lot> + '_ {
        self.listings.iter().map(|(id, image)| Lot {
            id: id.clone(),
            image: image.clone(),
            current_bid: self.current_bid(id),
        })
    }

    /// Look up a selectable lot.
    pub fn lot(&self, id: &str) -> Option<Lot> {
        self.listings.get_key_value(id).map(|(id, image)| Lot {
            id: id.clone(),
            image: image.clone(),
            current_bid: self.current_bid(id),
        })
    }

    /// Whether the lot is offered for selection.
    pub fn is_listed(&self, id: &str) -> bool {
        self.listings.contains_key(id)
    }

    /// The recorded high bid of any lot on the board, 0 if there is none.
    pub fn current_bid(&self, id: &str) -> u64 {
        self.board.get(id).copied().unwrap_or_default()
    }

    /// The bidding number registered for a bidder name.
    pub fn bidding_number(&self, name: &str) -> Option<&str> {
        self.registry.get(name).map(String::as_str)
    }

    /// The number of (listed lots, board entries, registered bidders).
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.listings.len(), self.board.len(), self.registry.len())
    }
}
