use super::{Reporting, Rules, parse_amount};
use crate::models::{BidPayload, BidProposal, Catalog, Field, ValidationReport};

impl Rules {
    /// Check a proposal against every rule.
    ///
    /// Rules are checked independently, so one proposal can fail several
    /// at once. With [`Reporting::First`] only the first failure is kept.
    ///
    /// The identity check compares the bidding number with the registry
    /// entry for the name. Anyone can read the registry, so passing this
    /// check proves nothing about who submitted the bid.
    pub fn validate(&self, catalog: &Catalog, proposal: &BidProposal) -> ValidationReport {
        let mut report = ValidationReport::valid();

        let lot = proposal.sale_lot.trim();
        if lot.is_empty() {
            report.push(Field::SaleLot, "Please select a Sale Lot.");
        } else if !catalog.is_listed(lot) {
            report.push(Field::SaleLot, "Unknown Sale Lot.");
        }

        if self.check_identity {
            let name = proposal.bidder_name.trim();
            let number = proposal.bidding_number.trim();
            if catalog.bidding_number(name) != Some(number) {
                report.push(
                    Field::BiddingNumber,
                    "Bidder name and bidding number do not match our records.",
                );
            }
        }

        match parse_amount(&proposal.bid_amount) {
            None => report.push(Field::BidAmount, "Bid must be a whole dollar amount."),
            Some(amount) => {
                let current = catalog.current_bid(lot);
                if amount < self.opening_bid || amount <= current {
                    report.push(
                        Field::BidAmount,
                        format!(
                            "Bid must be at least ${} and greater than current bid.",
                            self.opening_bid
                        ),
                    );
                }
                if amount % self.increment.get() != 0 {
                    report.push(
                        Field::BidAmount,
                        format!("Bid must be in increments of ${}.", self.increment),
                    );
                }
            }
        }

        if self.reporting == Reporting::First {
            report.truncate_to_first();
        }

        report
    }

    /// Validate a proposal and, if it passes, shape the payload to deliver.
    pub fn accept(
        &self,
        catalog: &Catalog,
        proposal: &BidProposal,
    ) -> Result<BidPayload, ValidationReport> {
        let report = self.validate(catalog, proposal);
        if !report.is_valid() {
            return Err(report);
        }

        // a valid report implies both are present
        let lot = catalog.lot(proposal.sale_lot.trim()).map(|lot| lot.id);
        let amount = parse_amount(&proposal.bid_amount);
        match (lot, amount) {
            (Some(lot), Some(amount)) => Ok(BidPayload {
                lot,
                bidder_name: proposal.bidder_name.trim().to_owned(),
                bidding_number: proposal.bidding_number.trim().to_owned(),
                amount,
            }),
            _ => Err(report),
        }
    }
}
