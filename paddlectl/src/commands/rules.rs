use clap::Args;
use paddle_core::rules::{Reporting, Rules};
use std::num::NonZeroU64;

#[derive(Args)]
pub struct RulesArgs {
    /// The smallest bid that can open a lot, in dollars
    #[arg(long, default_value_t = 400)]
    pub opening_bid: u64,

    /// The bid increment, in dollars
    #[arg(long, default_value = "100")]
    pub increment: NonZeroU64,

    /// Do not require the bidding number to match the bidder's registration
    #[arg(long)]
    pub no_identity_check: bool,

    /// Report only the first error
    #[arg(long)]
    pub first_error_only: bool,
}

impl From<&RulesArgs> for Rules {
    fn from(args: &RulesArgs) -> Self {
        Rules {
            opening_bid: args.opening_bid,
            increment: args.increment,
            check_identity: !args.no_identity_check,
            reporting: if args.first_error_only {
                Reporting::First
            } else {
                Reporting::All
            },
        }
    }
}
