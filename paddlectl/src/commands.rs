use super::{IOArgs, OutputArgs};
use clap::Subcommand;

mod google;
mod rules;

pub use google::{DeliveryArg, GoogleArgs};
pub use rules::RulesArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// List the lots on offer with their current and suggested bids
    Lots {
        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        rules: RulesArgs,
    },

    /// Validate a bid proposal against the live catalog and report any errors
    Check {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        rules: RulesArgs,
    },

    /// Validate a bid proposal and, if valid, deliver it to the form
    Submit {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        rules: RulesArgs,

        /// Deliver by posting the form, or by printing a prefilled link
        #[arg(short, long, value_enum, default_value = "post")]
        delivery: DeliveryArg,
    },
}
