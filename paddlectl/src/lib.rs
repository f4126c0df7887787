use clap::Parser;
use paddle_core::{
    loader::load_catalog,
    models::{BidPayload, BidProposal, Catalog, LotId},
    ports::{Delivery, SubmissionTransport as _},
    rules::Rules,
};
use paddle_google::{GoogleForm, GvizSheets, config::GoogleConfig};
use serde::Serialize;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The spreadsheet and form are shared by every subcommand
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(flatten)]
    pub google: GoogleArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Lots { output, rules } => {
                let catalog = fetch_catalog(&self.google.config(DeliveryArg::Post)).await?;
                output.emit(&lot_lines(&catalog, &Rules::from(&rules)))?;
            }
            Commands::Check { io, rules } => {
                let proposal = io.parse::<BidProposal>()?;
                let catalog = fetch_catalog(&self.google.config(DeliveryArg::Post)).await?;
                let report = Rules::from(&rules).validate(&catalog, &proposal);
                io.output.emit(&report)?;
                if !report.is_valid() {
                    return Err(CliError::Rejected(report.errors.len()))?;
                }
            }
            Commands::Submit {
                io,
                rules,
                delivery,
            } => {
                let config = self.google.config(delivery);
                if config.form_id.trim().is_empty() {
                    return Err(CliError::MissingFormId)?;
                }
                let proposal = io.parse::<BidProposal>()?;
                let catalog = fetch_catalog(&config).await?;
                let payload = match Rules::from(&rules).accept(&catalog, &proposal) {
                    Ok(payload) => payload,
                    Err(report) => {
                        io.output.emit(&report)?;
                        return Err(CliError::Rejected(report.errors.len()))?;
                    }
                };
                let form = GoogleForm::new(config.client()?, &config);
                let delivery = form.deliver(&payload).await?;
                io.output.emit(&Submission { payload, delivery })?;
            }
        }

        Ok(())
    }
}

async fn fetch_catalog(config: &GoogleConfig) -> anyhow::Result<Catalog> {
    let sheets = GvizSheets::new(config.client()?, config);
    Ok(load_catalog(&sheets, &config.layout).await?)
}

/// A lot as listed by the `lots` subcommand.
#[derive(Debug, Serialize, PartialEq)]
pub struct LotLine {
    pub id: LotId,
    pub image: Option<String>,
    pub current_bid: u64,
    pub suggested_bid: u64,
    pub prompt: String,
}

pub fn lot_lines(catalog: &Catalog, rules: &Rules) -> Vec<LotLine> {
    catalog
        .lots()
        .map(|lot| {
            let suggestion = rules.suggest(lot.current_bid);
            LotLine {
                id: lot.id,
                image: lot.image,
                current_bid: lot.current_bid,
                suggested_bid: suggestion.amount,
                prompt: suggestion.prompt,
            }
        })
        .collect()
}

/// What the `submit` subcommand did with a bid.
#[derive(Serialize)]
pub struct Submission {
    pub payload: BidPayload,
    pub delivery: Delivery,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("The bid was rejected with {0} error(s)")]
    Rejected(usize),
    #[error("No form id given, please set --form-id or APP_GOOGLE__FORM_ID")]
    MissingFormId,
}
