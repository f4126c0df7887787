use crate::{
    GoogleError,
    config::{DeliveryMode, FormFields, GoogleConfig},
};
use paddle_core::{
    models::BidPayload,
    ports::{Delivery, SubmissionTransport},
};
use tracing::{Level, event};

/// Delivers bids to a Google Form.
#[derive(Clone, Debug)]
pub struct GoogleForm {
    client: reqwest::Client,
    form_url: String,
    fields: FormFields,
    mode: DeliveryMode,
}

impl GoogleForm {
    /// Create a transport for the form named in the config.
    pub fn new(client: reqwest::Client, config: &GoogleConfig) -> Self {
        Self {
            client,
            form_url: format!(
                "{}/forms/d/e/{}",
                config.base_url.trim_end_matches('/'),
                config.form_id
            ),
            fields: config.fields.clone(),
            mode: config.delivery,
        }
    }

    /// The prefilled link a bidder can open to confirm the bid themselves.
    pub fn prefilled_link(&self, payload: &BidPayload) -> Result<String, GoogleError> {
        let base = format!("{}/viewform", self.form_url);
        let mut url = reqwest::Url::parse(&base).map_err(|err| GoogleError::Url {
            url: base.clone(),
            reason: err.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("usp", "pp_url")
            .extend_pairs(payload.fields(self.fields.keys()));

        Ok(url.into())
    }

    async fn post(&self, payload: &BidPayload) -> Result<(), GoogleError> {
        self.client
            .post(format!("{}/formResponse", self.form_url))
            .form(&payload.fields(self.fields.keys())[..])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl SubmissionTransport for GoogleForm {
    type Error = GoogleError;

    async fn deliver(&self, payload: &BidPayload) -> Result<Delivery, Self::Error> {
        let delivery = match self.mode {
            DeliveryMode::Post => {
                self.post(payload).await?;
                Delivery::Accepted
            }
            DeliveryMode::Link => Delivery::Redirect {
                url: self.prefilled_link(payload)?,
            },
        };

        event!(
            Level::INFO,
            lot = &*payload.lot,
            amount = payload.amount,
            mode = ?self.mode,
            "bid delivered"
        );
        Ok(delivery)
    }
}
