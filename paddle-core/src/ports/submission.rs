use crate::models::BidPayload;

/// What the transport did with an accepted bid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Delivery {
    /// The endpoint received the bid.
    Accepted,
    /// The bid has been encoded into a URL that the bidder must open to
    /// complete the submission (for example, a prefilled form).
    Redirect {
        /// The URL to open
        url: String,
    },
}

/// Delivers accepted bids to the form-collection endpoint.
///
/// The rules are indifferent to how delivery happens, so the transport is a
/// single method. Implementations must not retry on failure; the bidder is
/// told the submission failed and may submit again.
pub trait SubmissionTransport {
    /// Error type for delivery failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hand the payload to the endpoint.
    fn deliver(
        &self,
        payload: &BidPayload,
    ) -> impl Future<Output = Result<Delivery, Self::Error>> + Send;
}
