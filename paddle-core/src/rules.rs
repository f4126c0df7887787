mod gate;
mod suggest;
mod validate;

pub use gate::{GatePass, SubmissionGate};
pub use suggest::Suggestion;

use std::num::NonZeroU64;

/// How many validation errors a form shows at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Reporting {
    /// Report every failing rule, next to the field it concerns
    #[default]
    All,
    /// Report only the first failing rule, as a single blocking message
    First,
}

/// The business rules of the auction.
///
/// # Examples
///
/// ```
/// use paddle_core::rules::Rules;
///
/// let rules = Rules::default();
/// assert_eq!(rules.suggest(0).amount, 400);
/// assert_eq!(rules.suggest(650).amount, 750);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// The smallest bid that can open a lot, in dollars
    #[cfg_attr(feature = "serde", serde(default = "default_opening_bid"))]
    pub opening_bid: u64,

    /// Bids must be a multiple of this many dollars, and the suggested bid
    /// is this much above the current bid
    #[cfg_attr(feature = "serde", serde(default = "default_increment"))]
    pub increment: NonZeroU64,

    /// Whether the bidding number must match the registry entry for the name
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub check_identity: bool,

    /// How many errors to report
    #[cfg_attr(feature = "serde", serde(default))]
    pub reporting: Reporting,
}

fn default_opening_bid() -> u64 {
    400
}

fn default_increment() -> NonZeroU64 {
    const HUNDRED: NonZeroU64 = NonZeroU64::new(100).unwrap();
    HUNDRED
}

fn default_true() -> bool {
    true
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            opening_bid: default_opening_bid(),
            increment: default_increment(),
            check_identity: default_true(),
            reporting: Reporting::default(),
        }
    }
}

/// Parse a bid amount as typed into a form.
///
/// Surrounding whitespace and a leading `$` are ignored. Anything other than
/// a whole, non-negative number of dollars yields None.
pub fn parse_amount(text: &str) -> Option<u64> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text).trim_start();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("500", Some(500))]
    #[case("  700 ", Some(700))]
    #[case("$800", Some(800))]
    #[case("$ 900", Some(900))]
    #[case("", None)]
    #[case("abc", None)]
    #[case("-400", None)]
    #[case("+400", None)]
    #[case("450.5", None)]
    #[case("99999999999999999999999", None)]
    fn test_parse_amount(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_amount(text), expected);
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"check_identity": false}"#).unwrap();
        assert_eq!(
            rules,
            Rules {
                check_identity: false,
                ..Rules::default()
            }
        );

        let rules: Rules = serde_json::from_str(r#"{"reporting": "first"}"#).unwrap();
        assert_eq!(rules.reporting, Reporting::First);
        assert!(rules.check_identity);
    }

    #[test]
    fn test_zero_increment_is_refused() {
        assert!(serde_json::from_str::<Rules>(r#"{"increment": 0}"#).is_err());

        let rules: Rules = serde_json::from_str(r#"{"increment": 50}"#).unwrap();
        assert_eq!(rules.increment.get(), 50);
    }
}
