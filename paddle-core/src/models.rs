mod catalog;
mod cell;
mod lot;
mod payload;
mod proposal;
mod report;

pub use catalog::Catalog;
pub use cell::{Cell, Row};
pub use lot::{Lot, LotId};
pub use payload::BidPayload;
pub use proposal::BidProposal;
pub use report::{Field, FieldError, ValidationReport};

/// An insertion-ordered hash map.
///
/// Lots are offered in the order they appear in the listings sheet, so
/// lookups keep their insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
