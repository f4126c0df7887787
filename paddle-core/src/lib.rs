#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the paddle-core crate.
//! [paddle_core]: https://docs.rs/paddle_core/latest/paddle_core/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the bid desk.
///
/// This module contains the data structures for lots, the loaded catalog,
/// bid proposals and the outcomes of validating them. The models carry
/// minimal behaviour; the business rules live in [`rules`].
pub mod models;

/// Interface traits for the bid desk.
///
/// These are the "ports" of the hexagonal architecture: the contracts
/// between the rules and the external spreadsheet and form services. The
/// separation allows the rules to be tested without a network and lets the
/// submission transport vary without touching the rules.
pub mod ports;

/// The bid derivation and validation rules.
pub mod rules;

/// Materializes a [`models::Catalog`] from a [`ports::SheetSource`].
pub mod loader;
