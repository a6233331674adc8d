//! Deterministic filtering, sorting, and grouping engine for research
//! publication listings.
//!
//! `publist-core` consumes an immutable, already-validated array of
//! publication records plus the currently active filter criteria and
//! derives everything a listing page renders: the selectable filter
//! options, the matching subset, and its chronological year grouping.
//! Every derivation is a pure function of its inputs; identical inputs
//! always produce identical outputs.

pub mod catalog;
pub mod filter;
pub mod record;
pub mod types;
