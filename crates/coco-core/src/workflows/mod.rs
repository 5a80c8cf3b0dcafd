//! # Workflows Module
//!
//! Top-level entry points that resolve a system id under a data root and return
//! JSON-serializable results.
//!
//! - **Catalog** ([`catalog`]) - Lists available systems, describes one, and opens a system
//!   for aggregation with the not-found rules applied.
//! - **Listings** ([`listing`]) - Runs one aggregator and shapes its output as the
//!   interaction, area or trend listing consumed by presentation layers.

pub mod catalog;
pub mod listing;
