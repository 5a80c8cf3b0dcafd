//! # Core Models Module
//!
//! The value types the aggregators produce and consume.
//!
//! - [`frame`] - A single numbered frame directory of a system
//! - [`system`] - A system with its ordered frames, and its catalog entry
//! - [`residue`] - Residue descriptors and the six-field residue-pair key
//! - [`interaction`] - Per-row interaction records and their cross-frame aggregate
//! - [`area`] - Buried surface area samples
//! - [`trend`] - The twelve interaction categories and their per-frame series

pub mod area;
pub mod frame;
pub mod interaction;
pub mod residue;
pub mod system;
pub mod trend;
