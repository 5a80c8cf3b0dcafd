//! # CoCoAgg Core Library
//!
//! Aggregates per-frame CoCoMaps reports (interaction detail, buried surface area and
//! summary tables) into consolidated, cross-frame summaries for a set of trajectory
//! "systems".
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Plain data models (`System`, `Frame`, residue-pair keys,
//!   area samples, trend series) and the report readers that turn CSV files into typed rows.
//!
//! - **[`engine`]: The Logic Core.** The three aggregators (interactions, area, trends),
//!   together with configuration, coverage bookkeeping, progress reporting and the error
//!   taxonomy.
//!
//! - **[`workflows`]: The Public API.** Resolves a system id under a data root, runs one
//!   aggregator and returns a JSON-serializable listing. Also provides the system catalog.

pub mod core;
pub mod engine;
pub mod workflows;
