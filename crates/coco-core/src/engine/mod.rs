//! # Engine Module
//!
//! The aggregation engine: reconciles per-frame reports of a [`System`] into cross-frame
//! summaries.
//!
//! ## Components
//!
//! - **Aggregators** - [`interactions`], [`area`] and [`trends`], one per report kind. Each
//!   scans the frames of a system in ascending index order and returns its summary together
//!   with a [`coverage::Coverage`] record of what was missing or skipped.
//! - **Configuration** ([`config`]) - Report file naming and the numeric value policy.
//! - **Progress** ([`progress`]) - Optional per-frame progress callbacks.
//! - **Errors** ([`error`]) - The typed failures surfaced to callers.
//!
//! Per-file and per-row problems never abort an aggregation; they only reduce coverage.
//! The one exception is a non-integer trend count under [`config::ValuePolicy::Strict`].
//!
//! [`System`]: crate::core::models::system::System

pub mod area;
pub mod config;
pub mod coverage;
pub mod error;
pub mod interactions;
pub mod progress;
mod scan;
pub mod trends;
