//! # Core Module
//!
//! Data models for systems, frames and per-frame report content, plus the file-level
//! readers that locate frames on disk and parse their CSV reports.
//!
//! - **Models** ([`models`]) - Frames, systems, residue pairs, area samples and trend series
//! - **File I/O** ([`io`]) - Frame discovery, tolerant CSV reading and numeric-token extraction

pub mod io;
pub mod models;
