//! Core types for the Vulngate report-gating engine.
//!
//! Holds the normalized finding model, the threshold configuration, and the
//! error taxonomy shared by the analysis crate. No I/O lives here beyond
//! loading configuration files.

pub mod config;
pub mod errors;
pub mod model;
