//! Report ingestion and risk-gate evaluation for Vulngate.
//!
//! The pipeline is: locate report files, parse each into `Finding`s,
//! aggregate them into a deduplicated set with a severity distribution, then
//! compare the distribution against configured thresholds to produce a
//! build verdict.

pub mod aggregation;
pub mod gates;
pub mod pipeline;
pub mod report;
pub mod reporters;
pub mod result;
