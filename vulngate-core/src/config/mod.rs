//! Configuration surface consumed by the risk gate.
//! TOML-based, all threshold fields optional.

pub mod gate_config;
pub mod thresholds;

pub use gate_config::GateConfig;
pub use thresholds::{ThresholdGroup, Thresholds};
