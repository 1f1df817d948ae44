//! Report subsystem — XML parsing and engine-version checks.
//!
//! One report document is one `<analysis>` tree; parsing yields one
//! `Finding` per (dependency, vulnerability) pair in document order. The
//! parser is stateless and safe to call concurrently on independent readers.

pub mod engine_version;
pub mod parser;

pub use engine_version::EngineVersion;
pub use parser::parse;
