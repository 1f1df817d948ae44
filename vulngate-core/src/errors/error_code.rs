//! Stable error codes for host-facing diagnostics.

pub const REPORT_ERROR: &str = "VG_REPORT_ERROR";
pub const CONFIG_ERROR: &str = "VG_CONFIG_ERROR";
pub const IO_ERROR: &str = "VG_IO_ERROR";

/// Trait implemented by every Vulngate error type, mapping each error to a
/// stable machine-readable code.
pub trait VulngateErrorCode {
    fn error_code(&self) -> &'static str;
}
