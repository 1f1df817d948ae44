//! Scanner engine versions reported in `scanInfo`.

use std::cmp::Ordering;
use std::fmt;

use vulngate_core::errors::ReportError;

/// A `major.minor.micro` engine version. Missing components default to 0;
/// a blank string parses to `0.0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl EngineVersion {
    /// Oldest engine whose report schema the parser understands.
    pub const MIN_SUPPORTED: EngineVersion = EngineVersion {
        major: 5,
        minor: 0,
        micro: 0,
    };

    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Parse a dotted version string. At most three numeric components are
    /// accepted; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, ReportError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let mut components = [0u32; 3];
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > 3 {
            return Err(ReportError::InvalidVersion {
                input: input.to_string(),
            });
        }
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| ReportError::InvalidVersion {
                input: input.to_string(),
            })?;
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            micro: components[2],
        })
    }
}

impl Ord for EngineVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.micro).cmp(&(other.major, other.minor, other.micro))
    }
}

impl PartialOrd for EngineVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_and_partial() {
        assert_eq!(EngineVersion::parse("6.5.3").unwrap(), EngineVersion::new(6, 5, 3));
        assert_eq!(EngineVersion::parse("9.2").unwrap(), EngineVersion::new(9, 2, 0));
        assert_eq!(EngineVersion::parse("5").unwrap(), EngineVersion::new(5, 0, 0));
        assert_eq!(EngineVersion::parse("  10.0.4 ").unwrap(), EngineVersion::new(10, 0, 4));
    }

    #[test]
    fn test_blank_parses_to_zero() {
        assert_eq!(EngineVersion::parse("").unwrap(), EngineVersion::default());
        assert_eq!(EngineVersion::parse("  ").unwrap(), EngineVersion::default());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(EngineVersion::parse("six").is_err());
        assert!(EngineVersion::parse("1.2.3.4").is_err());
        assert!(EngineVersion::parse("1..3").is_err());
        assert!(EngineVersion::parse("-1.0.0").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(EngineVersion::parse("4.9.9").unwrap() < EngineVersion::MIN_SUPPORTED);
        assert!(EngineVersion::parse("5.0.0").unwrap() >= EngineVersion::MIN_SUPPORTED);
        assert!(EngineVersion::parse("10.0.4").unwrap() > EngineVersion::parse("9.9.9").unwrap());
    }
}
