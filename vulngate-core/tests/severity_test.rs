//! Normalization properties of the severity model.

use proptest::prelude::*;
use vulngate_core::model::Severity;

proptest! {
    /// Normalization is idempotent under trimming and upper-casing.
    #[test]
    fn prop_normalize_agrees_with_trimmed_uppercase(s in "\\PC{0,24}") {
        let canonical = s.trim().to_uppercase();
        prop_assert_eq!(Severity::normalize(&s), Severity::normalize(&canonical));
    }

    /// Normalization never panics and always yields one of the six tiers.
    #[test]
    fn prop_normalize_is_total(s in "\\PC{0,64}") {
        let severity = Severity::normalize(&s);
        prop_assert!(Severity::ALL.contains(&severity));
    }
}

#[test]
fn test_blank_input_is_unassigned() {
    assert_eq!(Severity::normalize(""), Severity::Unassigned);
    assert_eq!(Severity::normalize("   \t "), Severity::Unassigned);
}

#[test]
fn test_rank_round_trip_through_name() {
    for severity in Severity::ALL {
        // Scanner strings use the canonical names except INFO, which only
        // exists as the INFORMATIONAL synonym.
        let normalized = Severity::normalize(severity.name());
        if severity == Severity::Info {
            assert_eq!(normalized, Severity::Unassigned);
        } else {
            assert_eq!(normalized, severity);
        }
    }
}
