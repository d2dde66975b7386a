use tracing::warn;

use super::domain::CreditModifier;
use super::identifier::segment_tail;
use super::policy::{CreditSegment, CREDIT_SEGMENTS};

/// Segment for the personal code, if its tail can be read.
pub fn segment_for(personal_code: &str) -> Option<&'static CreditSegment> {
    let tail = segment_tail(personal_code)?;
    CREDIT_SEGMENTS.iter().find(|segment| segment.contains(tail))
}

/// Credit modifier for an already validated personal code.
pub fn resolve(personal_code: &str) -> CreditModifier {
    match segment_for(personal_code) {
        Some(segment) => segment.modifier,
        None => {
            warn!("personal code tail unreadable, treating applicant as debtor");
            CreditModifier::DEBTOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_segment() {
        assert_eq!(resolve("37605030299"), CreditModifier::DEBTOR);
        assert_eq!(resolve("50307172740"), CreditModifier(100));
        assert_eq!(resolve("38411266610"), CreditModifier(300));
        assert_eq!(resolve("35006069515"), CreditModifier(1000));
    }

    #[test]
    fn segment_boundaries_are_inclusive() {
        assert_eq!(resolve("00000002499"), CreditModifier::DEBTOR);
        assert_eq!(resolve("00000002500"), CreditModifier(100));
        assert_eq!(resolve("00000004999"), CreditModifier(100));
        assert_eq!(resolve("00000005000"), CreditModifier(300));
        assert_eq!(resolve("00000007499"), CreditModifier(300));
        assert_eq!(resolve("00000007500"), CreditModifier(1000));
        assert_eq!(resolve("00000009999"), CreditModifier(1000));
    }

    #[test]
    fn unreadable_tail_falls_back_to_debtor() {
        assert_eq!(resolve("123"), CreditModifier::DEBTOR);
        assert_eq!(resolve("503071x2740"), CreditModifier(100));
        assert_eq!(resolve("50307172x40"), CreditModifier::DEBTOR);
        assert_eq!(segment_for("50307172x40"), None);
    }
}
