//! Fixed business constants and lookup tables used by the decision engine.

use super::domain::{CountryCode, CreditModifier};

pub const MIN_LOAN_AMOUNT: i64 = 2000;
pub const MAX_LOAN_AMOUNT: i64 = 10000;
pub const MIN_LOAN_PERIOD: i32 = 12;
pub const MAX_LOAN_PERIOD: i32 = 60;

/// Longest loan term in whole years.
pub const MAX_LOAN_PERIOD_YEARS: u32 = (MAX_LOAN_PERIOD / 12) as u32;

/// Applicants younger than this are never eligible.
pub const MINIMUM_APPLICANT_AGE: u32 = 18;

/// A contiguous range of personal-code tails sharing one credit modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditSegment {
    pub name: &'static str,
    pub lowest_tail: u16,
    pub highest_tail: u16,
    pub modifier: CreditModifier,
}

impl CreditSegment {
    pub fn contains(&self, tail: u16) -> bool {
        (self.lowest_tail..=self.highest_tail).contains(&tail)
    }
}

/// Segments keyed by the last four digits of the personal code, in ascending order.
pub const CREDIT_SEGMENTS: [CreditSegment; 4] = [
    CreditSegment {
        name: "debtor",
        lowest_tail: 0,
        highest_tail: 2499,
        modifier: CreditModifier::DEBTOR,
    },
    CreditSegment {
        name: "segment1",
        lowest_tail: 2500,
        highest_tail: 4999,
        modifier: CreditModifier(100),
    },
    CreditSegment {
        name: "segment2",
        lowest_tail: 5000,
        highest_tail: 7499,
        modifier: CreditModifier(300),
    },
    CreditSegment {
        name: "segment3",
        lowest_tail: 7500,
        highest_tail: 9999,
        modifier: CreditModifier(1000),
    },
];

/// Life expectancy in years for each supported country.
pub fn life_expectancy(country: CountryCode) -> u32 {
    match country {
        CountryCode::Estonia => 82,
        CountryCode::Latvia => 74,
        CountryCode::Lithuania => 72,
    }
}

pub fn segment_by_name(name: &str) -> Option<&'static CreditSegment> {
    CREDIT_SEGMENTS
        .iter()
        .find(|segment| segment.name.eq_ignore_ascii_case(name))
}
