//! Estonian-format personal codes: birth date extraction, check digits and generation.
//!
//! Layout: `G YY MM DD SSS C` where `G` encodes century and sex, `SSS` is a serial
//! number and `C` is a mod-11 check digit.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use super::error::AgeDerivationError;
use super::policy::CreditSegment;

pub const PERSONAL_CODE_LENGTH: usize = 11;

const FIRST_PASS_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Format and checksum check performed before any derivation touches the code.
pub trait IdentifierValidator: Send + Sync {
    fn is_valid(&self, personal_code: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeValidator;

impl IdentifierValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, personal_code: &str) -> bool {
        let bytes = personal_code.as_bytes();
        if bytes.len() != PERSONAL_CODE_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return false;
        }
        if parse_birth_date(personal_code).is_err() {
            return false;
        }

        let digits: Vec<u8> = bytes.iter().map(|byte| byte - b'0').collect();
        check_digit(&digits[..10]) == digits[10]
    }
}

/// Extracts the birth date encoded in the first seven digits.
pub fn parse_birth_date(personal_code: &str) -> Result<NaiveDate, AgeDerivationError> {
    let bytes = personal_code.as_bytes();
    if bytes.len() < 7 || !bytes[..7].iter().all(u8::is_ascii_digit) {
        return Err(AgeDerivationError::Malformed);
    }

    let century = match bytes[0] {
        b'1' | b'2' => 1800,
        b'3' | b'4' => 1900,
        b'5' | b'6' => 2000,
        other => return Err(AgeDerivationError::UnknownCentury(char::from(other))),
    };

    let year = century + two_digits(&bytes[1..3]) as i32;
    let month = two_digits(&bytes[3..5]);
    let day = two_digits(&bytes[5..7]);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(AgeDerivationError::ImpossibleDate { year, month, day })
}

fn two_digits(pair: &[u8]) -> u32 {
    u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0')
}

/// Mod-11 check digit over the first ten digit values (each `0..=9`).
pub fn check_digit(digits: &[u8]) -> u8 {
    let weighted = |weights: &[u32; 10]| {
        digits
            .iter()
            .zip(weights.iter())
            .map(|(digit, weight)| u32::from(*digit) * weight)
            .sum::<u32>()
            % 11
    };

    match weighted(&FIRST_PASS_WEIGHTS) {
        10 => match weighted(&SECOND_PASS_WEIGHTS) {
            10 => 0,
            remainder => remainder as u8,
        },
        remainder => remainder as u8,
    }
}

/// The last four digits, which select the credit segment.
pub fn segment_tail(personal_code: &str) -> Option<u16> {
    let start = personal_code.len().checked_sub(4)?;
    let tail = personal_code.get(start..)?;
    if !tail.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(format!("unknown sex '{other}', expected male or female")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("birth year {0} cannot be encoded, supported years are 1800-2099")]
    YearOutOfRange(i32),
    #[error("serial {0} exceeds three digits")]
    SerialOutOfRange(u16),
    #[error("no serial number places the code in segment {0}")]
    SegmentUnreachable(&'static str),
}

/// Builds a checksum-valid personal code.
pub fn generate(birth_date: NaiveDate, sex: Sex, serial: u16) -> Result<String, GenerateError> {
    let year = birth_date.year();
    if !(1800..=2099).contains(&year) {
        return Err(GenerateError::YearOutOfRange(year));
    }
    if serial > 999 {
        return Err(GenerateError::SerialOutOfRange(serial));
    }

    let century_base = 1 + 2 * ((year - 1800) / 100);
    let century_digit = match sex {
        Sex::Male => century_base,
        Sex::Female => century_base + 1,
    };

    let body = format!(
        "{}{:02}{:02}{:02}{:03}",
        century_digit,
        year % 100,
        birth_date.month(),
        birth_date.day(),
        serial
    );
    let digits: Vec<u8> = body.bytes().map(|byte| byte - b'0').collect();
    Ok(format!("{body}{}", check_digit(&digits)))
}

/// Builds a personal code whose tail falls into `segment`, using the lowest such serial.
pub fn generate_in_segment(
    birth_date: NaiveDate,
    sex: Sex,
    segment: &CreditSegment,
) -> Result<String, GenerateError> {
    for serial in 0..=999 {
        let code = generate(birth_date, sex, serial)?;
        if segment_tail(&code).is_some_and(|tail| segment.contains(tail)) {
            return Ok(code);
        }
    }
    Err(GenerateError::SegmentUnreachable(segment.name))
}
