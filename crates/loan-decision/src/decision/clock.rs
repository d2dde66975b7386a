use chrono::{Local, NaiveDate};

/// Source of the evaluation date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the local calendar date, or a configured fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSource {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock for DateSource {
    fn today(&self) -> NaiveDate {
        match self {
            DateSource::System => Local::now().date_naive(),
            DateSource::Fixed(date) => *date,
        }
    }
}
