use std::{
    fmt,
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use chrono::{Datelike, Local, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::MovementError;

pub const MIN_YEARS_AHEAD: i32 = 1;
pub const MAX_YEARS_AHEAD: i32 = 5;

/// Month and year a card stops being valid; displays as `MM/yy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpirationDate {
    pub year: i32,
    pub month: u32,
}

impl ExpirationDate {
    pub fn new(month: u32, year: i32) -> Result<Self, MovementError> {
        if !(1..=12).contains(&month) {
            return Err(MovementError::InvalidInput(format!(
                "expiration month {month} is outside 1-12"
            )));
        }
        Ok(Self { year, month })
    }

    /// A card is expired once the calendar has moved past its expiration month.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        (date.year(), date.month()) > (self.year, self.month)
    }
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

impl FromStr for ExpirationDate {
    type Err = MovementError;

    /// Parses `MM/yy`; two-digit years are placed in the 2000s.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MovementError::InvalidInput(format!("`{s}` is not an MM/yy date"));
        let (month, year) = s.trim().split_once('/').ok_or_else(invalid)?;
        if month.len() != 2 || year.len() != 2 {
            return Err(invalid());
        }
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        Self::new(month, 2000 + year)
    }
}

/// Produces random card expiration dates.
///
/// Not shared between threads on its own; keep one per worker or use
/// [`SharedExpirationDateGenerator`].
pub struct ExpirationDateGenerator<R = StdRng> {
    rng: R,
}

impl ExpirationDateGenerator<StdRng> {
    /// Seeds a generator from the operating system's entropy source.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ExpirationDateGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ExpirationDateGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Expiration for a card issued today, formatted `MM/yy`.
    pub fn generate(&mut self) -> String {
        self.expiration_from(Local::now().date_naive()).to_string()
    }

    /// Adds 1-5 years to `today`, then overwrites the month with a random one.
    ///
    /// The month is replaced, not added, so the result can fall earlier in
    /// its year than `today`'s month.
    pub fn expiration_from(&mut self, today: NaiveDate) -> ExpirationDate {
        let years = self.rng.random_range(MIN_YEARS_AHEAD..=MAX_YEARS_AHEAD);
        let month = self.rng.random_range(1..=12u32);
        ExpirationDate {
            year: today.year() + years,
            month,
        }
    }
}

/// Mutex-protected generator that can be shared across worker threads.
pub struct SharedExpirationDateGenerator {
    inner: Mutex<ExpirationDateGenerator<StdRng>>,
}

impl SharedExpirationDateGenerator {
    pub fn new() -> Self {
        Self::from_generator(ExpirationDateGenerator::new())
    }

    pub fn from_generator(generator: ExpirationDateGenerator<StdRng>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    pub fn generate(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate()
    }

    pub fn expiration_from(&self, today: NaiveDate) -> ExpirationDate {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .expiration_from(today)
    }
}

impl Default for SharedExpirationDateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
    }

    #[test]
    fn seeded_generators_repeat_sequences() {
        let mut first = ExpirationDateGenerator::seeded(7);
        let mut second = ExpirationDateGenerator::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.expiration_from(today()), second.expiration_from(today()));
        }
    }

    #[test]
    fn years_and_months_stay_in_range() {
        let mut generator = ExpirationDateGenerator::seeded(42);
        for _ in 0..1_000 {
            let date = generator.expiration_from(today());
            assert!((2025..=2029).contains(&date.year));
            assert!((1..=12).contains(&date.month));
        }
    }

    #[test]
    fn month_overwrite_can_precede_current_month() {
        let mut generator = ExpirationDateGenerator::seeded(3);
        let earlier = (0..1_000)
            .map(|_| generator.expiration_from(today()))
            .any(|date| date.month < today().month());
        assert!(earlier);
    }

    #[test]
    fn leap_day_issue_dates_are_supported() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut generator = ExpirationDateGenerator::seeded(11);
        for _ in 0..100 {
            let date = generator.expiration_from(leap);
            assert!((2025..=2029).contains(&date.year));
        }
    }

    #[test]
    fn display_and_parse_agree() {
        let date = ExpirationDate::new(3, 2027).unwrap();
        assert_eq!(date.to_string(), "03/27");
        assert_eq!("03/27".parse::<ExpirationDate>().unwrap(), date);
        assert!("13/27".parse::<ExpirationDate>().is_err());
        assert!("3/27".parse::<ExpirationDate>().is_err());
    }

    #[test]
    fn expiry_is_checked_against_month_end() {
        let date = ExpirationDate::new(5, 2026).unwrap();
        assert!(!date.is_expired_on(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap()));
        assert!(date.is_expired_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
    }
}
