//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted input layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%d.%m.%y", "%d-%m-%y"];

/// A birthday stored as entered (`dd.mm.yy` or `dd-mm-yy`), trimmed.
///
/// The parsed date is kept alongside the raw text so the next occurrence
/// can be computed without re-parsing.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.99").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// assert_eq!(birthday.days_until_next_occurrence_from(today), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if neither format parses.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();
        let raw = birthday.trim();

        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .ok_or_else(|| ValidationError::InvalidBirthday(birthday.clone()))?;

        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    /// Get the birthday as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Days from the local current date until the next occurrence.
    pub fn days_until_next_occurrence(&self) -> i64 {
        self.days_until_next_occurrence_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. Once this year's date has
    /// passed, the count runs to next year's occurrence. A 29 February
    /// birthday falls on 1 March in non-leap years.
    pub fn days_until_next_occurrence_from(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.date)
    }
}

impl Field for Birthday {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

// Serde support - serialize as the raw string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
