//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country prefix every stored number carries.
const COUNTRY_CODE: &str = "38";

/// Digits in a full international number (country code included).
const INTERNATIONAL_LEN: usize = 12;

/// Digits in a local number (country code omitted).
const LOCAL_LEN: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Numbers are normalized at construction time to the international
/// `+38XXXXXXXXXX` form, so two spellings of the same number compare equal.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the format.
    ///
    /// # Validation Rules
    ///
    /// - A leading `+` is dropped, as are `(`, `)`, `-` and spaces
    /// - 12 digits starting with `38` are kept as `+<digits>`
    /// - 10 digits get the `+38` country prefix
    /// - Anything else is rejected
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        match Self::normalize(&phone) {
            Some(normalized) => Ok(Self(normalized)),
            None => Err(ValidationError::InvalidPhone(phone)),
        }
    }

    /// Normalize raw input to `+38XXXXXXXXXX`, or `None` when it cannot be.
    fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let cleaned: String = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | '-' | ' '))
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        if cleaned.len() == INTERNATIONAL_LEN && cleaned.starts_with(COUNTRY_CODE) {
            Some(format!("+{}", cleaned))
        } else if cleaned.len() == LOCAL_LEN {
            Some(format!("+{}{}", COUNTRY_CODE, cleaned))
        } else {
            None
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for PhoneNumber {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
