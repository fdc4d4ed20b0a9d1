//! Record model representing one contact in the book.

use crate::domain::{
    Birthday, ContactName, EmailAddress, Field, FieldSlot, PhoneNumber, ValidationError,
};
use crate::error::{RecordError, RecordResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name plus its phone numbers, email slots and birthday.
///
/// Phones always hold a valid value. Email slots may be empty placeholders
/// left behind by a rejected `add_email`; use [`Record::emails`] to see only
/// the addresses that are actually present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Identity of the contact, immutable after creation
    name: ContactName,

    /// Phone numbers in insertion order, duplicates allowed
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Email slots in insertion order, possibly empty placeholders
    #[serde(default)]
    emails: Vec<FieldSlot<EmailAddress>>,

    /// Optional birthday
    #[serde(default)]
    birthday: FieldSlot<Birthday>,
}

impl Record {
    /// Create a new record with no phones, emails or birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: FieldSlot::empty(),
        }
    }

    /// Create a record with an optional initial birthday and email.
    ///
    /// An unparseable email still leaves a placeholder slot, exactly as
    /// [`Record::add_email`] does.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the birthday is given but invalid.
    pub fn with_details(
        name: ContactName,
        birthday: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        if let Some(raw) = birthday {
            record.set_birthday(raw)?;
        }
        if let Some(raw) = email {
            // The placeholder is the recorded outcome of a bad initial email.
            let _ = record.add_email(raw);
        }
        Ok(record)
    }

    /// Get the contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get all phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get every email slot, including empty placeholders.
    pub fn email_slots(&self) -> &[FieldSlot<EmailAddress>] {
        &self.emails
    }

    /// Get the email addresses that hold a value.
    pub fn emails(&self) -> impl Iterator<Item = &EmailAddress> {
        self.emails.iter().filter_map(FieldSlot::get_value)
    }

    /// Get the birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.get_value()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and appends nothing when the
    /// input is rejected.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose stored value equals `value`.
    ///
    /// Returns how many phones were removed.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old_value` with `new_value`.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone equals `old_value`
    /// - `RecordError::Validation` if `new_value` is rejected; the old phone is kept
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_value)
            .ok_or_else(|| RecordError::PhoneNotFound(old_value.to_string()))?;

        let phone = PhoneNumber::new(new_value)?;
        debug!(contact = %self.name, old = old_value, new = %phone, "Editing phone");
        self.phones[index] = phone;
        Ok(())
    }

    /// Find the first phone whose stored value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate and append an email address.
    ///
    /// A rejected input still appends an empty placeholder slot.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` when the input is rejected.
    pub fn add_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        match EmailAddress::new(raw) {
            Ok(email) => {
                debug!(contact = %self.name, email = %email, "Adding email");
                self.emails.push(FieldSlot::filled(email));
                Ok(())
            }
            Err(e) => {
                debug!(contact = %self.name, raw, "Adding empty email slot");
                self.emails.push(FieldSlot::empty());
                Err(e)
            }
        }
    }

    /// Remove every email whose stored value equals `value`.
    ///
    /// Placeholders are never removed this way. Returns how many slots were removed.
    pub fn remove_email(&mut self, value: &str) -> usize {
        let before = self.emails.len();
        self.emails.retain(|slot| slot.as_str() != Some(value));
        before - self.emails.len()
    }

    /// Replace the first email equal to `old_value` with `new_value`.
    ///
    /// # Errors
    ///
    /// - `RecordError::EmailNotFound` if no email equals `old_value`
    /// - `RecordError::Validation` if `new_value` is rejected; the old email is kept
    pub fn edit_email(&mut self, old_value: &str, new_value: &str) -> RecordResult<()> {
        let slot = self
            .emails
            .iter_mut()
            .find(|slot| slot.as_str() == Some(old_value))
            .ok_or_else(|| RecordError::EmailNotFound(old_value.to_string()))?;

        slot.set_value(new_value)?;
        debug!(contact = %self.name, old = old_value, "Edited email");
        Ok(())
    }

    /// Find the first email whose stored value equals `value`.
    pub fn find_email(&self, value: &str) -> Option<&EmailAddress> {
        self.emails().find(|e| e.as_str() == value)
    }

    /// Set or replace the birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday`; any previous birthday is kept.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday.set_value(raw)
    }

    /// Days until the next birthday, or `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday().map(Birthday::days_until_next_occurrence)
    }

    /// Days from `today` until the next birthday, or `None` when unset.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday()
            .map(|b| b.days_until_next_occurrence_from(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let emails = self
            .emails()
            .map(Field::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self.birthday().map(Birthday::as_str).unwrap_or("-");

        write!(
            f,
            "{} | Phone: {} | Email: {} | Birthday: {}",
            self.name,
            if phones.is_empty() { "-" } else { phones.as_str() },
            if emails.is_empty() { "-" } else { emails.as_str() },
            birthday
        )
    }
}
