//! The `Field` capability shared by all validated scalar attributes.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single validated scalar attribute attached to a record.
///
/// Implementors are value objects: a value that exists has already passed
/// its format rule. Parsing is a pure function of the raw input.
pub trait Field: Sized {
    /// Validate and normalize raw input.
    ///
    /// # Errors
    ///
    /// Returns the variant-specific `ValidationError` when the input is rejected.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The stored (normalized) value.
    fn as_str(&self) -> &str;
}

/// A slot that may or may not hold a validated field value.
///
/// `set_value` only ever replaces the content with a value that passed
/// validation. A rejected input leaves the previous content in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSlot<F>(Option<F>);

impl<F: Field> FieldSlot<F> {
    /// Create a slot holding no value.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Create a slot holding an already validated value.
    pub fn filled(value: F) -> Self {
        Self(Some(value))
    }

    /// Validate `raw` and store it on success.
    ///
    /// # Errors
    ///
    /// Returns the rejection from `F::parse`; the slot is left unchanged.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        let value = F::parse(raw)?;
        self.0 = Some(value);
        Ok(())
    }

    /// Get the stored value, if any.
    pub fn get_value(&self) -> Option<&F> {
        self.0.as_ref()
    }

    /// Get the stored value as a string slice, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().map(Field::as_str)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl<F: Field> Default for FieldSlot<F> {
    fn default() -> Self {
        Self::empty()
    }
}

// Serde support - serialize as an optional string
impl<F: Field> Serialize for FieldSlot<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - re-validate the stored string on the way back in
impl<'de, F: Field> Deserialize<'de> for FieldSlot<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => F::parse(&s)
                .map(Self::filled)
                .map_err(serde::de::Error::custom),
            None => Ok(Self::empty()),
        }
    }
}
