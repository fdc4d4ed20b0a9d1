//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated attributes of a
//! contact: names, phone numbers, email addresses and birthdays. Each value
//! object is checked at construction time, so an invalid value can never be
//! represented once it is inside a record.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{Field, FieldSlot};
pub use name::ContactName;
pub use phone::PhoneNumber;
