//! Data models for the contact book.
//!
//! A [`Record`] aggregates one contact's name, phone numbers, email slots and
//! optional birthday.

pub mod record;

pub use record::Record;
