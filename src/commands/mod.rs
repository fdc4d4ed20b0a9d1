//! Line-oriented command interface over the contact store.
//!
//! Input is decoded into an explicit [`Command`] by [`Command::parse`] and
//! run against a [`crate::store::ContactStore`] by [`execute`], which turns
//! the outcome into response text.

pub mod executor;
pub mod parser;

pub use executor::{execute, Outcome};
pub use parser::{ChangeField, Command};
