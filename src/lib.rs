//! Contact Book - a personal contact store with validated fields.
//!
//! Holds named records with normalized phone numbers, email addresses and an
//! optional birthday, lists them page by page, searches them by substring and
//! persists them to a binary file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone, email, birthday, name) and the `Field` slot
//! - **models**: The `Record` aggregate
//! - **store**: `ContactStore` with pagination, search and the persistence boundary
//! - **storage**: The `RecordStorage` seam and the bincode file backend
//! - **commands**: Command decoding and execution for the interactive binary
//! - **config**: Configuration from environment variables
//! - **error**: Error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, ContactName, EmailAddress, Field, FieldSlot, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use storage::{BincodeFileStorage, RecordStorage};
pub use store::ContactStore;
