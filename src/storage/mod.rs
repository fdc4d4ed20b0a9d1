//! Persistence of the contact book.
//!
//! [`RecordStorage`] is the seam between the in-memory store and wherever the
//! records live between runs. [`BincodeFileStorage`] is the on-disk
//! implementation used by the binary.

mod bincode_file;
mod traits;

pub use bincode_file::BincodeFileStorage;
pub use traits::RecordStorage;
