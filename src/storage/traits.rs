use crate::error::StorageResult;
use crate::models::Record;

/// Storage backend for the contact book.
///
/// Provides abstraction over where records are persisted, enabling
/// different implementations (binary file, in-memory mock).
pub trait RecordStorage {
    /// Persist every record, replacing whatever was stored before.
    fn save(&self, records: &[Record]) -> StorageResult<()>;

    /// Load all records in their stored order.
    ///
    /// A backend with nothing stored yet returns an empty list, not an error.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Human-readable location of the stored data, for log messages.
    fn location(&self) -> String;
}
