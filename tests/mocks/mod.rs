pub mod mock_record_storage;

pub use mock_record_storage::MockRecordStorage;
