//! The in-memory contact store.
//!
//! Records are kept in insertion order so that pages are stable between
//! calls. Persistence goes through a [`crate::storage::RecordStorage`].

mod contact_store;

pub use contact_store::ContactStore;
