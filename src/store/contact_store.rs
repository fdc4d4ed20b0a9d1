//! Contact store: name-keyed records with pagination, search and persistence.

use crate::config::{Config, DEFAULT_PAGE_SIZE};
use crate::error::StorageResult;
use crate::models::Record;
use crate::storage::{BincodeFileStorage, RecordStorage};
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// The contact book: every record keyed by its name.
///
/// Names are unique; adding a record whose name already exists replaces the
/// old record in place, keeping its position. The store owns its records
/// exclusively and hands out borrows.
///
/// Only [`ContactStore::delete`] writes to storage on its own. Additions and
/// edits are persisted when the caller asks for [`ContactStore::save`].
pub struct ContactStore {
    records: Vec<Record>,
    page_size: usize,
    storage: Box<dyn RecordStorage>,
}

impl ContactStore {
    /// Create an empty store backed by a bincode file at `path`.
    ///
    /// Nothing is read from disk until [`ContactStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_page_size(path, DEFAULT_PAGE_SIZE)
    }

    /// Create an empty file-backed store with a custom page size.
    pub fn with_page_size(path: impl Into<PathBuf>, page_size: usize) -> Self {
        Self::with_storage(Box::new(BincodeFileStorage::new(path)), page_size)
    }

    /// Create an empty store over any storage backend.
    ///
    /// A page size of 0 is treated as 1.
    pub fn with_storage(storage: Box<dyn RecordStorage>, page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            page_size: page_size.max(1),
            storage,
        }
    }

    /// Build a store from configuration and load whatever is persisted.
    ///
    /// Load failures are logged and leave the store empty; startup never
    /// fails because of a missing or damaged file.
    pub fn open(config: &Config) -> Self {
        let mut store = Self::with_page_size(&config.book_path, config.page_size);
        if let Err(e) = store.load() {
            warn!("Starting with an empty contact book: {}", e);
        }
        store
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!("Replacing contact {}", record.name());
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!("Adding contact {}", record.name());
                self.records.push(record);
                None
            }
        }
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Find a record by exact name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove a record by name and persist the store immediately.
    ///
    /// Deleting an unknown name is a no-op and does not touch storage.
    /// If saving fails the record is still gone from memory and the error
    /// is returned.
    pub fn delete(&mut self, name: &str) -> StorageResult<Option<Record>> {
        let Some(index) = self.position(name) else {
            debug!("Delete ignored, no contact named {}", name);
            return Ok(None);
        };

        let removed = self.records.remove(index);
        info!("Deleted contact {}", name);
        self.save()?;
        Ok(Some(removed))
    }

    /// Case-insensitive substring search over names and phone numbers.
    ///
    /// A record is listed once if its name matches and once more for every
    /// phone that matches, so the same record can appear several times.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        let mut results = Vec::new();

        for record in &self.records {
            if record.name().as_str().to_lowercase().contains(&query) {
                results.push(record);
            }
            for phone in record.phones() {
                if phone.as_str().to_lowercase().contains(&query) {
                    results.push(record);
                }
            }
        }

        results
    }

    /// Get a 1-indexed page of records in insertion order.
    ///
    /// Page 0 and pages past the end are empty.
    pub fn page(&self, page_number: usize) -> &[Record] {
        let Some(start) = page_number
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
        else {
            return &[];
        };
        if start >= self.records.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(self.records.len());
        &self.records[start..end]
    }

    /// Number of pages needed to list every record (0 when empty).
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    /// Records whose next birthday is at most `within_days` days after `today`.
    ///
    /// Returned in store order together with the day count.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        self.records
            .iter()
            .filter_map(|r| r.days_to_birthday_from(today).map(|days| (r, days)))
            .filter(|(_, days)| *days <= within_days)
            .collect()
    }

    /// Write every record to storage.
    ///
    /// A failure is logged and returned; the in-memory store is unaffected.
    pub fn save(&self) -> StorageResult<()> {
        match self.storage.save(&self.records) {
            Ok(()) => {
                info!(
                    "Saved {} contacts to {}",
                    self.records.len(),
                    self.storage.location()
                );
                Ok(())
            }
            Err(e) => {
                error!("Error saving to {}: {}", self.storage.location(), e);
                Err(e)
            }
        }
    }

    /// Replace the in-memory records with those in storage.
    ///
    /// Returns the number of records loaded. Nothing stored yet yields an
    /// empty store. On any other failure the store is left empty and the
    /// error is returned for the caller to report.
    pub fn load(&mut self) -> StorageResult<usize> {
        self.records.clear();

        let loaded = self.storage.load().map_err(|e| {
            warn!("Error reading from {}: {}", self.storage.location(), e);
            e
        })?;

        for record in loaded {
            self.add(record);
        }

        info!(
            "Loaded {} contacts from {}",
            self.records.len(),
            self.storage.location()
        );
        Ok(self.records.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Names of all records in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Where the records are persisted.
    pub fn location(&self) -> String {
        self.storage.location()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("location", &self.storage.location())
            .field("page_size", &self.page_size)
            .field("records", &self.records.len())
            .finish()
    }
}
