//! Persistence of the contact book through the bincode file backend.

mod fixtures;

use contact_book::storage::{BincodeFileStorage, RecordStorage};
use contact_book::store::ContactStore;
use contact_book::Config;
use fixtures::{mixed_records, sample_record};
use std::fs;
use tempfile::TempDir;

fn config_for(dir: &TempDir, page_size: usize) -> Config {
    Config {
        book_path: dir.path().join("address_book.dat"),
        page_size,
        log_level: "warn".to_string(),
    }
}

#[test]
fn test_round_trip_preserves_records_and_order() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let mut store = ContactStore::with_page_size(&config.book_path, config.page_size);
    for record in mixed_records() {
        store.add(record);
    }
    store.save().unwrap();

    let reopened = ContactStore::open(&config);
    let saved: Vec<_> = store.iter().cloned().collect();
    let restored: Vec<_> = reopened.iter().cloned().collect();
    assert_eq!(restored, saved);
}

#[test]
fn test_round_trip_keeps_placeholder_and_empty_lists() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let mut store = ContactStore::with_page_size(&config.book_path, 5);
    for record in mixed_records() {
        store.add(record);
    }
    store.save().unwrap();

    let reopened = ContactStore::open(&config);

    let nazar = reopened.find("Nazar").unwrap();
    assert!(nazar.email_slots().is_empty());
    assert!(nazar.birthday().is_none());

    let yulia = reopened.find("Yulia «Y» #3").unwrap();
    assert_eq!(yulia.email_slots().len(), 1);
    assert!(!yulia.email_slots()[0].is_present());
    assert_eq!(yulia.emails().count(), 0);
    assert_eq!(yulia.birthday().unwrap().as_str(), "29-02-00");

    let olha = reopened.find("Olha Kovalenko").unwrap();
    let phones: Vec<_> = olha.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["+380501234567", "+380671112233"]);
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let store = ContactStore::open(&config);
    assert!(store.is_empty());
    assert!(!config.book_path.exists());
}

#[test]
fn test_open_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);
    fs::write(&config.book_path, b"this is not a contact book").unwrap();

    let store = ContactStore::open(&config);
    assert!(store.is_empty());
}

#[test]
fn test_open_truncated_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let mut store = ContactStore::with_page_size(&config.book_path, 5);
    for record in mixed_records() {
        store.add(record);
    }
    store.save().unwrap();

    let bytes = fs::read(&config.book_path).unwrap();
    fs::write(&config.book_path, &bytes[..bytes.len() / 2]).unwrap();

    let reopened = ContactStore::open(&config);
    assert!(reopened.is_empty());
}

#[test]
fn test_open_file_with_impossible_length_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    // Valid header, then a name length far larger than the file
    let mut bytes = b"CBK\0".to_vec();
    bytes.push(1);
    bytes.extend_from_slice(&1u64.to_le_bytes());
    bytes.extend_from_slice(&(1u64 << 45).to_le_bytes());
    bytes.extend_from_slice(b"abc");
    fs::write(&config.book_path, bytes).unwrap();

    let mut store = ContactStore::open(&config);
    assert!(store.is_empty());

    store.add(sample_record("Alex"));
    store.save().unwrap();
    assert_eq!(ContactStore::open(&config).len(), 1);
}

#[test]
fn test_save_failure_keeps_store_usable() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        book_path: dir.path().join("missing").join("address_book.dat"),
        page_size: 5,
        log_level: "warn".to_string(),
    };

    let mut store = ContactStore::open(&config);
    store.add(sample_record("Alex"));
    assert!(store.save().is_err());

    store.add(sample_record("Olha"));
    assert_eq!(store.len(), 2);
    assert_eq!(store.search("ol").len(), 1);
}

#[test]
fn test_delete_is_on_disk_without_explicit_save() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let mut store = ContactStore::open(&config);
    store.add(sample_record("Alex"));
    store.add(sample_record("Olha"));
    store.save().unwrap();

    store.delete("Alex").unwrap();

    let on_disk = BincodeFileStorage::new(&config.book_path).load().unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].name().as_str(), "Olha");
}

#[test]
fn test_unsaved_additions_are_lost() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 5);

    let mut store = ContactStore::open(&config);
    store.add(sample_record("Alex"));
    drop(store);

    let reopened = ContactStore::open(&config);
    assert!(reopened.is_empty());
}

#[test]
fn test_page_size_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, 2);

    let mut store = ContactStore::open(&config);
    for name in ["a", "b", "c"] {
        store.add(sample_record(name));
    }
    assert_eq!(store.page_size(), 2);
    assert_eq!(store.total_pages(), 2);
}
