//! Performance benchmarks for the contact store.
//!
//! These benchmarks measure:
//! - Substring search over names and phones
//! - Page lookup at the start and end of the book
//! - Saving and loading the bincode contact file

use chrono::NaiveDate;
use contact_book::domain::ContactName;
use contact_book::models::Record;
use contact_book::store::ContactStore;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Build a file-backed store with `count` records, two phones each.
fn create_test_store(path: &Path, count: usize) -> ContactStore {
    let mut store = ContactStore::new(path);
    for i in 0..count {
        let mut record = Record::new(ContactName::new(format!("Contact {}", i)).unwrap());
        record.add_phone(&format!("050{:07}", i)).unwrap();
        record.add_phone(&format!("067{:07}", i * 7)).unwrap();
        if i % 3 == 0 {
            record.add_email(&format!("contact{}@ukr.net", i)).unwrap();
        }
        if i % 5 == 0 {
            record
                .set_birthday(&format!("{:02}.{:02}.90", i % 28 + 1, i % 12 + 1))
                .unwrap();
        }
        store.add(record);
    }
    store
}

/// Benchmark search across dataset sizes.
fn bench_search(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 5000].iter() {
        let store = create_test_store(&dir.path().join(format!("search_{}.dat", size)), *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.search(black_box("38050")).len());
        });
    }

    group.finish();
}

/// Benchmark fetching the first and last page of a large book.
fn bench_paging(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir.path().join("paging.dat"), 1000);
    let last = store.total_pages();

    c.bench_function("page_first", |b| b.iter(|| store.page(black_box(1)).len()));
    c.bench_function("page_last", |b| b.iter(|| store.page(black_box(last)).len()));
}

/// Benchmark the birthday window scan.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir.path().join("birthdays.dat"), 1000);
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    c.bench_function("upcoming_birthdays_30", |b| {
        b.iter(|| store.upcoming_birthdays(black_box(30), today).len())
    });
}

/// Benchmark a save followed by a fresh load of 1000 records.
fn bench_save_load(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save_load.dat");
    let store = create_test_store(&path, 1000);

    c.bench_function("save_1000", |b| b.iter(|| store.save().unwrap()));

    store.save().unwrap();
    c.bench_function("load_1000", |b| {
        b.iter(|| {
            let mut reopened = ContactStore::new(&path);
            reopened.load().unwrap()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_search,
        bench_paging,
        bench_upcoming_birthdays,
        bench_save_load
}

criterion_main!(benches);
