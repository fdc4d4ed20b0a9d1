//! Test fixtures and sample data.
//!
//! Reusable builders for records used across the integration tests.

use contact_book::domain::ContactName;
use contact_book::models::Record;

/// Create a record with just a name.
pub fn sample_record(name: &str) -> Record {
    Record::new(ContactName::new(name).unwrap())
}

/// Create a record with the given phone numbers.
#[allow(dead_code)]
pub fn sample_record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = sample_record(name);
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

/// Three records covering the interesting phone/email/birthday combinations:
/// - a full record with two phones, an email and a birthday
/// - a phone-only record with an empty email list
/// - a record whose only email slot is an empty placeholder
#[allow(dead_code)]
pub fn mixed_records() -> Vec<Record> {
    let mut full = sample_record_with_phones("Olha Kovalenko", &["0501234567", "+38 (067) 111-22-33"]);
    full.add_email("olha.k@ukr.net").unwrap();
    full.set_birthday("16.10.93").unwrap();

    let phone_only = sample_record_with_phones("Nazar", &["0935556677"]);

    let mut placeholder = sample_record("Yulia «Y» #3");
    assert!(placeholder.add_email("not-an-address").is_err());
    placeholder.set_birthday("29-02-00").unwrap();

    vec![full, phone_only, placeholder]
}
