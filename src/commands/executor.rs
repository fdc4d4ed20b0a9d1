//! Running decoded commands against the contact store.

use super::parser::{ChangeField, Command};
use crate::domain::{Birthday, ContactName, EmailAddress, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::store::ContactStore;
use chrono::NaiveDate;
use tracing::warn;

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading commands.
    Reply(String),

    /// Print the text and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

const HELP_TEXT: &str = "Available commands:
  - add <name> <phone> [more phones] [email] [dd.mm.yy]: add a contact
  - birthday <name> <dd.mm.yy>: set a contact's birthday
  - change <name> phone|email|birthday <value>: change the first phone, email or the birthday
  - delete <name>: delete a contact
  - find <text>: contacts whose name or phone contains the text
  - phone <name>: phone numbers of a contact
  - email <name>: email addresses of a contact
  - show all [page]: list contacts page by page
  - celebration in <days>: birthdays within the next <days> days
  - hello, help
  - a single letter: list the commands starting with it
  - exit, close, goodbye: save and quit";

/// Run `command` against `store`, using `today` for birthday arithmetic.
///
/// `add`, `birthday` and `change` save the store after a successful edit.
/// A failed save does not undo the edit; the reply carries a warning.
///
/// # Errors
///
/// Returns `CommandError` for unknown contacts and rejected values. Save
/// failures are reported in the reply text instead. The store is left
/// consistent in every case.
pub fn execute(
    store: &mut ContactStore,
    command: Command,
    today: NaiveDate,
) -> CommandResult<Outcome> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => HELP_TEXT.to_string(),
        Command::Add {
            name,
            phones,
            email,
            birthday,
        } => add_contact(store, &name, &phones, email.as_deref(), birthday.as_deref(), today)?,
        Command::Birthday { name, date } => set_birthday(store, &name, &date, today)?,
        Command::Change { name, field, value } => change_contact(store, &name, field, &value)?,
        // A failed save still leaves the contact removed from memory
        Command::Delete { name } => match store.delete(&name) {
            Ok(Some(_)) => format!("Contact {} deleted.\nContact book saved.", name),
            Ok(None) => return Err(CommandError::ContactNotFound(name)),
            Err(e) => format!(
                "Contact {} deleted.\nWarning: contact book not saved: {}",
                name, e
            ),
        },
        Command::Find { query } => find_contacts(store, &query, today),
        Command::Phone { name } => {
            let record = find(store, &name)?;
            format!("Phone number for {}: {}", name, join_phones(record))
        }
        Command::Email { name } => {
            let record = find(store, &name)?;
            let emails = join_emails(record);
            if emails.is_empty() {
                format!("Email for {}: No emails", name)
            } else {
                format!("Email for {}: {}", name, emails)
            }
        }
        Command::ShowAll { page } => show_page(store, page, today)?,
        Command::Celebration { days } => celebrations(store, days, today),
        Command::Suggest { commands } => format!("Available commands: {}", commands.join(", ")),
        Command::Exit => {
            let mut text = "Good bye!".to_string();
            append_save_result(store, &mut text);
            return Ok(Outcome::Exit(text));
        }
    };

    Ok(Outcome::Reply(reply))
}

fn add_contact(
    store: &mut ContactStore,
    name: &str,
    phones: &[String],
    email: Option<&str>,
    birthday: Option<&str>,
    today: NaiveDate,
) -> CommandResult<String> {
    let mut record = Record::with_details(ContactName::new(name)?, birthday, None)?;
    for phone in phones {
        record.add_phone(phone)?;
    }
    if let Some(raw) = email {
        // A bad address is kept as an empty slot
        if let Err(e) = record.add_email(raw) {
            warn!("Contact {} added without a valid email: {}", name, e);
        }
    }

    let mut text = format!(
        "Contact {} added:\nName: {}\nPhone: {}\nEmail: {}\nBirthday: {}",
        name,
        record.name(),
        dash_if_empty(join_phones(&record)),
        dash_if_empty(join_emails(&record)),
        record.birthday().map(Birthday::as_str).unwrap_or("-"),
    );
    if let Some(days) = record.days_to_birthday_from(today) {
        text.push_str(&format!("\n{} days left until the next birthday.", days));
    }

    store.add(record);
    append_save_result(store, &mut text);
    Ok(text)
}

fn set_birthday(
    store: &mut ContactStore,
    name: &str,
    date: &str,
    today: NaiveDate,
) -> CommandResult<String> {
    let days = match store.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            record.days_to_birthday_from(today)
        }
        None => {
            let record = Record::with_details(ContactName::new(name)?, Some(date), None)?;
            let days = record.days_to_birthday_from(today);
            store.add(record);
            days
        }
    };

    let mut text = format!("Contact {} birthday set to {}", name, date);
    if let Some(days) = days {
        text.push_str(&format!("\n{} days left until the next birthday.", days));
    }
    append_save_result(store, &mut text);
    Ok(text)
}

fn change_contact(
    store: &mut ContactStore,
    name: &str,
    field: ChangeField,
    value: &str,
) -> CommandResult<String> {
    let record = store
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    let mut text = match field {
        ChangeField::Phone => {
            let current = record
                .phones()
                .first()
                .map(|p| p.as_str().to_string())
                .ok_or_else(|| {
                    CommandError::Usage(format!("Contact {} has no phone numbers", name))
                })?;
            record.edit_phone(&current, value)?;
            format!("Contact {} phone changed to {}", name, record.phones()[0])
        }
        ChangeField::Email => {
            let current = record
                .emails()
                .next()
                .map(|e| e.as_str().to_string())
                .ok_or_else(|| {
                    CommandError::Usage(format!("Contact {} has no email addresses", name))
                })?;
            record.edit_email(&current, value)?;
            format!("Contact {} email changed to {}", name, join_emails(record))
        }
        ChangeField::Birthday => {
            record.set_birthday(value)?;
            format!("Contact {} birthday changed to {}", name, value)
        }
    };

    append_save_result(store, &mut text);
    Ok(text)
}

fn find_contacts(store: &ContactStore, query: &str, today: NaiveDate) -> String {
    let results = store.search(query);
    if results.is_empty() {
        return format!("No contacts found for '{}'", query);
    }

    results
        .into_iter()
        .map(|record| {
            let mut line = format!(
                "{}: {} | {}",
                record.name(),
                join_phones(record),
                record.birthday().map(Birthday::as_str).unwrap_or("None")
            );
            if let Some(days) = record.days_to_birthday_from(today) {
                line.push_str(&format!(" | Birthday in {} days", days));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn show_page(store: &ContactStore, page: usize, today: NaiveDate) -> CommandResult<String> {
    let total = store.total_pages();
    if total == 0 {
        return Ok("The contact book is empty.".to_string());
    }
    if page < 1 || page > total {
        return Err(CommandError::Usage(format!(
            "Invalid page number. Please provide a number between 1 and {}.",
            total
        )));
    }

    let mut lines: Vec<String> = store
        .page(page)
        .iter()
        .map(|record| match record.days_to_birthday_from(today) {
            Some(days) => format!("{} | {} days left until the next birthday.", record, days),
            None => record.to_string(),
        })
        .collect();

    let mut footer = format!("\nPage {} of {} |", page, total);
    if page > 1 {
        footer.push_str(&format!(" Previous: 'show all {}' |", page - 1));
    }
    if page < total {
        footer.push_str(&format!(" Next: 'show all {}' |", page + 1));
    }
    lines.push(footer);

    Ok(lines.join("\n"))
}

fn celebrations(store: &ContactStore, days: i64, today: NaiveDate) -> String {
    let upcoming = store.upcoming_birthdays(days, today);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", days);
    }

    let lines: Vec<String> = upcoming
        .into_iter()
        .map(|(record, left)| {
            format!(
                "{}: {} | {} (in {} days). Don't forget to greet!",
                record.name(),
                join_phones(record),
                record.birthday().map(Birthday::as_str).unwrap_or("-"),
                left
            )
        })
        .collect();

    format!(
        "Upcoming birthdays in the next {} days:\n{}",
        days,
        lines.join("\n")
    )
}

fn find<'a>(store: &'a ContactStore, name: &str) -> CommandResult<&'a Record> {
    store
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn append_save_result(store: &ContactStore, text: &mut String) {
    match store.save() {
        Ok(()) => text.push_str("\nContact book saved."),
        Err(e) => text.push_str(&format!("\nWarning: contact book not saved: {}", e)),
    }
}

fn join_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_emails(record: &Record) -> String {
    record
        .emails()
        .map(EmailAddress::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn dash_if_empty(text: String) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    fn run(store: &mut ContactStore, line: &str) -> CommandResult<Outcome> {
        execute(store, Command::parse(line)?, today())
    }

    #[test]
    fn test_add_saves_and_reports() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));

        let outcome = run(&mut store, "add Olha 0501234567 olha@ukr.net 01.01.99").unwrap();
        let text = outcome.text();
        assert!(text.contains("Phone: +380501234567"));
        assert!(text.contains("Email: olha@ukr.net"));
        assert!(text.contains("1 days left"));
        assert!(text.contains("Contact book saved."));
        assert!(dir.path().join("book.dat").exists());
    }

    #[test]
    fn test_add_with_bad_phone_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));

        let err = run(&mut store, "add Olha 12345").unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_change_phone_edits_first_number() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));
        run(&mut store, "add Olha 0501234567 0671112233").unwrap();

        run(&mut store, "change Olha phone 0939998877").unwrap();
        let phones: Vec<_> = store
            .find("Olha")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        assert_eq!(phones, vec!["+380939998877", "+380671112233"]);
    }

    #[test]
    fn test_change_unknown_contact() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));
        let err = run(&mut store, "change Ghost phone 0501234567").unwrap_err();
        assert!(matches!(err, CommandError::ContactNotFound(_)));
    }

    #[test]
    fn test_show_all_rejects_out_of_range_page() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));
        run(&mut store, "add Olha 0501234567").unwrap();

        let text = run(&mut store, "show all").unwrap();
        assert!(text.text().contains("Page 1 of 1"));
        assert!(run(&mut store, "show all 2").is_err());
    }

    #[test]
    fn test_delete_reports_removal_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("missing").join("book.dat"));
        store.add(Record::new(ContactName::new("Alex").unwrap()));

        let outcome = run(&mut store, "delete Alex").unwrap();
        assert!(outcome.text().starts_with("Contact Alex deleted."));
        assert!(outcome.text().contains("Warning: contact book not saved"));
        assert!(store.find("Alex").is_none());
    }

    #[test]
    fn test_delete_saves() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));
        store.add(Record::new(ContactName::new("Alex").unwrap()));

        let outcome = run(&mut store, "delete Alex").unwrap();
        assert_eq!(outcome.text(), "Contact Alex deleted.\nContact book saved.");
    }

    #[test]
    fn test_single_letter_lists_commands() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));

        let outcome = run(&mut store, "c").unwrap();
        assert_eq!(
            outcome.text(),
            "Available commands: celebration, change, close"
        );
    }

    #[test]
    fn test_exit_outcome() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("book.dat"));
        let outcome = run(&mut store, "exit").unwrap();
        assert!(matches!(outcome, Outcome::Exit(_)));
        assert!(outcome.text().starts_with("Good bye!"));
    }
}
