//! Decoding of user input into commands.

use crate::error::{CommandError, CommandResult};

/// Every accepted command word, offered when a single letter is typed.
const COMMAND_WORDS: [&str; 14] = [
    "add",
    "birthday",
    "celebration",
    "change",
    "close",
    "delete",
    "email",
    "exit",
    "find",
    "goodbye",
    "hello",
    "help",
    "phone",
    "show all",
];

/// Which attribute a `change` command edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeField {
    Phone,
    Email,
    Birthday,
}

/// A decoded user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,

    /// `help` or `helper`
    Help,

    /// `add <name> [phones...] [email] [birthday]`
    Add {
        name: String,
        phones: Vec<String>,
        email: Option<String>,
        birthday: Option<String>,
    },

    /// `birthday <name> <date>`
    Birthday { name: String, date: String },

    /// `change <name> phone|email|birthday <value>`
    Change {
        name: String,
        field: ChangeField,
        value: String,
    },

    /// `delete <name>`
    Delete { name: String },

    /// `find <query...>`
    Find { query: String },

    /// `phone <name>`
    Phone { name: String },

    /// `email <name>`
    Email { name: String },

    /// `show all [page]`
    ShowAll { page: usize },

    /// `celebration in <days>`
    Celebration { days: i64 },

    /// `exit`, `close` or `goodbye`
    Exit,

    /// A lone letter: the commands that start with it
    Suggest { commands: Vec<&'static str> },
}

impl Command {
    /// Parse one line of input.
    ///
    /// The command word is case-insensitive; arguments are kept as typed.
    ///
    /// # Errors
    ///
    /// - `CommandError::Usage` when the line is empty or arguments are missing
    /// - `CommandError::UnknownCommand` when the first word is not a command
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let Some(action) = words.next() else {
            return Err(usage("Enter a command. Type 'help' for a list of available commands."));
        };
        let args: Vec<&str> = words.collect();

        if args.is_empty() && action.chars().count() == 1 {
            let commands = completions(action);
            if !commands.is_empty() {
                return Ok(Self::Suggest { commands });
            }
        }

        match action.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "help" | "helper" => Ok(Self::Help),
            "exit" | "close" | "goodbye" => Ok(Self::Exit),
            "add" => Self::parse_add(&args),
            "birthday" => match args.as_slice() {
                [name, date, ..] => Ok(Self::Birthday {
                    name: name.to_string(),
                    date: date.to_string(),
                }),
                _ => Err(usage("Usage: birthday <name> <dd.mm.yy>")),
            },
            "change" => Self::parse_change(&args),
            "delete" => single_name(&args, "Usage: delete <name>")
                .map(|name| Self::Delete { name }),
            "find" => {
                if args.is_empty() {
                    return Err(usage("Usage: find <name or phone fragment>"));
                }
                Ok(Self::Find {
                    query: args.join(" "),
                })
            }
            "phone" => single_name(&args, "Usage: phone <name>").map(|name| Self::Phone { name }),
            "email" => single_name(&args, "Usage: email <name>").map(|name| Self::Email { name }),
            "show" => match args.as_slice() {
                [all, rest @ ..] if all.eq_ignore_ascii_case("all") => {
                    let page = rest
                        .first()
                        .and_then(|p| p.parse::<usize>().ok())
                        .unwrap_or(1);
                    Ok(Self::ShowAll { page })
                }
                _ => Err(usage("Usage: show all [page]")),
            },
            "celebration" => match args.as_slice() {
                [word, days, ..] if word.eq_ignore_ascii_case("in") => days
                    .parse::<i64>()
                    .ok()
                    .filter(|d| *d >= 0)
                    .map(|days| Self::Celebration { days })
                    .ok_or_else(|| usage("Usage: celebration in <days>")),
                _ => Err(usage("Usage: celebration in <days>")),
            },
            _ => Err(CommandError::UnknownCommand(action.to_string())),
        }
    }

    /// Split `add` arguments into phones, email and birthday.
    ///
    /// A token with `@` or any letter is the email, a token with three
    /// dot-separated parts is the birthday, and everything else is a phone.
    /// When several tokens qualify as email or birthday the last one wins.
    fn parse_add(args: &[&str]) -> CommandResult<Self> {
        let [name, rest @ ..] = args else {
            return Err(usage(
                "Usage: add <name> <phone> [more phones] [email] [dd.mm.yy]",
            ));
        };
        if rest.is_empty() {
            return Err(usage(
                "Please provide a name and at least one phone number, email or birthday.",
            ));
        }

        let mut phones = Vec::new();
        let mut email = None;
        let mut birthday = None;

        for token in rest {
            if token.contains('@') || token.chars().any(char::is_alphabetic) {
                email = Some(token.to_string());
            } else if token.split('.').count() == 3 {
                birthday = Some(token.to_string());
            } else {
                phones.push(token.to_string());
            }
        }

        Ok(Self::Add {
            name: name.to_string(),
            phones,
            email,
            birthday,
        })
    }

    fn parse_change(args: &[&str]) -> CommandResult<Self> {
        let [name, field, value, ..] = args else {
            return Err(usage("Usage: change <name> phone|email|birthday <new value>"));
        };

        let field = match field.to_lowercase().as_str() {
            "phone" => ChangeField::Phone,
            "email" => ChangeField::Email,
            "birthday" => ChangeField::Birthday,
            other => {
                return Err(usage(format!(
                    "Cannot change '{}'. Use phone, email or birthday.",
                    other
                )))
            }
        };

        Ok(Self::Change {
            name: name.to_string(),
            field,
            value: value.to_string(),
        })
    }
}

/// Command words starting with `prefix`, ignoring case.
fn completions(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_lowercase();
    COMMAND_WORDS
        .iter()
        .copied()
        .filter(|word| word.starts_with(&prefix))
        .collect()
}

fn usage(message: impl Into<String>) -> CommandError {
    CommandError::Usage(message.into())
}

fn single_name(args: &[&str], message: &str) -> CommandResult<String> {
    args.first()
        .map(|name| name.to_string())
        .ok_or_else(|| usage(message))
}
