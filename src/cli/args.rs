//! cli::args
//!
//! Flag registry, argument map building, and action resolution.
//!
//! # Design
//!
//! The CLI's flags form a small closed set, so the registry is an enum with
//! one literal token per variant. Parsing builds a flat map from flag token
//! to value in two passes:
//!
//! 1. A pairing pass over adjacent tokens: any token starting with `-` is
//!    recorded with the following token as its value, even when that value
//!    itself starts with `-`. The final token is never paired (it has no
//!    follower), so an orphaned trailing value is dropped. This quirk is
//!    kept for compatibility with existing invocations.
//! 2. A flag-only scan over the whole list for the action/help tokens
//!    (`--init`, `--status`, `-h`), inserting them with an empty value.
//!    The scan runs after the pairing pass so a trailing action token is
//!    still captured, and its empty value overwrites any paired one.
//!
//! Duplicate flags resolve to the last occurrence (map insertion
//! overwrites).

use std::collections::HashMap;

/// Supported command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `-u` - user MSISDN (phone number)
    User,
    /// `-p` - password
    Password,
    /// `-e` - email address
    Email,
    /// `-m` - message body
    Message,
    /// `-t` - comma-separated recipients
    To,
    /// `-s` - MMP server URL
    Server,
    /// `-id` - comma-separated message ids
    MessageId,
    /// `--init` - registration action
    InitAction,
    /// `-h` - help
    HelpAction,
    /// `--send` - send action (the default, so the flag is optional)
    SendAction,
    /// `--status` - status query action
    StatusAction,
}

impl Flag {
    /// The literal command-line token for this flag.
    pub const fn token(self) -> &'static str {
        match self {
            Flag::User => "-u",
            Flag::Password => "-p",
            Flag::Email => "-e",
            Flag::Message => "-m",
            Flag::To => "-t",
            Flag::Server => "-s",
            Flag::MessageId => "-id",
            Flag::InitAction => "--init",
            Flag::HelpAction => "-h",
            Flag::SendAction => "--send",
            Flag::StatusAction => "--status",
        }
    }
}

/// Flags that take no value and may appear anywhere, including last.
const FLAG_ONLY: [Flag; 3] = [Flag::InitAction, Flag::StatusAction, Flag::HelpAction];

/// The mutually exclusive CLI modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print usage directions.
    Help,
    /// Register a phone number with the server.
    Init,
    /// Query delivery status reports.
    Status,
    /// Send a message (the default).
    Send,
}

/// Build the argument map from raw tokens.
pub fn to_map(tokens: &[String]) -> HashMap<String, String> {
    let mut arguments = HashMap::new();

    // Pairing pass. The upper bound excludes the last token.
    for window in tokens.windows(2) {
        if window[0].starts_with('-') {
            arguments.insert(window[0].clone(), window[1].clone());
        }
    }

    // Flag-only scan over the full list.
    for flag in FLAG_ONLY {
        if tokens.iter().any(|token| token == flag.token()) {
            arguments.insert(flag.token().to_string(), String::new());
        }
    }

    arguments
}

/// Resolve the requested action from the argument map.
///
/// Precedence: help, then init, then status; anything else is a send.
/// Conflicting action flags are silently resolved by that order.
pub fn resolve_action(arguments: &HashMap<String, String>) -> Action {
    if arguments.contains_key(Flag::HelpAction.token()) {
        Action::Help
    } else if arguments.contains_key(Flag::InitAction.token()) {
        Action::Init
    } else if arguments.contains_key(Flag::StatusAction.token()) {
        Action::Status
    } else {
        Action::Send
    }
}
