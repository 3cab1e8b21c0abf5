//! cli::commands::usage
//!
//! Static usage texts: one general overview plus one text per action,
//! selected by the help flag's co-occurring action flag.

use std::io::Write;

use crate::config::{Config, MSISDN_ENV_KEY, PWD_ENV_KEY, URL_ENV_KEY};
use crate::ui::output;

/// General usage, shown when the CLI is invoked without arguments.
pub fn general(out: &mut dyn Write) {
    output::print(out, "Usage:");
    output::print(out, "------");
    output::print(
        out,
        "messenger --init -h   : for more directions to initialize your phone number with a MMP server.",
    );
    output::print(
        out,
        "messenger --send -h   : for more directions to send messages.",
    );
    output::print(
        out,
        "messenger --status -h : for more directions to get the status for a specific message id.",
    );
}

/// Directions for the register action (`--init -h`).
pub fn register(config: &Config, out: &mut dyn Write) {
    output::print(out, "Usage:");
    output::print(out, "------");
    output::print(
        out,
        "messenger --init [-s MMP_SERVER_URI] [-u USER_PHONE_NR] [-e USER_EMAIL]\n",
    );
    server_flag_help(config, out, "");
    user_flag_help(out, "");
    output::print(
        out,
        "-e: Optional email address of the user in case of 'replytoinbox' (future release).",
    );
    output::print(out, "    If missing, it will be requested as input.\n");
}

/// Directions for the send action (`--send -h`, or `-h` alone).
pub fn send(config: &Config, out: &mut dyn Write) {
    output::print(out, "Usage:");
    output::print(out, "------");
    output::print(
        out,
        "messenger [--send] [-s MMP_SERVER_URI] [-u USER_PHONE_NR] [-p PASSWORD] -m MESSAGE -t RECIPIENTS\n",
    );
    server_flag_help(config, out, "");
    user_flag_help(out, "");
    password_flag_help(out, "");
    output::print(
        out,
        "-m: The message to be sent, encapsulated between double quotes\n",
    );
    output::print(out, "-t: Phone number(s) to which the message will be sent.");
    output::print(
        out,
        "    Comma-separated for multiple recipients. E.g. +32495123456,+32495654321\n",
    );
}

/// Directions for the status action (`--status -h`).
pub fn status(config: &Config, out: &mut dyn Write) {
    output::print(out, "Usage:");
    output::print(out, "------");
    output::print(
        out,
        "messenger --status [-s MMP_SERVER_URI] [-u USER_PHONE_NR] [-p PASSWORD] -id MESSAGE_IDS\n",
    );
    server_flag_help(config, out, " ");
    user_flag_help(out, " ");
    password_flag_help(out, " ");
    output::print(
        out,
        "-id: The message id to get the status for (returned by the send operation)",
    );
    output::print(
        out,
        "     Comma-separated for multiple message ids. E.g. 123456,123457\n",
    );
}

// The status text pads one extra column because `-id` is wider than the
// single-letter flags; `pad` keeps the continuation lines aligned.

fn server_flag_help(config: &Config, out: &mut dyn Write, pad: &str) {
    output::print(
        out,
        format_args!(
            "-s:{pad} Optional MMP server uri, default is '{}'.",
            config.url().unwrap_or_default()
        ),
    );
    output::print(
        out,
        format_args!(
            "   {pad} This can also be set via an environment variable named '{URL_ENV_KEY}'\n"
        ),
    );
}

fn user_flag_help(out: &mut dyn Write, pad: &str) {
    output::print(
        out,
        format_args!("-u:{pad} Optional phone number for which a registration will be done."),
    );
    output::print(
        out,
        format_args!(
            "   {pad} This can also be set via an environment variable named '{MSISDN_ENV_KEY}'."
        ),
    );
    output::print(
        out,
        format_args!("   {pad} If missing, it will be requested as input.\n"),
    );
}

fn password_flag_help(out: &mut dyn Write, pad: &str) {
    output::print(
        out,
        format_args!("-p:{pad} Optional password (received during initialisation)."),
    );
    output::print(
        out,
        format_args!(
            "   {pad} This can also be set via an environment variable named '{PWD_ENV_KEY}'."
        ),
    );
    output::print(
        out,
        format_args!("   {pad} If missing, it will be requested as input.\n"),
    );
}
