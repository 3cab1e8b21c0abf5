//! cli::commands::status
//!
//! Query delivery status reports for sent messages (`--status`).
//!
//! Results render as a fixed-width table, one row per recipient across all
//! returned reports; a report with several recipients yields several rows
//! sharing the same message id.

use std::collections::HashMap;
use std::io::Write;

use super::{flag_value, DispatchError};
use crate::cli::args::Flag;
use crate::cli::resolve;
use crate::config::Config;
use crate::engine::MessengerEngine;
use crate::ui::output;
use crate::ui::prompts::LineSource;

/// Run the status action.
pub async fn status(
    arguments: &HashMap<String, String>,
    config: &Config,
    engine: &dyn MessengerEngine,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<(), DispatchError> {
    let user = resolve::resolve_value(
        flag_value(arguments, Flag::User),
        config.msisdn(),
        "MSISDN",
        input,
        out,
    )?;
    let password = resolve::resolve_value(
        flag_value(arguments, Flag::Password),
        config.password(),
        "password",
        input,
        out,
    )?;
    let ids = resolve::resolve_value(
        flag_value(arguments, Flag::MessageId),
        None,
        "message id(s) (Comma-separated)",
        input,
        out,
    )?;
    let id_list = resolve::split(Some(&ids)).unwrap_or_default();
    let server = resolve::resolve_server(flag_value(arguments, Flag::Server), config.url());

    output::print(
        out,
        format_args!(
            "Trying to retrieve the status for message id(s) '{}' sent by user '{}' at server '{}'",
            ids, user, server
        ),
    );

    let reports = engine
        .status_reports(&server, &user, &password, &id_list)
        .await
        .map_err(DispatchError::StatusReport)?;

    output::print(
        out,
        format_args!(
            "\nFound {} message(s) according the given id(s).\n",
            reports.len()
        ),
    );
    output::print(
        out,
        format_args!(
            "{:<15}{:<15}{:<15}{}",
            "MessageId", "Recipient", "StatusId", "Status"
        ),
    );
    output::print(
        out,
        format_args!(
            "{:<15}{:<15}{:<15}{}",
            "---------", "---------", "--------", "------"
        ),
    );
    for report in &reports {
        for recipient in &report.recipients {
            output::print(
                out,
                format_args!(
                    "{:<15}{:<15}{:<15}{}",
                    report.message_id, recipient.msisdn, recipient.status_id, recipient.status
                ),
            );
        }
    }
    output::print(out, "");
    Ok(())
}
