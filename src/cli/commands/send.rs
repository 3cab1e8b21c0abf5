//! cli::commands::send
//!
//! Send a message to one or more recipients (`--send`, the default action).

use std::collections::HashMap;
use std::io::Write;

use super::{flag_value, DispatchError};
use crate::cli::args::Flag;
use crate::cli::resolve;
use crate::config::Config;
use crate::engine::MessengerEngine;
use crate::ui::output;
use crate::ui::prompts::LineSource;

/// Run the send action.
pub async fn send(
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
    let message = resolve::resolve_value(
        flag_value(arguments, Flag::Message),
        None,
        "message",
        input,
        out,
    )?;
    let to = resolve::resolve_value(
        flag_value(arguments, Flag::To),
        None,
        "recipient(s) (comma separated)",
        input,
        out,
    )?;
    // The resolved value is never absent, so the list is always Some. An
    // empty or nonsensical recipient list passes through to the engine.
    let recipients = resolve::split(Some(&to)).unwrap_or_default();
    let server = resolve::resolve_server(flag_value(arguments, Flag::Server), config.url());

    output::print(
        out,
        format_args!(
            "Trying to send message '{}' from user '{}' to recipients '{}' at server '{}'",
            message, user, to, server
        ),
    );

    let message_id = engine
        .send_message(&server, &user, &password, &message, &recipients)
        .await
        .map_err(DispatchError::Send)?;

    output::print(
        out,
        format_args!("Send message succeeded. Message id: {}", message_id),
    );
    Ok(())
}
