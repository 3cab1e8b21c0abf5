//! cli::commands::register
//!
//! Register a phone number with an MMP server (`--init`).
//!
//! Registration is a two-step exchange: the server first sends a pincode by
//! SMS, then the pincode is traded for the password used by the send and
//! status operations.

use std::collections::HashMap;
use std::io::Write;

use super::{flag_value, DispatchError};
use crate::cli::args::Flag;
use crate::cli::resolve;
use crate::config::Config;
use crate::engine::MessengerEngine;
use crate::ui::output;
use crate::ui::prompts::LineSource;

/// Run the register action.
pub async fn register(
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
    let email = resolve::resolve_value(
        flag_value(arguments, Flag::Email),
        None,
        "email",
        input,
        out,
    )?;
    let server = resolve::resolve_server(flag_value(arguments, Flag::Server), config.url());

    output::print(
        out,
        format_args!(
            "Trying to register user '{}' with email '{}' at server '{}'",
            user, email, server
        ),
    );

    engine
        .start_registration(&server, &user, &email)
        .await
        .map_err(DispatchError::Registration)?;

    output::prompt(
        out,
        "Registration initialization succeeded, enter pincode (received by SMS): ",
    );
    let pincode = input.read_line()?;

    let password = engine
        .verify_registration(&server, &user, &pincode)
        .await
        .map_err(DispatchError::Verification)?;

    output::print(
        out,
        format_args!("Password to be used for sending messages: {}", password),
    );
    Ok(())
}
