//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Build the argument map and resolve the requested action
//! - Delegate to the action handlers
//! - Render dispatch errors and produce the process exit code
//!
//! # Architecture
//!
//! [`run`] is the whole dispatcher: it never exits the process itself but
//! returns the exit code, and it takes the engine, the line source, and the
//! output sink as capabilities, so tests drive the complete CLI in-process.

pub mod args;
pub mod commands;
pub mod resolve;

pub use args::{Action, Flag};

use std::io::Write;

use crate::config::Config;
use crate::engine::MessengerEngine;
use crate::ui::output;
use crate::ui::prompts::LineSource;

/// Run the CLI: parse `tokens`, dispatch, and return the exit code.
///
/// Exit code 0 means success or help displayed; 1 means a collaborator or
/// input failure, already rendered to `out`.
pub fn run(
    tokens: &[String],
    config: &Config,
    engine: &dyn MessengerEngine,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> u8 {
    if tokens.is_empty() {
        commands::usage::general(out);
        return 0;
    }

    let arguments = args::to_map(tokens);
    let action = args::resolve_action(&arguments);

    if action == Action::Help {
        if arguments.contains_key(Flag::InitAction.token()) {
            commands::usage::register(config, out);
        } else if arguments.contains_key(Flag::StatusAction.token()) {
            commands::usage::status(config, out);
        } else {
            commands::usage::send(config, out);
        }
        return 0;
    }

    // Handlers are async only because the engine trait is; each invocation
    // drives exactly one handler to completion.
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            output::print(out, format_args!("Error starting runtime: {}", err));
            return 1;
        }
    };

    let outcome = match action {
        Action::Init => runtime.block_on(commands::register(&arguments, config, engine, input, out)),
        Action::Status => runtime.block_on(commands::status(&arguments, config, engine, input, out)),
        _ => runtime.block_on(commands::send(&arguments, config, engine, input, out)),
    };

    match outcome {
        Ok(()) => 0,
        Err(err) => {
            output::print(out, err);
            1
        }
    }
}
