//! cli::commands
//!
//! Action handlers and the dispatch error taxonomy.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Resolves its required parameters (explicit flag, config default,
//!    interactive prompt)
//! 2. Prints a one-line summary of the resolved request
//! 3. Calls the engine and renders the result
//!
//! On an engine error the handler stops immediately via `?`; the dispatcher
//! prints the rendered error line and turns it into exit code 1. Handlers
//! never print partial success output after a failure.

mod register;
mod send;
mod status;
pub mod usage;

pub use register::register;
pub use send::send;
pub use status::status;

use std::collections::HashMap;
use std::io;

use thiserror::Error;

use crate::cli::args::Flag;
use crate::engine::EngineError;

/// A failed dispatch, rendered as the exact console error line.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Error during registration: {0}")]
    Registration(EngineError),

    #[error("Error during pincode verification: {0}")]
    Verification(EngineError),

    #[error("Error during sending message: {0}")]
    Send(EngineError),

    #[error("Error requesting a status report: {0}")]
    StatusReport(EngineError),

    #[error("Error reading input: {0}")]
    Input(#[from] io::Error),
}

/// Look up a flag's value in the argument map.
pub(crate) fn flag_value(arguments: &HashMap<String, String>, flag: Flag) -> Option<&str> {
    arguments.get(flag.token()).map(String::as_str)
}
