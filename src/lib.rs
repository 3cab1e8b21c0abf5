//! Messenger - a CLI front-end for the MMP messaging engine
//!
//! Messenger is a single-binary tool for registering a phone number with an
//! MMP server, sending mobile messages, and querying delivery status reports.
//!
//! # Architecture
//!
//! The codebase is layered:
//!
//! - [`cli`] - Command-line interface layer (argument map, action dispatch)
//! - [`config`] - Environment-derived defaults (server URL, MSISDN, password)
//! - [`engine`] - The messaging engine collaborator (trait, HTTP adapter, mock)
//! - [`ui`] - User interaction utilities (prompts, output sink)
//!
//! All protocol work happens behind the [`engine::MessengerEngine`] trait;
//! the CLI layer only resolves values, dispatches to a handler, and renders
//! results. The dispatcher returns the process exit code instead of exiting,
//! so tests can observe it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod ui;
