//! engine
//!
//! The messaging engine collaborator.
//!
//! # Design
//!
//! All MMP protocol work (registration, sending, status queries) lives
//! behind the [`MessengerEngine`] trait. The CLI never sees wire formats or
//! transport details; it receives domain results or an [`EngineError`] with
//! a machine-readable code and a human-readable message.
//!
//! Two implementations ship with the crate:
//!
//! - [`http::MmpEngine`] - the production adapter (JSON over HTTP)
//! - [`mock::MockEngine`] - deterministic in-memory engine for tests

pub mod http;
pub mod mock;
pub mod traits;

pub use traits::{EngineError, MessengerEngine, RecipientStatus, StatusReport};
