//! engine::traits
//!
//! Engine trait definition for interacting with an MMP messaging server.
//!
//! # Design
//!
//! The `MessengerEngine` trait is async because engine operations involve
//! network I/O. All methods return `Result` with an [`EngineError`] carrying
//! the engine's machine-readable error code and message.
//!
//! The server URL is a per-call argument rather than constructor state: the
//! CLI resolves it independently for every invocation and the engine holds
//! no session between calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error reported by an engine operation.
///
/// Every failure mode of the collaborator (protocol rejection, transport
/// failure, malformed response) is collapsed into a code/message pair, which
/// is exactly what the CLI renders.
#[derive(Debug, Clone, Error)]
#[error("{code} - {message}")]
pub struct EngineError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl EngineError {
    /// Create an engine error from a code and a message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Delivery status of a message for a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientStatus {
    /// Recipient phone number.
    pub msisdn: String,
    /// Machine-readable status code.
    pub status_id: String,
    /// Human-readable status description.
    pub status: String,
}

/// Status report for one sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Identifier returned by the send operation.
    pub message_id: String,
    /// Per-recipient delivery statuses, in recipient order.
    pub recipients: Vec<RecipientStatus>,
}

/// Operations exposed by the MMP messaging engine.
///
/// # Example
///
/// ```ignore
/// use messenger_cli::engine::{EngineError, MessengerEngine};
///
/// async fn register(engine: &dyn MessengerEngine) -> Result<(), EngineError> {
///     engine
///         .start_registration("https://mmp.example.com", "+32495123456", "me@example.com")
///         .await
/// }
/// ```
#[async_trait]
pub trait MessengerEngine {
    /// Start the registration of `msisdn` with the server.
    ///
    /// The server responds out of band by sending a pincode via SMS.
    async fn start_registration(
        &self,
        server: &str,
        msisdn: &str,
        email: &str,
    ) -> Result<(), EngineError>;

    /// Complete a registration with the pincode received by SMS.
    ///
    /// Returns the password to use for subsequent send/status operations.
    async fn verify_registration(
        &self,
        server: &str,
        msisdn: &str,
        pincode: &str,
    ) -> Result<String, EngineError>;

    /// Send `message` to `recipients`, returning the assigned message id.
    async fn send_message(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message: &str,
        recipients: &[String],
    ) -> Result<String, EngineError>;

    /// Query delivery status reports for the given message ids.
    async fn status_reports(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message_ids: &[String],
    ) -> Result<Vec<StatusReport>, EngineError>;
}
