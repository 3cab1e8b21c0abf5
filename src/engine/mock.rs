//! engine::mock
//!
//! Mock engine implementation for deterministic testing.
//!
//! # Design
//!
//! The mock engine provides a deterministic implementation of the
//! [`MessengerEngine`] trait for use in tests. It returns canned results,
//! allows configuring failure scenarios per operation, and records every
//! call for verification.
//!
//! # Example
//!
//! ```
//! use messenger_cli::engine::mock::MockEngine;
//! use messenger_cli::engine::MessengerEngine;
//!
//! # tokio_test::block_on(async {
//! let engine = MockEngine::new();
//!
//! let id = engine
//!     .send_message("srv", "+321", "pwd", "hi", &["+322".to_string()])
//!     .await
//!     .unwrap();
//!
//! assert_eq!(id, "msg-1");
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{EngineError, MessengerEngine, StatusReport};

/// Mock engine for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping, so a clone can be
/// handed to the code under test while the original verifies calls.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    inner: Arc<Mutex<MockEngineInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockEngineInner {
    /// Password returned by verify_registration.
    password: String,
    /// Status reports returned by status_reports.
    reports: Vec<StatusReport>,
    /// Operation to fail (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
    /// Next message id suffix to assign.
    next_message_number: u64,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail start_registration with the given error.
    StartRegistration(EngineError),
    /// Fail verify_registration with the given error.
    VerifyRegistration(EngineError),
    /// Fail send_message with the given error.
    SendMessage(EngineError),
    /// Fail status_reports with the given error.
    StatusReports(EngineError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    StartRegistration {
        server: String,
        msisdn: String,
        email: String,
    },
    VerifyRegistration {
        server: String,
        msisdn: String,
        pincode: String,
    },
    SendMessage {
        server: String,
        msisdn: String,
        password: String,
        message: String,
        recipients: Vec<String>,
    },
    StatusReports {
        server: String,
        msisdn: String,
        password: String,
        message_ids: Vec<String>,
    },
}

impl MockEngine {
    /// Create a new mock engine.
    ///
    /// Defaults: verification returns `"password"`, sends return
    /// `"msg-<n>"` with n starting at 1, status queries return no reports.
    pub fn new() -> Self {
        let inner = MockEngineInner {
            password: "password".to_string(),
            reports: Vec::new(),
            fail_on: None,
            operations: Vec::new(),
            next_message_number: 1,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Set the password returned by `verify_registration`.
    pub fn set_password(&self, password: impl Into<String>) {
        self.lock().password = password.into();
    }

    /// Set the reports returned by `status_reports`.
    pub fn set_status_reports(&self, reports: Vec<StatusReport>) {
        self.lock().reports = reports;
    }

    /// Configure one operation to fail.
    pub fn set_fail_on(&self, fail_on: FailOn) {
        self.lock().fail_on = Some(fail_on);
    }

    /// All operations recorded so far.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockEngineInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl MessengerEngine for MockEngine {
    async fn start_registration(
        &self,
        server: &str,
        msisdn: &str,
        email: &str,
    ) -> Result<(), EngineError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::StartRegistration {
            server: server.to_string(),
            msisdn: msisdn.to_string(),
            email: email.to_string(),
        });
        if let Some(FailOn::StartRegistration(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(())
    }

    async fn verify_registration(
        &self,
        server: &str,
        msisdn: &str,
        pincode: &str,
    ) -> Result<String, EngineError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::VerifyRegistration {
            server: server.to_string(),
            msisdn: msisdn.to_string(),
            pincode: pincode.to_string(),
        });
        if let Some(FailOn::VerifyRegistration(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.password.clone())
    }

    async fn send_message(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message: &str,
        recipients: &[String],
    ) -> Result<String, EngineError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::SendMessage {
            server: server.to_string(),
            msisdn: msisdn.to_string(),
            password: password.to_string(),
            message: message.to_string(),
            recipients: recipients.to_vec(),
        });
        if let Some(FailOn::SendMessage(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        let id = format!("msg-{}", inner.next_message_number);
        inner.next_message_number += 1;
        Ok(id)
    }

    async fn status_reports(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message_ids: &[String],
    ) -> Result<Vec<StatusReport>, EngineError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::StatusReports {
            server: server.to_string(),
            msisdn: msisdn.to_string(),
            password: password.to_string(),
            message_ids: message_ids.to_vec(),
        });
        if let Some(FailOn::StatusReports(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.reports.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecipientStatus;

    #[tokio::test]
    async fn send_message_assigns_sequential_ids() {
        let engine = MockEngine::new();
        let to = vec!["+32495654321".to_string()];

        let first = engine.send_message("srv", "+321", "pwd", "a", &to).await.unwrap();
        let second = engine.send_message("srv", "+321", "pwd", "b", &to).await.unwrap();

        assert_eq!(first, "msg-1");
        assert_eq!(second, "msg-2");
    }

    #[tokio::test]
    async fn configured_failure_is_returned() {
        let engine = MockEngine::new();
        engine.set_fail_on(FailOn::SendMessage(EngineError::new("E1", "rejected")));

        let result = engine
            .send_message("srv", "+321", "pwd", "a", &["+322".to_string()])
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code, "E1");
        assert_eq!(err.message, "rejected");
    }

    #[tokio::test]
    async fn operations_are_recorded() {
        let engine = MockEngine::new();
        engine
            .start_registration("srv", "+321", "me@example.com")
            .await
            .unwrap();

        assert_eq!(
            engine.operations(),
            vec![MockOperation::StartRegistration {
                server: "srv".to_string(),
                msisdn: "+321".to_string(),
                email: "me@example.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn status_reports_returns_configured_reports() {
        let engine = MockEngine::new();
        engine.set_status_reports(vec![StatusReport {
            message_id: "msg-1".to_string(),
            recipients: vec![RecipientStatus {
                msisdn: "+322".to_string(),
                status_id: "1".to_string(),
                status: "DELIVERED".to_string(),
            }],
        }]);

        let reports = engine
            .status_reports("srv", "+321", "pwd", &["msg-1".to_string()])
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message_id, "msg-1");
    }
}
