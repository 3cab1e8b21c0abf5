//! engine::http
//!
//! MMP engine adapter speaking JSON over HTTP.
//!
//! # Design
//!
//! This module implements the [`MessengerEngine`] trait against an MMP
//! server's REST surface:
//!
//! - `POST <server>/registrations` - start a registration
//! - `POST <server>/registrations/verify` - verify with a pincode
//! - `POST <server>/messages` - send a message
//! - `POST <server>/statusreports` - query delivery statuses
//!
//! Non-success responses carry a `{code, message}` error body which maps
//! directly onto [`EngineError`]. When the body cannot be decoded, the HTTP
//! status code stands in for the engine code.
//!
//! No retries and no backoff are implemented here; a failed call surfaces
//! immediately to the dispatcher.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::traits::{EngineError, MessengerEngine, StatusReport};

/// User-Agent header value for engine requests.
const USER_AGENT_VALUE: &str = "messenger-cli";

/// Error code used when the transport itself fails.
const NETWORK_CODE: &str = "NETWORK";

/// Error code used when a success response cannot be decoded.
const PROTOCOL_CODE: &str = "PROTOCOL";

/// MMP engine implementation over HTTP.
#[derive(Debug, Default)]
pub struct MmpEngine {
    /// HTTP client for making requests
    client: Client,
}

/// Error body returned by the MMP server on failures.
#[derive(Debug, Deserialize)]
struct MmpErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct StartRegistrationRequest<'a> {
    msisdn: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyRegistrationRequest<'a> {
    msisdn: &'a str,
    pincode: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyRegistrationResponse {
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    msisdn: &'a str,
    password: &'a str,
    message: &'a str,
    recipients: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageResponse {
    message_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReportsRequest<'a> {
    msisdn: &'a str,
    password: &'a str,
    message_ids: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusReportsResponse {
    status_reports: Vec<StatusReport>,
}

impl MmpEngine {
    /// Create a new engine adapter.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    async fn post<B: Serialize>(&self, url: String, body: &B) -> Result<Response, EngineError> {
        self.client
            .post(url)
            .headers(Self::headers())
            .json(body)
            .send()
            .await
            .map_err(|e| EngineError::new(NETWORK_CODE, e.to_string()))
    }

    /// Decode a JSON success body, or surface the server's error body.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        response: Response,
    ) -> Result<T, EngineError> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| {
                EngineError::new(
                    PROTOCOL_CODE,
                    format!("failed to decode engine response: {}", e),
                )
            })
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Check a response for success when no body is expected.
    async fn handle_empty_response(response: Response) -> Result<(), EngineError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> EngineError {
        let status = response.status();
        match response.json::<MmpErrorBody>().await {
            Ok(body) => EngineError::new(body.code, body.message),
            Err(_) => EngineError::new(status.as_u16().to_string(), "unknown engine error"),
        }
    }
}

fn endpoint(server: &str, path: &str) -> String {
    format!("{}/{}", server.trim_end_matches('/'), path)
}

#[async_trait]
impl MessengerEngine for MmpEngine {
    async fn start_registration(
        &self,
        server: &str,
        msisdn: &str,
        email: &str,
    ) -> Result<(), EngineError> {
        let response = self
            .post(
                endpoint(server, "registrations"),
                &StartRegistrationRequest { msisdn, email },
            )
            .await?;
        Self::handle_empty_response(response).await
    }

    async fn verify_registration(
        &self,
        server: &str,
        msisdn: &str,
        pincode: &str,
    ) -> Result<String, EngineError> {
        let response = self
            .post(
                endpoint(server, "registrations/verify"),
                &VerifyRegistrationRequest { msisdn, pincode },
            )
            .await?;
        let verified: VerifyRegistrationResponse = Self::handle_response(response).await?;
        Ok(verified.password)
    }

    async fn send_message(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message: &str,
        recipients: &[String],
    ) -> Result<String, EngineError> {
        let response = self
            .post(
                endpoint(server, "messages"),
                &SendMessageRequest {
                    msisdn,
                    password,
                    message,
                    recipients,
                },
            )
            .await?;
        let sent: SendMessageResponse = Self::handle_response(response).await?;
        Ok(sent.message_id)
    }

    async fn status_reports(
        &self,
        server: &str,
        msisdn: &str,
        password: &str,
        message_ids: &[String],
    ) -> Result<Vec<StatusReport>, EngineError> {
        let response = self
            .post(
                endpoint(server, "statusreports"),
                &StatusReportsRequest {
                    msisdn,
                    password,
                    message_ids,
                },
            )
            .await?;
        let reports: StatusReportsResponse = Self::handle_response(response).await?;
        Ok(reports.status_reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://mmp.example.com/", "messages"),
            "https://mmp.example.com/messages"
        );
        assert_eq!(
            endpoint("https://mmp.example.com", "messages"),
            "https://mmp.example.com/messages"
        );
    }
}
