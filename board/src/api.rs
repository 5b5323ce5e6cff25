//! Typed client for the activities backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ActivityClient` turns the three REST calls into typed results. The byte
//! shuffling is delegated to an [`HttpTransport`]: `gloo-net` in the browser,
//! `reqwest` in the CLI, a scripted fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Failures split into transport failures (no usable response) and
//! application failures (a non-success status, optionally carrying a
//! server `detail` string). An unparseable success body is reported as
//! `Decode` and treated like a transport failure by callers.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::model::Catalog;
use crate::routes::{self, ApiRequest};

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw reply.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawReply, TransportError>;
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided detail for an application failure.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `true` for failures where the server never answered meaningfully.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Typed wrapper over a transport.
#[derive(Clone, Debug)]
pub struct ActivityClient<T> {
    transport: T,
}

impl<T: HttpTransport> ActivityClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Any transport, status, or body failure.
    pub async fn list(&self) -> Result<Catalog, ApiError> {
        let reply = self.transport.send(&routes::list()).await?;
        if !reply.is_success() {
            return Err(rejection(&reply));
        }
        Catalog::from_json(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Register `email` for `activity`; returns the server's message.
    ///
    /// # Errors
    ///
    /// Any transport, status, or body failure.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        let reply = self.transport.send(&routes::signup(activity, email)).await?;
        message_reply(&reply)
    }

    /// Remove `email` from `activity`; returns the server's message.
    ///
    /// # Errors
    ///
    /// Any transport, status, or body failure.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        let reply = self.transport.send(&routes::unregister(activity, email)).await?;
        message_reply(&reply)
    }
}

fn message_reply(reply: &RawReply) -> Result<Option<String>, ApiError> {
    if !reply.is_success() {
        return Err(rejection(reply));
    }
    let body: MessageBody = serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.message.filter(|m| !m.is_empty()))
}

// FastAPI validation errors carry `detail` as an array; only non-empty strings are shown.
fn rejection(reply: &RawReply) -> ApiError {
    let detail = match serde_json::from_str::<ErrorBody>(&reply.body) {
        Ok(ErrorBody { detail: Some(serde_json::Value::String(text)) }) if !text.is_empty() => Some(text),
        _ => None,
    };
    ApiError::Rejected { status: reply.status, detail }
}
