//! `fetch`-backed transport for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every request fails with a transport
//! error since there is no browser to send it from.
//!
//! Paths from `board::routes` are joined onto `API_BASE`, which is empty
//! (same origin) unless `ACTIVITIES_API_BASE` is set at compile time.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use board::api::{HttpTransport, RawReply, TransportError};
use board::routes::ApiRequest;

/// Backend origin prefix. Empty means same origin as the page.
pub const API_BASE: &str = match option_env!("ACTIVITIES_API_BASE") {
    Some(base) => base,
    None => "",
};

#[cfg(any(test, feature = "csr"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Transport that issues requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            use board::routes::Method;
            use gloo_net::http::Request;

            let url = endpoint_url(API_BASE, &request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            };
            let resp = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(RawReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError("not available outside the browser".to_owned()))
        }
    }
}
