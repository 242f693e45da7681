//! HTTP transport seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: [`BrowserTransport`] reports a transport
//! error, and tests substitute their own [`Transport`].

#![allow(clippy::unused_async)]

use std::future::Future;

use super::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing request, fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an [`ApiRequest`] and returns whatever the server answered.
///
/// Non-2xx statuses are replies, not errors; only failures to obtain a reply
/// at all surface as [`TransportError`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiReply, TransportError>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            }
            .header("Accept", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
