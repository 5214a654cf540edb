use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use crate::error::Cause;
use crate::Error;

pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<Response, Cause>> + Send + 'a>>;

/// A single outbound HTTP request.
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// What the transmitter needs back from the transport.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Canonical reason phrase for `status`, empty for unregistered codes
    pub reason: String,
    pub body: Bytes,
}

/// Issues one HTTP request and resolves once the response is fully read.
///
/// Any error returned here (connect, DNS, TLS, timeout) is reported to the
/// caller as `Error::Transmission`. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn execute(&self, request: Request) -> TransportFuture<'_>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transmission(e.into()))?;

        Ok(Self::from_client(client))
    }

    /// Reuse an already configured reqwest client (proxies, custom TLS, ...).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send(&self, request: Request) -> Result<Response, Cause> {
        let resp = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        // The outcome is settled by the status line alone
        let status = resp.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();

        // Drain the body so the connection goes back to the pool. A broken
        // body must not turn an accepted send into a failure.
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Dropping unreadable {} response body: {}", status, e);
                Bytes::new()
            }
        };

        Ok(Response {
            status,
            reason,
            body,
        })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: Request) -> TransportFuture<'_> {
        Box::pin(self.send(request))
    }
}
