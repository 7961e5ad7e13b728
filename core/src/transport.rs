//! The network side of a heroes round-trip.
//!
//! # Design
//! `HeroService` never talks to a socket directly; it hands a built
//! `HttpRequest` to a `Transport` and parses whatever comes back. A response
//! with any status is a successful execution; only failures to obtain a
//! response at all are `TransportError`s. Tests substitute scripted
//! transports here.

use std::sync::Arc;

use async_trait::async_trait;
use ureq::{Agent, RequestBuilder};

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP request and resolves exactly once.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// `Transport` backed by a blocking `ureq` agent.
///
/// Each request runs on tokio's blocking pool, so callers stay async and
/// several requests may be in flight at once. Must be used from within a
/// tokio runtime.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // 4xx/5xx come back as data so `HeroClient` can interpret them.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tracing::trace!(
            method = request.method.as_str(),
            path = %request.path,
            "executing request"
        );
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::new(format!("request task failed: {e}")))?
    }
}

fn execute_blocking(agent: &Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let HttpRequest {
        method,
        path,
        headers,
        body,
    } = request;

    let result = match method {
        HttpMethod::Get => with_headers(agent.get(&path), &headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&path), &headers).call(),
        HttpMethod::Post => {
            let builder = with_headers(agent.post(&path), &headers);
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
        HttpMethod::Put => {
            let builder = with_headers(agent.put(&path), &headers);
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };

    let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::new(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}
