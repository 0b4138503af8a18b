// ABOUTME: REST client layer for the Solicitudes backend
// ABOUTME: Shared HTTP plumbing plus one thin client per resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # API Client Layer
//!
//! [`ApiClient`] owns the `reqwest` client and the base URL, maps transport
//! and status failures onto [`AppError`], and logs every call through
//! [`AppLogger`]. The resource clients ([`SolicitudesApi`], [`ContactosApi`],
//! [`MarcasApi`], [`TiposSolicitudApi`]) only know their paths and types.
//!
//! No retries, no timeouts: each call is a single round trip.

/// Contact endpoints
pub mod contactos;
/// Brand lookup endpoint
pub mod marcas;
/// Request endpoints
pub mod solicitudes;
/// Request-type lookup endpoint
pub mod tipos_solicitud;

pub use contactos::ContactosApi;
pub use marcas::MarcasApi;
pub use solicitudes::SolicitudesApi;
pub use tipos_solicitud::TiposSolicitudApi;

use crate::config::ClientConfig;
use crate::logging::AppLogger;
use bytes::Bytes;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use solicitudes_core::constants::service_names::BACKEND;
use solicitudes_core::errors::{AppError, AppResult};
use std::time::Instant;
use tracing::debug;
use url::Url;

/// Shared HTTP plumbing for every resource client
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be constructed
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Base URL every path is resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` (e.g. `/contactos`) and an optional trailing key
    ///
    /// The key is percent-encoded as a single path segment.
    pub(crate) fn resource_url(&self, path: &str, key: Option<&str>) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| AppError::config(format!("'{}' cannot be a base URL", self.base_url)))?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(key) = key {
                segments.push(key);
            }
        }
        Ok(url)
    }

    /// GET a JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let response = self.send(Method::GET, url, |req| req).await?;
        decode(response).await
    }

    /// POST a JSON body and decode the JSON answer
    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, url, |req| req.json(body)).await?;
        decode(response).await
    }

    /// POST a JSON body where any 2xx answer is success
    ///
    /// The answer is decoded when it is present and has the expected shape;
    /// an empty or unexpected body yields `None`.
    pub(crate) async fn post_json_lenient<B, T>(&self, url: Url, body: &B) -> AppResult<Option<T>>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, url, |req| req.json(body)).await?;
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(error = %e, "Unreadable body on a successful create");
                return Ok(None);
            }
        };
        Ok(decode_optional(&bytes))
    }

    /// DELETE, ignoring whatever body comes back
    pub(crate) async fn delete(&self, url: Url) -> AppResult<()> {
        self.send(Method::DELETE, url, |req| req).await?;
        Ok(())
    }

    /// GET an opaque byte payload
    pub(crate) async fn get_bytes(&self, url: Url) -> AppResult<Bytes> {
        let response = self.send(Method::GET, url, |req| req).await?;
        response
            .bytes()
            .await
            .map_err(|e| AppError::unavailable(BACKEND, format!("reading body: {e}")))
    }

    /// Issue one request, log it, and turn non-2xx answers into errors
    async fn send<F>(&self, method: Method, url: Url, build: F) -> AppResult<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let path = url.path().to_owned();
        let started = Instant::now();
        let request = build(self.http.request(method.clone(), url));

        let result = request.send().await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_api_call(method.as_str(), &path, None, elapsed_ms);
                return Err(AppError::unavailable(BACKEND, e.to_string()).with_source(e));
            }
        };

        let status = response.status();
        AppLogger::log_api_call(method.as_str(), &path, Some(status.as_u16()), elapsed_ms);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(&method, &path, status, body))
    }
}

fn status_error(method: &Method, path: &str, status: StatusCode, body: String) -> AppError {
    let details = json!({
        "method": method.as_str(),
        "path": path,
        "status": status.as_u16(),
        "body": body,
    });
    if status == StatusCode::NOT_FOUND {
        return AppError::not_found(path.to_owned()).with_details(details);
    }
    AppError::external_service(BACKEND, format!("{method} {path} answered HTTP {status}"))
        .with_details(details)
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::unavailable(BACKEND, format!("reading body: {e}")))?;
    if bytes.is_empty() {
        return Err(AppError::serialization("empty response body"));
    }
    serde_json::from_slice(&bytes).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&bytes), "Undecodable response body");
        AppError::serialization(format!("unexpected response shape: {e}"))
    })
}

fn decode_optional<T: DeserializeOwned>(bytes: &[u8]) -> Option<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(bytes)
        .inspect_err(|e| {
            debug!(
                body = %String::from_utf8_lossy(bytes),
                error = %e,
                "Ignoring unexpected body on a successful create"
            );
        })
        .ok()
}
