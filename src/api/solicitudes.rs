// ABOUTME: Client for the request ("solicitud") endpoints
// ABOUTME: List, fetch by code, create, delete by id, and CSV export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ApiClient;
use bytes::Bytes;
use solicitudes_core::constants::endpoints;
use solicitudes_core::errors::AppResult;
use solicitudes_core::models::{NuevaSolicitud, Solicitud};

/// Request endpoints under `/solicitudes`
#[derive(Debug, Clone)]
pub struct SolicitudesApi {
    client: ApiClient,
}

impl SolicitudesApi {
    /// Wrap the shared client
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full collection; no pagination, no server-side filtering
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a request list
    pub async fn list(&self) -> AppResult<Vec<Solicitud>> {
        let url = self.client.resource_url(endpoints::SOLICITUDES, None)?;
        self.client.get_json(url).await
    }

    /// Fetch one request by its human-readable code
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown codes, or any transport error
    pub async fn get_by_codigo(&self, codigo: &str) -> AppResult<Solicitud> {
        let url = self
            .client
            .resource_url(endpoints::SOLICITUDES, Some(codigo))?;
        self.client.get_json(url).await
    }

    /// Create a request; the answer must carry the new identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the answer has no `id`
    pub async fn create(&self, solicitud: &NuevaSolicitud) -> AppResult<Solicitud> {
        let url = self.client.resource_url(endpoints::SOLICITUDES, None)?;
        self.client.post_json(url, solicitud).await
    }

    /// Delete a request by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self
            .client
            .resource_url(endpoints::SOLICITUDES, Some(&id.to_string()))?;
        self.client.delete(url).await
    }

    /// Download the backend-generated CSV as opaque bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails
    pub async fn export_csv(&self) -> AppResult<Bytes> {
        let url = self
            .client
            .resource_url(endpoints::SOLICITUDES_EXPORT, None)?;
        self.client.get_bytes(url).await
    }
}
