// ABOUTME: Client for the request-type ("tipoSolicitud") lookup endpoint
// ABOUTME: Read-only collection used to populate the request-type select
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ApiClient;
use solicitudes_core::constants::endpoints;
use solicitudes_core::errors::AppResult;
use solicitudes_core::models::TipoSolicitud;

/// Request-type lookup under `/tipoSolicitud`
#[derive(Debug, Clone)]
pub struct TiposSolicitudApi {
    client: ApiClient,
}

impl TiposSolicitudApi {
    /// Wrap the shared client
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every request type
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a type list
    pub async fn list(&self) -> AppResult<Vec<TipoSolicitud>> {
        let url = self.client.resource_url(endpoints::TIPOS_SOLICITUD, None)?;
        self.client.get_json(url).await
    }
}
