// ABOUTME: Client for the brand ("marca") lookup endpoint
// ABOUTME: Read-only collection used to populate the brand select
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ApiClient;
use solicitudes_core::constants::endpoints;
use solicitudes_core::errors::AppResult;
use solicitudes_core::models::Marca;

/// Brand lookup under `/marca`
#[derive(Debug, Clone)]
pub struct MarcasApi {
    client: ApiClient,
}

impl MarcasApi {
    /// Wrap the shared client
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every brand
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a brand list
    pub async fn list(&self) -> AppResult<Vec<Marca>> {
        let url = self.client.resource_url(endpoints::MARCAS, None)?;
        self.client.get_json(url).await
    }
}
