// ABOUTME: Client for the contact ("contacto") endpoints
// ABOUTME: List, create, delete by id, and list by owning request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ApiClient;
use solicitudes_core::constants::endpoints;
use solicitudes_core::errors::AppResult;
use solicitudes_core::models::{Contacto, NuevoContacto};

/// Contact endpoints under `/contactos`
#[derive(Debug, Clone)]
pub struct ContactosApi {
    client: ApiClient,
}

impl ContactosApi {
    /// Wrap the shared client
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every contact
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a contact list
    pub async fn list(&self) -> AppResult<Vec<Contacto>> {
        let url = self.client.resource_url(endpoints::CONTACTOS, None)?;
        self.client.get_json(url).await
    }

    /// Create a contact, standalone or owned by a request
    ///
    /// Any 2xx answer means the contact exists. The stored contact is
    /// returned when the backend echoes it; otherwise `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the backend answers non-2xx
    pub async fn create(&self, contacto: &NuevoContacto) -> AppResult<Option<Contacto>> {
        let url = self.client.resource_url(endpoints::CONTACTOS, None)?;
        self.client.post_json_lenient(url, contacto).await
    }

    /// Delete a contact by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self
            .client
            .resource_url(endpoints::CONTACTOS, Some(&id.to_string()))?;
        self.client.delete(url).await
    }

    /// Contacts owned by the request with identifier `solicitud_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not a contact list
    pub async fn list_by_solicitud(&self, solicitud_id: i64) -> AppResult<Vec<Contacto>> {
        let url = self
            .client
            .resource_url(endpoints::CONTACTOS, Some(&solicitud_id.to_string()))?;
        self.client.get_json(url).await
    }
}
