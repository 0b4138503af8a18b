// ABOUTME: Explicit dependency context handed to every view
// ABOUTME: Bundles configuration and the per-resource API clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::{ApiClient, ContactosApi, MarcasApi, SolicitudesApi, TiposSolicitudApi};
use crate::config::ClientConfig;
use crate::lifecycle::ViewScope;
use solicitudes_core::errors::AppResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Dependencies shared by the views
///
/// Views receive a clone at construction; nothing is reachable through a
/// global. Cloning is cheap: every client shares one HTTP connection pool.
///
/// # Dependencies
/// - `config`: resolved client configuration
/// - `solicitudes` / `contactos`: CRUD clients
/// - `marcas` / `tipos_solicitud`: lookup clients for the registration form
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<ClientConfig>,
    solicitudes: SolicitudesApi,
    contactos: ContactosApi,
    marcas: MarcasApi,
    tipos_solicitud: TiposSolicitudApi,
    shutdown: CancellationToken,
}

impl AppContext {
    /// Build every client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be constructed
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            solicitudes: SolicitudesApi::new(client.clone()),
            contactos: ContactosApi::new(client.clone()),
            marcas: MarcasApi::new(client.clone()),
            tipos_solicitud: TiposSolicitudApi::new(client),
            shutdown: CancellationToken::new(),
        })
    }

    /// Get the resolved configuration
    #[must_use]
    pub const fn config(&self) -> &Arc<ClientConfig> {
        &self.config
    }

    /// Get the request client
    #[must_use]
    pub const fn solicitudes(&self) -> &SolicitudesApi {
        &self.solicitudes
    }

    /// Get the contact client
    #[must_use]
    pub const fn contactos(&self) -> &ContactosApi {
        &self.contactos
    }

    /// Get the brand lookup client
    #[must_use]
    pub const fn marcas(&self) -> &MarcasApi {
        &self.marcas
    }

    /// Get the request-type lookup client
    #[must_use]
    pub const fn tipos_solicitud(&self) -> &TiposSolicitudApi {
        &self.tipos_solicitud
    }

    /// Open a lifetime scope for a new view activation
    ///
    /// The scope also closes when [`AppContext::shutdown`] is called.
    #[must_use]
    pub fn scope(&self, view: &'static str) -> ViewScope {
        ViewScope::with_parent(view, &self.shutdown)
    }

    /// Close every scope opened from this context or its clones
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
