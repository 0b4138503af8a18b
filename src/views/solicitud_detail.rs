// ABOUTME: Request detail view fetched by code
// ABOUTME: Shows the request fields and, on demand, an overlay with its contacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log_failure;
use crate::context::AppContext;
use crate::lifecycle::{ScopeCloser, ViewScope};
use crate::loadable::Loadable;
use crate::ui;
use solicitudes_core::constants::labels;
use solicitudes_core::models::{Contacto, Solicitud};
use std::fmt::Write;
use tracing::info;

/// Request detail ("Información de la Solicitud")
#[derive(Debug)]
pub struct SolicitudDetailView {
    ctx: AppContext,
    scope: ViewScope,
    codigo: String,
    fetched: bool,
    solicitud: Loadable<Solicitud>,
    contactos: Loadable<Vec<Contacto>>,
    overlay_open: bool,
}

impl SolicitudDetailView {
    /// View name used in logs
    pub const VIEW: &'static str = "solicitud_detail";

    /// Activate the view for `codigo`; nothing is fetched until [`Self::load`]
    #[must_use]
    pub fn new(ctx: AppContext, codigo: impl Into<String>) -> Self {
        let scope = ctx.scope(Self::VIEW);
        Self {
            ctx,
            scope,
            codigo: codigo.into(),
            fetched: false,
            solicitud: Loadable::Pending,
            contactos: Loadable::Pending,
            overlay_open: false,
        }
    }

    /// Code this activation was opened with
    #[must_use]
    pub fn codigo(&self) -> &str {
        &self.codigo
    }

    /// Primary fetch; only the first call per activation reaches the backend
    pub async fn load(&mut self) -> bool {
        if self.fetched {
            return self.solicitud.is_ready();
        }
        self.fetched = true;

        let result = self
            .scope
            .run("get_by_codigo", self.ctx.solicitudes().get_by_codigo(&self.codigo))
            .await;
        match result {
            Ok(solicitud) => {
                info!(codigo = %self.codigo, solicitud.id = solicitud.id, "Request loaded");
                self.solicitud = Loadable::Ready(solicitud);
            }
            Err(e) if e.is_cancelled() => log_failure(&self.scope, "get_by_codigo", &e),
            Err(e) => {
                log_failure(&self.scope, "get_by_codigo", &e);
                self.solicitud = Loadable::Failed(e.to_string());
            }
        }
        self.solicitud.is_ready()
    }

    /// Primary fetch state
    #[must_use]
    pub const fn solicitud(&self) -> &Loadable<Solicitud> {
        &self.solicitud
    }

    /// Fetch the request's contacts and open the overlay
    ///
    /// Every call refetches. Before the request itself is loaded this does
    /// nothing; on failure the overlay is left as it was.
    pub async fn view_contacts(&mut self) -> bool {
        let Some(solicitud_id) = self.solicitud.ready().map(|s| s.id) else {
            return false;
        };

        let result = self
            .scope
            .run(
                "list_by_solicitud",
                self.ctx.contactos().list_by_solicitud(solicitud_id),
            )
            .await;
        match result {
            Ok(contactos) => {
                self.contactos = Loadable::Ready(contactos);
                self.overlay_open = true;
            }
            Err(e) if e.is_cancelled() => log_failure(&self.scope, "list_by_solicitud", &e),
            Err(e) => {
                log_failure(&self.scope, "list_by_solicitud", &e);
                self.contactos = Loadable::Failed(e.to_string());
            }
        }
        self.overlay_open
    }

    /// State of the last contacts fetch
    #[must_use]
    pub const fn contactos(&self) -> &Loadable<Vec<Contacto>> {
        &self.contactos
    }

    /// Whether the contacts overlay is shown
    #[must_use]
    pub const fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Close the contacts overlay ("Cerrar")
    pub fn close_contacts(&mut self) {
        self.overlay_open = false;
    }

    /// Render the detail, plus the overlay when open
    ///
    /// Anything but a loaded request renders the loading placeholder.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Información de la Solicitud\n\n");
        let Some(solicitud) = self.solicitud.ready() else {
            out.push_str(labels::LOADING);
            out.push('\n');
            return out;
        };

        let fecha = solicitud
            .fecha_envio
            .map(|f| f.to_string())
            .unwrap_or_default();
        for (label, value) in [
            ("Código", solicitud.codigo.as_str()),
            ("Marca", solicitud.marca()),
            ("Tipo de Solicitud", solicitud.tipo()),
            ("Fecha de Envío", fecha.as_str()),
            ("Nombre de Contacto", solicitud.nombre_contacto.as_str()),
            ("Número de Contacto", solicitud.numero_contacto.as_str()),
        ] {
            let _ = writeln!(out, "{}", ui::field(label, value));
        }

        if let (true, Some(contactos)) = (self.overlay_open, self.contactos.ready()) {
            out.push('\n');
            let lines: Vec<String> = if contactos.is_empty() {
                vec![labels::NO_CONTACTOS.to_owned()]
            } else {
                contactos.iter().map(ToString::to_string).collect()
            };
            out.push_str(&ui::overlay("Contactos Asociados", lines));
        }
        out
    }

    /// Close the view; in-flight calls are discarded
    pub fn close(&self) {
        self.scope.close();
    }

    /// Handle closing this view from another task
    #[must_use]
    pub fn closer(&self) -> ScopeCloser {
        self.scope.closer()
    }
}
