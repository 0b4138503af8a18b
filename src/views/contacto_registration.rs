// ABOUTME: Standalone contact registration form
// ABOUTME: Creates one contact; clears on success, keeps values on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log_failure;
use crate::context::AppContext;
use crate::lifecycle::ViewScope;
use crate::ui;
use solicitudes_core::errors::AppResult;
use solicitudes_core::models::{Contacto, NuevoContacto};
use solicitudes_core::validators::require_non_empty;
use std::fmt::Write;
use tracing::{info, warn};

/// Contact registration ("Registrar Contacto")
#[derive(Debug)]
pub struct ContactoRegistrationView {
    ctx: AppContext,
    scope: ViewScope,
    nombre_contacto: String,
    numero_contacto: String,
}

impl ContactoRegistrationView {
    /// View name used in logs
    pub const VIEW: &'static str = "contacto_registration";

    /// Empty form
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let scope = ctx.scope(Self::VIEW);
        Self {
            ctx,
            scope,
            nombre_contacto: String::new(),
            numero_contacto: String::new(),
        }
    }

    /// Set the contact name
    pub fn set_nombre_contacto(&mut self, nombre: &str) {
        nombre.clone_into(&mut self.nombre_contacto);
    }

    /// Set the contact number; this form does not filter keystrokes
    pub fn set_numero_contacto(&mut self, numero: &str) {
        numero.clone_into(&mut self.numero_contacto);
    }

    /// Current values (name, number)
    #[must_use]
    pub fn values(&self) -> (&str, &str) {
        (&self.nombre_contacto, &self.numero_contacto)
    }

    /// Create the contact
    ///
    /// Any 2xx answer counts as created; the stored contact is returned when
    /// the backend echoes it.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a field is blank, or the backend
    /// error; either way the form keeps its values.
    pub async fn submit(&mut self) -> AppResult<Option<Contacto>> {
        require_non_empty("nombreContacto", &self.nombre_contacto)
            .and_then(|()| require_non_empty("numeroContacto", &self.numero_contacto))
            .inspect_err(|e| warn!(view = Self::VIEW, error = %e, "Contact form incomplete"))?;

        let body = NuevoContacto::standalone(
            self.nombre_contacto.clone(),
            self.numero_contacto.clone(),
        );
        let contacto = self
            .scope
            .run("create", self.ctx.contactos().create(&body))
            .await
            .inspect_err(|e| log_failure(&self.scope, "create", e))?;

        info!(contacto.id = ?contacto.as_ref().map(|c| c.id), "Contact registered");
        self.nombre_contacto.clear();
        self.numero_contacto.clear();
        Ok(contacto)
    }

    /// Render the form
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Registrar Contacto\n\n");
        let _ = writeln!(out, "{}", ui::field("Nombre del Contacto", &self.nombre_contacto));
        let _ = writeln!(out, "{}", ui::field("Número de Contacto", &self.numero_contacto));
        out
    }

    /// Close the view; in-flight calls are discarded
    pub fn close(&self) {
        self.scope.close();
    }
}
