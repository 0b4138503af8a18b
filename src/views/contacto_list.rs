// ABOUTME: Standalone contact list view
// ABOUTME: Fetches every contact and renders name, number, and a delete action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log_failure;
use crate::context::AppContext;
use crate::lifecycle::ViewScope;
use crate::loadable::Loadable;
use crate::ui::Table;
use solicitudes_core::constants::labels;
use solicitudes_core::models::Contacto;
use std::fmt::Write;
use tracing::info;

/// Contact list ("Lista de Contactos")
///
/// Each row shows a delete action, but this view issues no delete call.
#[derive(Debug)]
pub struct ContactoListView {
    ctx: AppContext,
    scope: ViewScope,
    contactos: Loadable<Vec<Contacto>>,
}

impl ContactoListView {
    /// View name used in logs
    pub const VIEW: &'static str = "contacto_list";

    /// New, not yet loaded list
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let scope = ctx.scope(Self::VIEW);
        Self {
            ctx,
            scope,
            contactos: Loadable::Pending,
        }
    }

    /// Fetch every contact
    pub async fn load(&mut self) -> bool {
        match self.scope.run("list", self.ctx.contactos().list()).await {
            Ok(contactos) => {
                info!(count = contactos.len(), "Contacts loaded");
                self.contactos = Loadable::Ready(contactos);
            }
            Err(e) if e.is_cancelled() => log_failure(&self.scope, "list", &e),
            Err(e) => {
                log_failure(&self.scope, "list", &e);
                self.contactos = Loadable::Failed(e.to_string());
            }
        }
        self.contactos.is_ready()
    }

    /// Collection state
    #[must_use]
    pub const fn contactos(&self) -> &Loadable<Vec<Contacto>> {
        &self.contactos
    }

    /// Table of every loaded contact
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new(["Nombre", "Número de Contacto", "Acciones"]);
        for contacto in self.contactos.ready().into_iter().flatten() {
            table.push_row(vec![
                contacto.nombre_contacto.clone(),
                contacto.numero_contacto.clone(),
                labels::DELETE_ACTION.to_owned(),
            ]);
        }
        table
    }

    /// Render the list; failures render an empty table like a fresh one
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Lista de Contactos\n\n");
        if self.contactos.is_pending() {
            let _ = writeln!(out, "{}", labels::LOADING);
        } else {
            out.push_str(&self.table().render());
        }
        out
    }

    /// Close the view; in-flight calls are discarded
    pub fn close(&self) {
        self.scope.close();
    }
}
