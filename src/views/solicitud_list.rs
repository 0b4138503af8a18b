// ABOUTME: Request list view with client-side filtering and column sorting
// ABOUTME: Deletes behind a confirmation prompt and exports the backend CSV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log_failure;
use crate::context::AppContext;
use crate::lifecycle::{ScopeCloser, ViewScope};
use crate::loadable::Loadable;
use crate::ui::{Confirm, SortDirection, Table};
use solicitudes_core::constants::labels;
use solicitudes_core::errors::{AppError, AppResult};
use solicitudes_core::filter::SolicitudFilter;
use solicitudes_core::models::Solicitud;
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Sortable data columns of the request table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolicitudColumn {
    /// Request code
    #[default]
    Codigo,
    /// Brand description
    Marca,
    /// Request-type description
    Tipo,
    /// Submission date
    FechaEnvio,
    /// Primary contact name
    NombreContacto,
    /// Primary contact number
    NumeroContacto,
}

impl SolicitudColumn {
    /// Data columns in display order
    pub const ALL: [Self; 6] = [
        Self::Codigo,
        Self::Marca,
        Self::Tipo,
        Self::FechaEnvio,
        Self::NombreContacto,
        Self::NumeroContacto,
    ];

    /// Column header
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Codigo => "Código",
            Self::Marca => "Marca",
            Self::Tipo => "Tipo de Solicitud",
            Self::FechaEnvio => "Fecha de Envío",
            Self::NombreContacto => "Nombre de Contacto",
            Self::NumeroContacto => "Número de Contacto",
        }
    }

    /// Key accepted by [`FromStr`]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Codigo => "codigo",
            Self::Marca => "marca",
            Self::Tipo => "tipo",
            Self::FechaEnvio => "fecha",
            Self::NombreContacto => "nombre",
            Self::NumeroContacto => "numero",
        }
    }

    fn cell(self, solicitud: &Solicitud) -> String {
        match self {
            Self::Codigo => solicitud.codigo.clone(),
            Self::Marca => solicitud.marca().to_owned(),
            Self::Tipo => solicitud.tipo().to_owned(),
            Self::FechaEnvio => solicitud.fecha_envio_display(),
            Self::NombreContacto => solicitud.nombre_contacto.clone(),
            Self::NumeroContacto => solicitud.numero_contacto.clone(),
        }
    }

    /// Ascending comparison; dates compare chronologically, unknown first
    fn compare(self, a: &Solicitud, b: &Solicitud) -> Ordering {
        match self {
            Self::Codigo => a.codigo.cmp(&b.codigo),
            Self::Marca => a.marca().cmp(b.marca()),
            Self::Tipo => a.tipo().cmp(b.tipo()),
            Self::FechaEnvio => a.fecha_envio.cmp(&b.fecha_envio),
            Self::NombreContacto => a.nombre_contacto.cmp(&b.nombre_contacto),
            Self::NumeroContacto => a.numero_contacto.cmp(&b.numero_contacto),
        }
    }
}

impl fmt::Display for SolicitudColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SolicitudColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|column| column.key() == wanted)
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
                AppError::invalid_input(format!(
                    "unknown column '{s}', expected one of: {}",
                    keys.join(", ")
                ))
            })
    }
}

/// Result of a delete request from the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Declined,
    /// The backend deleted the request
    Deleted,
    /// The delete call failed; the row remains
    Failed(String),
}

/// Request list ("Lista de Solicitudes")
#[derive(Debug)]
pub struct SolicitudListView {
    ctx: AppContext,
    scope: ViewScope,
    solicitudes: Loadable<Vec<Solicitud>>,
    filter: SolicitudFilter,
    sort_column: SolicitudColumn,
    sort_direction: SortDirection,
    notice: Option<String>,
}

impl SolicitudListView {
    /// View name used in logs
    pub const VIEW: &'static str = "solicitud_list";

    /// New, not yet loaded list sorted by code ascending
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let scope = ctx.scope(Self::VIEW);
        Self {
            ctx,
            scope,
            solicitudes: Loadable::Pending,
            filter: SolicitudFilter::default(),
            sort_column: SolicitudColumn::default(),
            sort_direction: SortDirection::default(),
            notice: None,
        }
    }

    /// Fetch the full collection; returns whether data is now available
    pub async fn load(&mut self) -> bool {
        let result = self
            .scope
            .run("list", self.ctx.solicitudes().list())
            .await;
        match result {
            Ok(solicitudes) => {
                info!(count = solicitudes.len(), "Requests loaded");
                self.solicitudes = Loadable::Ready(solicitudes);
            }
            Err(e) if e.is_cancelled() => log_failure(&self.scope, "list", &e),
            Err(e) => {
                log_failure(&self.scope, "list", &e);
                self.solicitudes = Loadable::Failed(e.to_string());
            }
        }
        self.solicitudes.is_ready()
    }

    /// Full, unfiltered collection state
    #[must_use]
    pub const fn solicitudes(&self) -> &Loadable<Vec<Solicitud>> {
        &self.solicitudes
    }

    /// Replace the filter; applied on the next render
    pub fn set_filter(&mut self, filter: SolicitudFilter) {
        self.filter = filter;
    }

    /// Current filter
    #[must_use]
    pub const fn filter(&self) -> &SolicitudFilter {
        &self.filter
    }

    /// Sort by `column` in `direction`
    pub fn sort_by(&mut self, column: SolicitudColumn, direction: SortDirection) {
        self.sort_column = column;
        self.sort_direction = direction;
    }

    /// Header click: flip the active column, or sort a new one ascending
    pub fn toggle_sort(&mut self, column: SolicitudColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_by(column, SortDirection::Ascending);
        }
    }

    /// Active sort column and direction
    #[must_use]
    pub const fn sort(&self) -> (SolicitudColumn, SortDirection) {
        (self.sort_column, self.sort_direction)
    }

    /// Rows to display: the full collection filtered then sorted
    #[must_use]
    pub fn visible(&self) -> Vec<&Solicitud> {
        let Some(all) = self.solicitudes.ready() else {
            return Vec::new();
        };
        let mut rows = self.filter.apply(all);
        let (column, direction) = self.sort();
        rows.sort_by(|a, b| direction.apply(column.compare(a, b)));
        rows
    }

    /// Table of the visible rows, with the delete action per row
    #[must_use]
    pub fn table(&self) -> Table {
        let headers = SolicitudColumn::ALL
            .iter()
            .map(|c| c.header())
            .chain(std::iter::once("Acciones"));
        let mut table = Table::new(headers);
        for solicitud in self.visible() {
            let mut row: Vec<String> = SolicitudColumn::ALL
                .iter()
                .map(|c| c.cell(solicitud))
                .collect();
            row.push(format!("{} #{}", labels::DELETE_ACTION, solicitud.id));
            table.push_row(row);
        }
        table
    }

    /// Render the list
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Lista de Solicitudes\n\n");
        match &self.solicitudes {
            Loadable::Pending => out.push_str(labels::LOADING),
            Loadable::Failed(reason) => {
                let _ = write!(out, "No se pudieron cargar las solicitudes: {reason}");
            }
            Loadable::Ready(_) => {
                let table = self.table();
                if table.is_empty() {
                    out.push_str(labels::NO_SOLICITUDES);
                } else {
                    out.push_str(table.render().trim_end());
                }
            }
        }
        out.push('\n');
        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        out
    }

    /// Last user-facing notice (e.g. after a delete)
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Delete a request after confirmation, then re-fetch the collection
    ///
    /// The re-fetch runs whether or not the delete succeeded; nothing is
    /// removed locally.
    pub async fn delete(&mut self, id: i64, confirm: &mut dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(labels::CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }

        let result = self
            .scope
            .run("delete", self.ctx.solicitudes().delete(id))
            .await;
        let outcome = match result {
            Ok(()) => {
                info!(solicitud.id = id, "Request deleted");
                self.notice = Some(labels::DELETED.to_owned());
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log_failure(&self.scope, "delete", &e);
                DeleteOutcome::Failed(e.to_string())
            }
        };

        if !self.scope.is_closed() {
            self.load().await;
        }
        outcome
    }

    /// Download the backend CSV and write it to `path`; returns bytes written
    ///
    /// # Errors
    ///
    /// Returns the backend error, or `StorageError` if the file cannot be written.
    pub async fn export(&self, path: &Path) -> AppResult<usize> {
        let result = self.export_inner(path).await;
        if let Err(e) = &result {
            log_failure(&self.scope, "export", e);
        }
        result
    }

    async fn export_inner(&self, path: &Path) -> AppResult<usize> {
        let csv = self
            .scope
            .run("export", self.ctx.solicitudes().export_csv())
            .await?;
        tokio::fs::write(path, &csv).await.map_err(|e| {
            AppError::storage(format!("cannot write '{}': {e}", path.display())).with_source(e)
        })?;
        info!(path = %path.display(), bytes = csv.len(), "Requests exported");
        Ok(csv.len())
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
