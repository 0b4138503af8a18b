// ABOUTME: Request registration form with an embedded pending-contact editor
// ABOUTME: Submits one parent create, then one child create per pending contact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Registration
//!
//! The form collects brand, request type, primary contact, and submission
//! date, plus any number of pending contacts staged through an "add contact"
//! overlay. Submitting creates the request first; its identifier is then
//! used to create each pending contact.
//!
//! How the children are created is a [`ChildDispatch`] policy:
//!
//! - [`ChildDispatch::Concurrent`] issues every child create at once. A failed
//!   child does not undo the others.
//! - [`ChildDispatch::Sequential`] creates children in list order, stops at the
//!   first failure, and can roll back what was already created, parent included.
//!
//! Either way the caller gets a [`SubmissionReport`] listing exactly what was
//! persisted, what failed, and what was never attempted.

use super::log_failure;
use crate::context::AppContext;
use crate::lifecycle::{ScopeCloser, ViewScope};
use crate::loadable::Loadable;
use crate::ui;
use futures_util::future::join_all;
use solicitudes_core::constants::labels;
use solicitudes_core::errors::{AppError, AppResult};
use solicitudes_core::models::{
    FechaEnvio, Marca, NuevaSolicitud, NuevoContacto, Solicitud, TipoSolicitud,
};
use solicitudes_core::validators::{accepts_phone_input, require_non_empty};
use std::fmt::{self, Write};
use tracing::{debug, info, warn};

/// Contact staged on the form; it has no identifier until persisted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingContact {
    /// Contact name
    pub nombre_contacto: String,
    /// Contact phone number
    pub numero_contacto: String,
}

impl PendingContact {
    /// Stage a contact
    pub fn new(nombre: impl Into<String>, numero: impl Into<String>) -> Self {
        Self {
            nombre_contacto: nombre.into(),
            numero_contacto: numero.into(),
        }
    }

    fn to_body(&self, solicitud_id: i64) -> NuevoContacto {
        NuevoContacto::for_solicitud(
            solicitud_id,
            self.nombre_contacto.clone(),
            self.numero_contacto.clone(),
        )
    }
}

impl fmt::Display for PendingContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.nombre_contacto, self.numero_contacto)
    }
}

/// How child contacts are created once the parent exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildDispatch {
    /// All at once, unordered, unbounded, no rollback
    Concurrent,
    /// One at a time in list order, stopping at the first failure
    Sequential {
        /// Delete created children and the parent after a failure
        rollback: bool,
    },
}

impl Default for ChildDispatch {
    fn default() -> Self {
        Self::Sequential { rollback: true }
    }
}

/// A pending contact the backend accepted
///
/// `id` is `None` when the backend answered 2xx without echoing the contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedContact {
    /// Backend identifier, when known
    pub id: Option<i64>,
    /// The staged contact
    pub contacto: PendingContact,
}

impl fmt::Display for CreatedContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{id} {}", self.contacto),
            None => write!(f, "{} (id desconocido)", self.contacto),
        }
    }
}

/// A pending contact whose create call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFailure {
    /// The staged contact
    pub contacto: PendingContact,
    /// Why the call failed
    pub reason: String,
}

/// What a rollback managed to undo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollbackReport {
    /// Child contacts deleted again, in deletion order
    pub deleted_contactos: Vec<i64>,
    /// Whether the parent request was deleted
    pub solicitud_deleted: bool,
    /// Deletes that failed or could not be attempted; those records remain
    pub failures: Vec<String>,
}

impl RollbackReport {
    /// Whether every compensating delete succeeded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.solicitud_deleted
    }
}

/// Outcome of a submission whose parent create succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// The created request, as answered by the backend
    pub solicitud: Solicitud,
    /// Policy the children were created with
    pub dispatch: ChildDispatch,
    /// Children the backend accepted
    pub created: Vec<CreatedContact>,
    /// Children whose create call failed
    pub failed: Vec<ContactFailure>,
    /// Children never attempted because an earlier one failed
    pub skipped: Vec<PendingContact>,
    /// Present when a rollback ran
    pub rollback: Option<RollbackReport>,
}

impl SubmissionReport {
    fn new(solicitud: Solicitud, dispatch: ChildDispatch) -> Self {
        Self {
            solicitud,
            dispatch,
            created: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            rollback: None,
        }
    }

    /// Whether the parent and every child were created
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Field values of the registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitudForm {
    /// Selected brand
    pub marca_id: Option<i64>,
    /// Selected request type
    pub tipo_solicitud_id: Option<i64>,
    /// Primary contact name
    pub nombre_contacto: String,
    /// Primary contact number
    pub numero_contacto: String,
    /// Submission date, today unless changed
    pub fecha_envio: FechaEnvio,
    /// Contacts to create after the request
    pub contactos: Vec<PendingContact>,
}

impl Default for SolicitudForm {
    fn default() -> Self {
        Self {
            marca_id: None,
            tipo_solicitud_id: None,
            nombre_contacto: String::new(),
            numero_contacto: String::new(),
            fecha_envio: FechaEnvio::today(),
            contactos: Vec::new(),
        }
    }
}

impl SolicitudForm {
    /// Check required fields and build the create body
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for the first blank required field.
    pub fn to_body(&self) -> AppResult<NuevaSolicitud> {
        let marca_id = self.marca_id.ok_or_else(|| AppError::missing_field("marcaId"))?;
        let tipo_solicitud_id = self
            .tipo_solicitud_id
            .ok_or_else(|| AppError::missing_field("tipoSolicitudId"))?;
        require_non_empty("nombreContacto", &self.nombre_contacto)?;
        require_non_empty("numeroContacto", &self.numero_contacto)?;

        Ok(NuevaSolicitud {
            marca_id,
            tipo_solicitud_id,
            nombre_contacto: self.nombre_contacto.clone(),
            numero_contacto: self.numero_contacto.clone(),
            fecha_envio: self.fecha_envio,
        })
    }
}

/// Sub-form of the "add contact" overlay
#[derive(Debug, Clone, Default)]
struct ContactDraft {
    open: bool,
    nombre: String,
    numero: String,
}

/// Request registration ("Registrar Solicitud")
#[derive(Debug)]
pub struct SolicitudRegistrationView {
    ctx: AppContext,
    scope: ViewScope,
    lookups_requested: bool,
    marcas: Loadable<Vec<Marca>>,
    tipos_solicitud: Loadable<Vec<TipoSolicitud>>,
    form: SolicitudForm,
    draft: ContactDraft,
    dispatch: ChildDispatch,
    navigate_to_list: bool,
    notice: Option<String>,
}

impl SolicitudRegistrationView {
    /// View name used in logs
    pub const VIEW: &'static str = "solicitud_registration";

    /// Empty form dated today, sequential dispatch with rollback
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let scope = ctx.scope(Self::VIEW);
        Self {
            ctx,
            scope,
            lookups_requested: false,
            marcas: Loadable::Pending,
            tipos_solicitud: Loadable::Pending,
            form: SolicitudForm::default(),
            draft: ContactDraft::default(),
            dispatch: ChildDispatch::default(),
            navigate_to_list: false,
            notice: None,
        }
    }

    /// Fetch brands and request types concurrently, once per activation
    ///
    /// If either call fails both selects become `Failed`.
    pub async fn load_lookups(&mut self) -> bool {
        if self.lookups_requested {
            return self.marcas.is_ready() && self.tipos_solicitud.is_ready();
        }
        self.lookups_requested = true;

        let (marcas, tipos) = tokio::join!(
            self.scope.run("marcas", self.ctx.marcas().list()),
            self.scope.run("tipos_solicitud", self.ctx.tipos_solicitud().list()),
        );

        match (marcas, tipos) {
            (Ok(marcas), Ok(tipos)) => {
                debug!(marcas = marcas.len(), tipos = tipos.len(), "Lookups loaded");
                self.marcas = Loadable::Ready(marcas);
                self.tipos_solicitud = Loadable::Ready(tipos);
                true
            }
            (marcas, tipos) => {
                let errors: Vec<AppError> =
                    [marcas.err(), tipos.err()].into_iter().flatten().collect();
                for e in &errors {
                    log_failure(&self.scope, "load_lookups", e);
                }
                if errors.iter().any(AppError::is_cancelled) {
                    return false;
                }
                let reason = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                self.marcas = Loadable::Failed(reason.clone());
                self.tipos_solicitud = Loadable::Failed(reason);
                false
            }
        }
    }

    /// Brand options
    #[must_use]
    pub const fn marcas(&self) -> &Loadable<Vec<Marca>> {
        &self.marcas
    }

    /// Request-type options
    #[must_use]
    pub const fn tipos_solicitud(&self) -> &Loadable<Vec<TipoSolicitud>> {
        &self.tipos_solicitud
    }

    /// Current field values
    #[must_use]
    pub const fn form(&self) -> &SolicitudForm {
        &self.form
    }

    /// Select a brand
    pub fn set_marca(&mut self, marca_id: Option<i64>) {
        self.form.marca_id = marca_id;
    }

    /// Select a request type
    pub fn set_tipo_solicitud(&mut self, tipo_solicitud_id: Option<i64>) {
        self.form.tipo_solicitud_id = tipo_solicitud_id;
    }

    /// Set the primary contact name
    pub fn set_nombre_contacto(&mut self, nombre: &str) {
        nombre.clone_into(&mut self.form.nombre_contacto);
    }

    /// Offer a new value for the primary contact number
    ///
    /// Values longer than nine characters or containing anything but digits
    /// are dropped without changing the field. Returns whether it was taken.
    pub fn set_numero_contacto(&mut self, candidate: &str) -> bool {
        if !accepts_phone_input(candidate) {
            return false;
        }
        candidate.clone_into(&mut self.form.numero_contacto);
        true
    }

    /// Set the submission date
    pub fn set_fecha_envio(&mut self, fecha: FechaEnvio) {
        self.form.fecha_envio = fecha;
    }

    /// Policy used for child creates on submit
    #[must_use]
    pub const fn dispatch(&self) -> ChildDispatch {
        self.dispatch
    }

    /// Change the child create policy
    pub fn set_dispatch(&mut self, dispatch: ChildDispatch) {
        self.dispatch = dispatch;
    }

    /// Open the "add contact" overlay
    pub fn open_contact_overlay(&mut self) {
        self.draft.open = true;
    }

    /// Whether the "add contact" overlay is shown
    #[must_use]
    pub const fn is_contact_overlay_open(&self) -> bool {
        self.draft.open
    }

    /// Name typed in the overlay
    pub fn set_new_contact_name(&mut self, nombre: &str) {
        nombre.clone_into(&mut self.draft.nombre);
    }

    /// Number typed in the overlay
    pub fn set_new_contact_number(&mut self, numero: &str) {
        numero.clone_into(&mut self.draft.numero);
    }

    /// Overlay field values (name, number)
    #[must_use]
    pub fn new_contact(&self) -> (&str, &str) {
        (&self.draft.nombre, &self.draft.numero)
    }

    /// Append the overlay contact if both fields are filled
    ///
    /// On success the overlay is cleared and closed. Otherwise nothing
    /// changes and the overlay stays open.
    pub fn confirm_new_contact(&mut self) -> bool {
        if self.draft.nombre.is_empty() || self.draft.numero.is_empty() {
            return false;
        }
        let draft = std::mem::take(&mut self.draft);
        self.form
            .contactos
            .push(PendingContact::new(draft.nombre, draft.numero));
        true
    }

    /// Discard the overlay values and close it
    pub fn cancel_new_contact(&mut self) {
        self.draft = ContactDraft::default();
    }

    /// Staged contacts in order
    #[must_use]
    pub fn pending_contacts(&self) -> &[PendingContact] {
        &self.form.contactos
    }

    /// Remove the staged contact at `index`; out of range does nothing
    pub fn remove_pending_contact(&mut self, index: usize) -> Option<PendingContact> {
        (index < self.form.contactos.len()).then(|| self.form.contactos.remove(index))
    }

    /// Whether a successful submit asked to go back to the list
    #[must_use]
    pub const fn should_navigate_to_list(&self) -> bool {
        self.navigate_to_list
    }

    /// Last user-facing notice
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Create the request, then its pending contacts
    ///
    /// A complete success clears the form and requests navigation to the
    /// list. Any failure leaves the form populated.
    ///
    /// Closing the view abandons the submission only until the request is
    /// created. From then on contacts and any rollback are sent outside the
    /// view scope, so every write the backend may have applied is accounted
    /// for in the report.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` before any call when a required field is
    /// blank, or the backend error when the request itself cannot be created;
    /// in both cases no contact is created.
    pub async fn submit(&mut self) -> AppResult<SubmissionReport> {
        let body = self.form.to_body().inspect_err(|e| {
            warn!(view = Self::VIEW, error = %e, "Registration form incomplete");
        })?;
        let pending = self.form.contactos.clone();

        let solicitud = self
            .scope
            .run("create_solicitud", self.ctx.solicitudes().create(&body))
            .await
            .inspect_err(|e| log_failure(&self.scope, "create_solicitud", e))?;
        info!(
            solicitud.id = solicitud.id,
            codigo = %solicitud.codigo,
            contactos = pending.len(),
            dispatch = ?self.dispatch,
            "Request created"
        );

        let report = match self.dispatch {
            ChildDispatch::Concurrent => self.create_concurrently(solicitud, &pending).await,
            ChildDispatch::Sequential { rollback } => {
                self.create_sequentially(solicitud, &pending, rollback)
                    .await
            }
        };

        if report.is_complete() {
            self.form = SolicitudForm::default();
            self.draft = ContactDraft::default();
            self.notice = Some(labels::REGISTERED.to_owned());
            self.navigate_to_list = true;
        } else {
            warn!(
                solicitud.id = report.solicitud.id,
                created = report.created.len(),
                failed = report.failed.len(),
                skipped = report.skipped.len(),
                rolled_back = report.rollback.is_some(),
                "Registration incomplete"
            );
            self.notice = Some(format!(
                "Registro incompleto: {} de {} contactos creados",
                report.created.len(),
                pending.len()
            ));
        }
        Ok(report)
    }

    async fn create_concurrently(
        &self,
        solicitud: Solicitud,
        pending: &[PendingContact],
    ) -> SubmissionReport {
        let bodies: Vec<NuevoContacto> = pending.iter().map(|p| p.to_body(solicitud.id)).collect();
        let contactos = self.ctx.contactos();
        let results = join_all(bodies.iter().map(|body| contactos.create(body))).await;

        let mut report = SubmissionReport::new(solicitud, ChildDispatch::Concurrent);
        for (contacto, result) in pending.iter().zip(results) {
            match result {
                Ok(created) => report.created.push(CreatedContact {
                    id: created.map(|c| c.id),
                    contacto: contacto.clone(),
                }),
                Err(e) => {
                    log_failure(&self.scope, "create_contacto", &e);
                    report.failed.push(ContactFailure {
                        contacto: contacto.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        report
    }

    async fn create_sequentially(
        &self,
        solicitud: Solicitud,
        pending: &[PendingContact],
        rollback: bool,
    ) -> SubmissionReport {
        let solicitud_id = solicitud.id;
        let mut report = SubmissionReport::new(solicitud, ChildDispatch::Sequential { rollback });
        let mut remaining = pending.iter();

        for contacto in remaining.by_ref() {
            let body = contacto.to_body(solicitud_id);
            match self.ctx.contactos().create(&body).await {
                Ok(created) => {
                    let id = created.map(|c| c.id);
                    debug!(
                        solicitud.id = solicitud_id,
                        contacto.id = ?id,
                        checkpoint = report.created.len() + 1,
                        "Contact created"
                    );
                    report.created.push(CreatedContact {
                        id,
                        contacto: contacto.clone(),
                    });
                }
                Err(e) => {
                    log_failure(&self.scope, "create_contacto", &e);
                    report.failed.push(ContactFailure {
                        contacto: contacto.clone(),
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }
        report.skipped = remaining.cloned().collect();

        if rollback && !report.failed.is_empty() {
            report.rollback = Some(self.roll_back(&report).await);
        }
        report
    }

    /// Best-effort compensation: created children newest first, then the parent
    ///
    /// Children created without an echoed identifier are looked up among the
    /// parent's contacts. The parent is only deleted once every child is gone,
    /// so a failed cleanup never leaves contacts without their request.
    async fn roll_back(&self, report: &SubmissionReport) -> RollbackReport {
        let mut rollback = RollbackReport::default();
        let solicitud_id = report.solicitud.id;

        let owned = if report.created.iter().any(|c| c.id.is_none()) {
            match self.ctx.contactos().list_by_solicitud(solicitud_id).await {
                Ok(owned) => owned,
                Err(e) => {
                    warn!(solicitud.id = solicitud_id, error = %e, "Rollback lookup failed");
                    rollback
                        .failures
                        .push(format!("contactos de solicitud {solicitud_id}: {e}"));
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let mut claimed: Vec<i64> = report.created.iter().filter_map(|c| c.id).collect();
        let mut targets = Vec::with_capacity(report.created.len());
        let mut remaining = 0_usize;
        for created in &report.created {
            let resolved = created.id.or_else(|| {
                let found = owned
                    .iter()
                    .find(|c| {
                        !claimed.contains(&c.id)
                            && c.nombre_contacto == created.contacto.nombre_contacto
                            && c.numero_contacto == created.contacto.numero_contacto
                    })
                    .map(|c| c.id);
                claimed.extend(found);
                found
            });
            if let Some(id) = resolved {
                targets.push(id);
            } else {
                remaining += 1;
                rollback
                    .failures
                    .push(format!("contacto {}: identificador desconocido", created.contacto));
            }
        }

        for id in targets.into_iter().rev() {
            match self.ctx.contactos().delete(id).await {
                Ok(()) => rollback.deleted_contactos.push(id),
                Err(e) => {
                    warn!(contacto.id = id, error = %e, "Rollback delete failed");
                    remaining += 1;
                    rollback.failures.push(format!("contacto {id}: {e}"));
                }
            }
        }

        if remaining > 0 {
            warn!(
                solicitud.id = solicitud_id,
                remaining, "Keeping request: some contacts could not be removed"
            );
            rollback.failures.push(format!(
                "solicitud {solicitud_id}: conservada, {remaining} contactos siguen registrados"
            ));
        } else {
            match self.ctx.solicitudes().delete(solicitud_id).await {
                Ok(()) => rollback.solicitud_deleted = true,
                Err(e) => {
                    warn!(solicitud.id = solicitud_id, error = %e, "Rollback delete failed");
                    rollback.failures.push(format!("solicitud {solicitud_id}: {e}"));
                }
            }
        }

        info!(
            solicitud.id = solicitud_id,
            deleted_contactos = rollback.deleted_contactos.len(),
            solicitud_deleted = rollback.solicitud_deleted,
            "Registration rolled back"
        );
        rollback
    }

    /// Render the form, staged contacts, and the overlay when open
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Registrar Solicitud\n\n");
        out.push_str(&ui::select("Marca", &self.marcas, self.form.marca_id));
        out.push_str(&ui::select(
            "Tipo de Solicitud",
            &self.tipos_solicitud,
            self.form.tipo_solicitud_id,
        ));
        let fecha = self.form.fecha_envio.date().to_string();
        for (label, value) in [
            ("Nombre del Contacto", self.form.nombre_contacto.as_str()),
            ("Número de Contacto", self.form.numero_contacto.as_str()),
            ("Fecha de Envío", fecha.as_str()),
        ] {
            let _ = writeln!(out, "{}", ui::field(label, value));
        }

        out.push_str("Contactos Añadidos:\n");
        for (index, contacto) in self.form.contactos.iter().enumerate() {
            let _ = writeln!(out, "  {index}. {contacto}  [{}]", labels::DELETE_ACTION);
        }

        if self.draft.open {
            out.push('\n');
            out.push_str(&ui::overlay(
                "Agregar Contacto",
                [
                    ui::field("Nombre del Contacto", &self.draft.nombre),
                    ui::field("Número de Contacto", &self.draft.numero),
                ],
            ));
        }
        if let Some(notice) = &self.notice {
            let _ = write!(out, "\n{notice}\n");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn view() -> SolicitudRegistrationView {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9").unwrap();
        SolicitudRegistrationView::new(AppContext::from_config(config).unwrap())
    }

    #[test]
    fn test_phone_keystrokes_are_filtered() {
        let mut form = view();
        assert!(form.set_numero_contacto("12345"));
        assert!(!form.set_numero_contacto("12a45"));
        assert!(!form.set_numero_contacto("1234567890"));
        assert_eq!(form.form().numero_contacto, "12345");
    }

    #[test]
    fn test_confirm_requires_both_fields() {
        let mut form = view();
        form.open_contact_overlay();
        form.set_new_contact_name("Ana");
        assert!(!form.confirm_new_contact());
        assert!(form.pending_contacts().is_empty());
        assert!(form.is_contact_overlay_open());

        form.set_new_contact_number("600111222");
        assert!(form.confirm_new_contact());
        assert_eq!(form.pending_contacts(), [PendingContact::new("Ana", "600111222")]);
        assert!(!form.is_contact_overlay_open());
        assert_eq!(form.new_contact(), ("", ""));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = view();
        form.open_contact_overlay();
        form.set_new_contact_name("Ana");
        form.set_new_contact_number("1");
        form.cancel_new_contact();
        assert!(form.pending_contacts().is_empty());
        assert!(!form.is_contact_overlay_open());
        assert_eq!(form.new_contact(), ("", ""));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut form = view();
        for (nombre, numero) in [("A", "1"), ("B", "2"), ("C", "3")] {
            form.open_contact_overlay();
            form.set_new_contact_name(nombre);
            form.set_new_contact_number(numero);
            assert!(form.confirm_new_contact());
        }

        assert_eq!(form.remove_pending_contact(1), Some(PendingContact::new("B", "2")));
        assert_eq!(form.remove_pending_contact(5), None);
        let names: Vec<&str> = form
            .pending_contacts()
            .iter()
            .map(|c| c.nombre_contacto.as_str())
            .collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_form_body_requires_selections() {
        let mut form = SolicitudForm {
            nombre_contacto: "Ana".into(),
            numero_contacto: "1".into(),
            ..SolicitudForm::default()
        };
        assert!(form.to_body().is_err());

        form.marca_id = Some(1);
        form.tipo_solicitud_id = Some(2);
        let body = form.to_body().unwrap();
        assert_eq!(body.marca_id, 1);
        assert_eq!(body.fecha_envio, form.fecha_envio);
    }

    #[test]
    fn test_default_dispatch_rolls_back() {
        assert_eq!(
            ChildDispatch::default(),
            ChildDispatch::Sequential { rollback: true }
        );
    }

    #[test]
    fn test_render_shows_loading_until_lookups_resolve() {
        let form = view();
        let out = form.render();
        assert!(out.contains(labels::LOADING));
        assert!(out.contains("Contactos Añadidos:"));
    }
}
