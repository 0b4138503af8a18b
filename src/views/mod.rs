// ABOUTME: Stateful views driven by the CLI
// ABOUTME: Request list/detail/registration and the standalone contact views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Views
//!
//! Each view owns its state and a [`ViewScope`](crate::lifecycle::ViewScope),
//! receives its dependencies through an [`AppContext`](crate::context::AppContext),
//! and is mutated only through `&mut self` handlers. Handlers catch backend
//! failures, log them, and record them in state; none of them is fatal.

/// Standalone contact list
pub mod contacto_list;
/// Standalone contact registration form
pub mod contacto_registration;
/// Request detail with contacts overlay
pub mod solicitud_detail;
/// Request list with filter, sort, delete, and export
pub mod solicitud_list;
/// Request registration with pending contacts
pub mod solicitud_registration;

pub use contacto_list::ContactoListView;
pub use contacto_registration::ContactoRegistrationView;
pub use solicitud_detail::SolicitudDetailView;
pub use solicitud_list::{DeleteOutcome, SolicitudColumn, SolicitudListView};
pub use solicitud_registration::{
    ChildDispatch, ContactFailure, CreatedContact, PendingContact, RollbackReport, SolicitudForm,
    SolicitudRegistrationView, SubmissionReport,
};

use crate::lifecycle::ViewScope;
use crate::logging::AppLogger;
use solicitudes_core::errors::AppError;
use tracing::debug;

/// Log a swallowed handler failure; cancellations are expected and stay quiet
fn log_failure(scope: &ViewScope, action: &str, error: &AppError) {
    if error.is_cancelled() {
        debug!(view = scope.view(), action, "Dropped response for closed view");
    } else {
        AppLogger::log_view_failure(scope.view(), action, error);
    }
}
