// ABOUTME: Request commands for solicitudes-cli
// ABOUTME: Drives the list, detail, and registration views from command-line arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use solicitudes_admin::{
    constants::labels,
    context::AppContext,
    errors::{AppError, AppResult, ErrorCode},
    filter::SolicitudFilter,
    models::FechaEnvio,
    ui::{Confirm, FixedAnswer, SortDirection, StdinConfirm},
    views::{
        ChildDispatch, DeleteOutcome, PendingContact, SolicitudColumn, SolicitudDetailView,
        SolicitudListView, SolicitudRegistrationView,
    },
};
use std::path::Path;
use tracing::info;

/// Raw filter inputs; absent and blank values leave a clause unset
pub struct ListFilter {
    pub desde: Option<String>,
    pub hasta: Option<String>,
    pub tipo: Option<String>,
}

/// Arguments of `solicitudes create`
pub struct CreateArgs {
    pub marca: i64,
    pub tipo: i64,
    pub nombre: String,
    pub numero: String,
    pub fecha: Option<String>,
    pub contactos: Vec<PendingContact>,
    pub concurrent: bool,
    pub rollback: bool,
}

/// `solicitudes list`
pub async fn list(
    ctx: &AppContext,
    filter: &ListFilter,
    sort: SolicitudColumn,
    desc: bool,
) -> AppResult<()> {
    let filter = SolicitudFilter::from_inputs(
        filter.desde.as_deref().unwrap_or_default(),
        filter.hasta.as_deref().unwrap_or_default(),
        filter.tipo.as_deref().unwrap_or_default(),
    )?;

    let mut view = SolicitudListView::new(ctx.clone());
    view.set_filter(filter);
    let direction = if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    view.sort_by(sort, direction);

    let loaded = view.load().await;
    print!("{}", view.render());
    if loaded {
        Ok(())
    } else {
        Err(load_failure(view.solicitudes().failure()))
    }
}

/// `solicitudes show`
pub async fn show(ctx: &AppContext, codigo: &str, contactos: bool) -> AppResult<()> {
    let mut view = SolicitudDetailView::new(ctx.clone(), codigo);
    let loaded = view.load().await;
    if loaded && contactos && !view.view_contacts().await {
        display::warn_line("No se pudieron obtener los contactos asociados");
    }
    print!("{}", view.render());

    if loaded {
        Ok(())
    } else {
        Err(load_failure(view.solicitud().failure()))
    }
}

/// `solicitudes delete`
pub async fn delete(ctx: &AppContext, id: i64, yes: bool) -> AppResult<()> {
    let answer = if yes {
        true
    } else {
        // Terminal input is read off the runtime's worker threads
        tokio::task::spawn_blocking(|| StdinConfirm.confirm(labels::CONFIRM_DELETE))
            .await
            .map_err(|e| AppError::internal(format!("confirmation prompt failed: {e}")))?
    };

    let mut view = SolicitudListView::new(ctx.clone());
    let outcome = view.delete(id, &mut FixedAnswer::new(answer)).await;
    display::display_delete_outcome(id, &outcome);
    if matches!(outcome, DeleteOutcome::Deleted) {
        print!("\n{}", view.render());
    }

    match outcome {
        DeleteOutcome::Failed(reason) => Err(AppError::new(ErrorCode::ExternalServiceError, reason)),
        DeleteOutcome::Declined | DeleteOutcome::Deleted => Ok(()),
    }
}

/// `solicitudes export`
pub async fn export(ctx: &AppContext, output: &Path) -> AppResult<()> {
    let view = SolicitudListView::new(ctx.clone());
    let written = view.export(output).await?;
    display::display_export(output, written);
    Ok(())
}

/// `solicitudes create`
pub async fn create(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let mut view = SolicitudRegistrationView::new(ctx.clone());
    if !view.load_lookups().await {
        display::warn_line("No se pudieron cargar marcas y tipos de solicitud");
    }

    view.set_marca(Some(args.marca));
    view.set_tipo_solicitud(Some(args.tipo));
    view.set_nombre_contacto(&args.nombre);
    if !view.set_numero_contacto(&args.numero) {
        return Err(AppError::invalid_input(format!(
            "numero '{}' must be at most 9 digits",
            args.numero
        )));
    }
    if let Some(fecha) = args.fecha.as_deref() {
        view.set_fecha_envio(FechaEnvio::parse(fecha)?);
    }
    for contacto in &args.contactos {
        view.open_contact_overlay();
        view.set_new_contact_name(&contacto.nombre_contacto);
        view.set_new_contact_number(&contacto.numero_contacto);
        if !view.confirm_new_contact() {
            view.cancel_new_contact();
            return Err(AppError::invalid_input(format!(
                "contact '{contacto}' needs a name and a number"
            )));
        }
    }
    view.set_dispatch(if args.concurrent {
        ChildDispatch::Concurrent
    } else {
        ChildDispatch::Sequential {
            rollback: args.rollback,
        }
    });

    let report = view.submit().await?;
    display::display_submission_report(&report);
    if let Some(notice) = view.notice() {
        println!("\n{notice}");
    }
    if !report.is_complete() {
        return Err(AppError::new(
            ErrorCode::ExternalServiceError,
            view.notice().unwrap_or("registration incomplete"),
        )
        .with_details(serde_json::json!({
            "solicitudId": report.solicitud.id,
            "created": report.created.len(),
            "failed": report.failed.len(),
            "skipped": report.skipped.len(),
            "rolledBack": report.rollback.as_ref().is_some_and(|r| r.solicitud_deleted),
        })));
    }

    if view.should_navigate_to_list() {
        info!(solicitud.id = report.solicitud.id, "Returning to the request list");
        let mut list = SolicitudListView::new(ctx.clone());
        list.load().await;
        print!("\n{}", list.render());
    }
    Ok(())
}

fn load_failure(reason: Option<&str>) -> AppError {
    AppError::new(
        ErrorCode::ExternalServiceError,
        reason.unwrap_or("no data received"),
    )
}
