// ABOUTME: Lookup command for solicitudes-cli
// ABOUTME: Prints the brand and request-type options the registration form offers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use solicitudes_admin::{
    context::AppContext,
    errors::{AppError, AppResult, ErrorCode},
    ui,
    views::SolicitudRegistrationView,
};

/// `lookups`
pub async fn show(ctx: &AppContext) -> AppResult<()> {
    let mut view = SolicitudRegistrationView::new(ctx.clone());
    let loaded = view.load_lookups().await;

    print!("{}", ui::select("Marca", view.marcas(), None));
    print!("{}", ui::select("Tipo de Solicitud", view.tipos_solicitud(), None));

    if loaded {
        return Ok(());
    }
    Err(AppError::new(
        ErrorCode::ExternalServiceError,
        view.marcas().failure().unwrap_or("no data received"),
    ))
}
