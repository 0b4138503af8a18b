// ABOUTME: Standalone contact commands for solicitudes-cli
// ABOUTME: Lists contacts and registers new ones through the contact views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use solicitudes_admin::{
    context::AppContext,
    errors::{AppError, AppResult, ErrorCode},
    views::{ContactoListView, ContactoRegistrationView},
};

/// `contactos list`
pub async fn list(ctx: &AppContext) -> AppResult<()> {
    let mut view = ContactoListView::new(ctx.clone());
    let loaded = view.load().await;
    print!("{}", view.render());
    if loaded {
        return Ok(());
    }
    Err(AppError::new(
        ErrorCode::ExternalServiceError,
        view.contactos().failure().unwrap_or("no data received"),
    ))
}

/// `contactos create`
pub async fn create(ctx: &AppContext, nombre: &str, numero: &str) -> AppResult<()> {
    let mut view = ContactoRegistrationView::new(ctx.clone());
    view.set_nombre_contacto(nombre);
    view.set_numero_contacto(numero);

    match view.submit().await? {
        Some(contacto) => println!("Contacto registrado: #{} {contacto}", contacto.id),
        None => println!("Contacto registrado: {nombre} - {numero}"),
    }
    Ok(())
}
