// ABOUTME: Integration tests for the REST clients against the mock backend
// ABOUTME: Covers every endpoint plus status, transport, and decode error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{routes, unreachable_base_url, MockBackend};
use solicitudes_admin::config::ClientConfig;
use solicitudes_admin::context::AppContext;
use solicitudes_admin::errors::ErrorCode;
use solicitudes_admin::models::{FechaEnvio, NuevaSolicitud, NuevoContacto};

#[tokio::test]
async fn test_list_solicitudes_decodes_collection() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    let solicitudes = ctx.solicitudes().list().await.unwrap();

    assert_eq!(solicitudes.len(), 3);
    assert_eq!(solicitudes[1].codigo, "SOL-002");
    assert_eq!(solicitudes[1].marca(), "Globex");
    assert_eq!(solicitudes[1].fecha_envio_display(), "15-06-2024");
    assert_eq!(backend.calls(routes::LIST_SOLICITUDES), 1);
}

#[tokio::test]
async fn test_get_by_codigo_and_not_found() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    let found = ctx.solicitudes().get_by_codigo("SOL-003").await.unwrap();
    assert_eq!(found.id, 3);

    let err = ctx.solicitudes().get_by_codigo("NOPE").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.details["status"], 404);
}

#[tokio::test]
async fn test_create_solicitud_sends_camel_case_without_contacts() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    let created = ctx
        .solicitudes()
        .create(&NuevaSolicitud {
            marca_id: 2,
            tipo_solicitud_id: 1,
            nombre_contacto: "Diego".into(),
            numero_contacto: "699999999".into(),
            fecha_envio: FechaEnvio::parse("2024-05-20").unwrap(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.marca(), "Globex");
    assert_eq!(created.tipo(), "Reclamo");

    let bodies = backend.solicitud_bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["marcaId"], 2);
    assert_eq!(bodies[0]["tipoSolicitudId"], 1);
    assert_eq!(bodies[0]["fechaEnvio"], "2024-05-20T00:00:00");
    assert!(bodies[0].get("contactos").is_none());
}

#[tokio::test]
async fn test_delete_solicitud_by_id() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    ctx.solicitudes().delete(2).await.unwrap();
    let ids: Vec<i64> = backend.solicitudes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let err = ctx.solicitudes().delete(2).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_export_returns_raw_csv() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    let csv = ctx.solicitudes().export_csv().await.unwrap();
    let text = String::from_utf8(csv.to_vec()).unwrap();

    assert!(text.starts_with("id,codigo,"));
    assert_eq!(text.lines().count(), 4);
    assert_eq!(backend.calls(routes::EXPORT), 1);
    assert_eq!(backend.calls(routes::GET_SOLICITUD), 0);
}

#[tokio::test]
async fn test_contact_endpoints() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    assert_eq!(ctx.contactos().list().await.unwrap().len(), 2);
    assert_eq!(ctx.contactos().list_by_solicitud(1).await.unwrap().len(), 2);
    assert!(ctx.contactos().list_by_solicitud(2).await.unwrap().is_empty());

    let created = ctx
        .contactos()
        .create(&NuevoContacto::standalone("Marta", "633333333"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.solicitud_id, None);
    assert!(backend.contacto_bodies()[0].get("solicitudId").is_none());

    ctx.contactos().delete(created.id).await.unwrap();
    assert_eq!(backend.contactos().len(), 2);
}

#[tokio::test]
async fn test_lookup_endpoints() {
    let backend = MockBackend::seeded().await;
    let ctx = backend.context();

    let marcas = ctx.marcas().list().await.unwrap();
    let tipos = ctx.tipos_solicitud().list().await.unwrap();

    assert_eq!(marcas[0].descripcion, "Acme");
    assert_eq!(tipos[1].descripcion, "Consulta técnica");
}

#[tokio::test]
async fn test_server_error_maps_to_external_service_error() {
    let backend = MockBackend::seeded().await;
    backend.fail(routes::MARCAS);
    let ctx = backend.context();

    let err = ctx.marcas().list().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.details["status"], 500);
    assert_eq!(err.details["method"], "GET");
    assert_eq!(err.details["path"], "/marca");
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_unavailable() {
    common::init_test_logging();
    let config = ClientConfig::with_base_url(&unreachable_base_url().await).unwrap();
    let ctx = AppContext::from_config(config).unwrap();

    let err = ctx.solicitudes().list().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_create_answer_without_id_is_a_decode_error() {
    let backend = MockBackend::seeded().await;
    backend.omit_created_id();
    let ctx = backend.context();

    let err = ctx
        .solicitudes()
        .create(&NuevaSolicitud {
            marca_id: 1,
            tipo_solicitud_id: 1,
            nombre_contacto: "Ana".into(),
            numero_contacto: "1".into(),
            fecha_envio: FechaEnvio::today(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_contact_create_without_echoed_body_is_success() {
    let backend = MockBackend::seeded().await;
    backend.bodiless_contact_creates();
    let ctx = backend.context();

    let created = ctx
        .contactos()
        .create(&NuevoContacto::for_solicitud(1, "Marta", "633333333"))
        .await
        .unwrap();

    assert!(created.is_none());
    assert_eq!(backend.calls(routes::CREATE_CONTACTO), 1);
    assert!(backend
        .contactos()
        .iter()
        .any(|c| c.nombre_contacto == "Marta" && c.solicitud_id == Some(1)));
}
