// ABOUTME: Shared test utilities and an in-process mock of the Solicitudes backend
// ABOUTME: axum server on an ephemeral port with in-memory data, failure injection, and call counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `solicitudes_admin`
//!
//! [`MockBackend`] serves the same REST surface as the real backend. Every
//! handler counts its calls under a route key (see [`routes`]) and can be
//! made to fail or to answer slowly.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use solicitudes_admin::config::ClientConfig;
use solicitudes_admin::context::AppContext;
use solicitudes_admin::models::{
    Contacto, FechaEnvio, Marca, NuevaSolicitud, NuevoContacto, Solicitud, TipoSolicitud,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tokio::task::JoinHandle;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Route keys used for call counting and failure injection
pub mod routes {
    pub const LIST_SOLICITUDES: &str = "GET /solicitudes";
    pub const GET_SOLICITUD: &str = "GET /solicitudes/{codigo}";
    pub const CREATE_SOLICITUD: &str = "POST /solicitudes";
    pub const DELETE_SOLICITUD: &str = "DELETE /solicitudes/{id}";
    pub const EXPORT: &str = "GET /solicitudes/export";
    pub const LIST_CONTACTOS: &str = "GET /contactos";
    pub const CONTACTOS_BY_SOLICITUD: &str = "GET /contactos/{solicitudId}";
    pub const CREATE_CONTACTO: &str = "POST /contactos";
    pub const DELETE_CONTACTO: &str = "DELETE /contactos/{id}";
    pub const MARCAS: &str = "GET /marca";
    pub const TIPOS_SOLICITUD: &str = "GET /tipoSolicitud";
}

#[derive(Debug, Default)]
struct MockState {
    solicitudes: Vec<Solicitud>,
    contactos: Vec<Contacto>,
    marcas: Vec<Marca>,
    tipos: Vec<TipoSolicitud>,
    next_id: i64,
    calls: HashMap<&'static str, usize>,
    failing: HashSet<&'static str>,
    failing_contact_names: HashSet<String>,
    delays: HashMap<&'static str, Duration>,
    omit_created_id: bool,
    bodiless_contact_creates: bool,
    solicitud_bodies: Vec<Value>,
    contacto_bodies: Vec<Value>,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<MockState>>;

/// Running mock backend; the server task stops when this is dropped
pub struct MockBackend {
    base_url: String,
    state: Shared,
    handle: JoinHandle<()>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl MockBackend {
    /// Backend with no data at all
    pub async fn empty() -> Self {
        init_test_logging();
        let state: Shared = Arc::new(Mutex::new(MockState {
            next_id: 100,
            ..MockState::default()
        }));
        let app = router(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }

    /// Backend with two brands, two request types, three requests dated
    /// 2024-01-01 / 2024-06-15 / 2024-12-31, and two contacts on the first
    pub async fn seeded() -> Self {
        let backend = Self::empty().await;
        {
            let mut state = backend.state.lock().unwrap();
            state.marcas = vec![marca(1, "Acme"), marca(2, "Globex")];
            state.tipos = vec![tipo(1, "Reclamo"), tipo(2, "Consulta técnica")];
            state.solicitudes = vec![
                solicitud(1, "SOL-001", (1, "Acme"), (1, "Reclamo"), "2024-01-01", ("Ana", "600000001")),
                solicitud(2, "SOL-002", (2, "Globex"), (2, "Consulta técnica"), "2024-06-15", ("Bruno", "600000002")),
                solicitud(3, "SOL-003", (1, "Acme"), (2, "Consulta técnica"), "2024-12-31", ("Carla", "600000003")),
            ];
            state.contactos = vec![
                Contacto {
                    id: 11,
                    nombre_contacto: "Eva".into(),
                    numero_contacto: "611111111".into(),
                    solicitud_id: Some(1),
                },
                Contacto {
                    id: 12,
                    nombre_contacto: "Luis".into(),
                    numero_contacto: "622222222".into(),
                    solicitud_id: Some(1),
                },
            ];
        }
        backend
    }

    /// Base URL of the running server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client configuration pointing at this backend
    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_base_url(&self.base_url).unwrap()
    }

    /// Context whose clients talk to this backend
    pub fn context(&self) -> AppContext {
        AppContext::from_config(self.config()).unwrap()
    }

    /// Number of calls received on `route`
    pub fn calls(&self, route: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(route)
            .copied()
            .unwrap_or(0)
    }

    /// Call counts readable from a spawned task
    pub fn call_counter(&self) -> CallCounter {
        CallCounter(Arc::clone(&self.state))
    }

    /// Answer HTTP 500 on `route` from now on
    pub fn fail(&self, route: &'static str) {
        self.state.lock().unwrap().failing.insert(route);
    }

    /// Answer HTTP 500 when a contact named `nombre` is created
    pub fn fail_contact_named(&self, nombre: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_contact_names
            .insert(nombre.to_owned());
    }

    /// Wait `delay` before answering on `route`
    pub fn delay(&self, route: &'static str, delay: Duration) {
        self.state.lock().unwrap().delays.insert(route, delay);
    }

    /// Answer request creation with a body that has no `id`
    pub fn omit_created_id(&self) {
        self.state.lock().unwrap().omit_created_id = true;
    }

    /// Answer contact creation with 201 and an empty body
    pub fn bodiless_contact_creates(&self) {
        self.state.lock().unwrap().bodiless_contact_creates = true;
    }

    /// Stored requests
    pub fn solicitudes(&self) -> Vec<Solicitud> {
        self.state.lock().unwrap().solicitudes.clone()
    }

    /// Stored contacts
    pub fn contactos(&self) -> Vec<Contacto> {
        self.state.lock().unwrap().contactos.clone()
    }

    /// Raw JSON bodies received on request creation
    pub fn solicitud_bodies(&self) -> Vec<Value> {
        self.state.lock().unwrap().solicitud_bodies.clone()
    }

    /// Raw JSON bodies received on contact creation
    pub fn contacto_bodies(&self) -> Vec<Value> {
        self.state.lock().unwrap().contacto_bodies.clone()
    }
}

/// Shared view of the backend's call counts
#[derive(Clone)]
pub struct CallCounter(Shared);

impl CallCounter {
    /// Number of calls received on `route`
    pub fn get(&self, route: &str) -> usize {
        self.0.lock().unwrap().calls.get(route).copied().unwrap_or(0)
    }
}

fn marca(id: i64, descripcion: &str) -> Marca {
    Marca {
        id,
        descripcion: descripcion.into(),
    }
}

fn tipo(id: i64, descripcion: &str) -> TipoSolicitud {
    TipoSolicitud {
        id,
        descripcion: descripcion.into(),
    }
}

fn solicitud(
    id: i64,
    codigo: &str,
    (marca_id, marca): (i64, &str),
    (tipo_id, tipo): (i64, &str),
    fecha: &str,
    (nombre, numero): (&str, &str),
) -> Solicitud {
    Solicitud {
        id,
        codigo: codigo.into(),
        marca_id: Some(marca_id),
        marca_descripcion: Some(marca.into()),
        tipo_solicitud_id: Some(tipo_id),
        tipo_solicitud_descripcion: Some(tipo.into()),
        fecha_envio: Some(FechaEnvio::parse(fecha).unwrap()),
        nombre_contacto: nombre.into(),
        numero_contacto: numero.into(),
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/solicitudes", get(list_solicitudes).post(create_solicitud))
        .route("/solicitudes/export", get(export_solicitudes))
        .route(
            "/solicitudes/:key",
            get(get_solicitud).delete(delete_solicitud),
        )
        .route("/contactos", get(list_contactos).post(create_contacto))
        .route(
            "/contactos/:key",
            get(contactos_by_solicitud).delete(delete_contacto),
        )
        .route("/marca", get(list_marcas))
        .route("/tipoSolicitud", get(list_tipos))
        .with_state(state)
}

/// Count the call, apply any configured delay, then fail if configured
async fn enter(state: &Shared, route: &'static str) -> Result<(), Response> {
    let (delay, failing) = {
        let mut state = state.lock().unwrap();
        *state.calls.entry(route).or_default() += 1;
        (
            state.delays.get(route).copied(),
            state.failing.contains(route),
        )
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if failing {
        return Err(server_error(route));
    }
    Ok(())
}

fn server_error(route: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("injected failure on {route}") })),
    )
        .into_response()
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
        .into_response()
}

async fn list_solicitudes(State(state): State<Shared>) -> Response {
    if let Err(response) = enter(&state, routes::LIST_SOLICITUDES).await {
        return response;
    }
    let solicitudes = state.lock().unwrap().solicitudes.clone();
    Json(solicitudes).into_response()
}

async fn get_solicitud(State(state): State<Shared>, Path(codigo): Path<String>) -> Response {
    if let Err(response) = enter(&state, routes::GET_SOLICITUD).await {
        return response;
    }
    let found = state
        .lock()
        .unwrap()
        .solicitudes
        .iter()
        .find(|s| s.codigo == codigo)
        .cloned();
    found.map_or_else(|| not_found(&codigo), |s| Json(s).into_response())
}

async fn create_solicitud(State(state): State<Shared>, Json(raw): Json<Value>) -> Response {
    if let Err(response) = enter(&state, routes::CREATE_SOLICITUD).await {
        return response;
    }
    let body: NuevaSolicitud = match serde_json::from_value(raw.clone()) {
        Ok(body) => body,
        Err(e) => return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    };

    let mut state = state.lock().unwrap();
    state.solicitud_bodies.push(raw);
    let id = state.next_id();
    let marca = state
        .marcas
        .iter()
        .find(|m| m.id == body.marca_id)
        .map(|m| m.descripcion.clone());
    let tipo = state
        .tipos
        .iter()
        .find(|t| t.id == body.tipo_solicitud_id)
        .map(|t| t.descripcion.clone());
    let created = Solicitud {
        id,
        codigo: format!("SOL-{id:03}"),
        marca_id: Some(body.marca_id),
        marca_descripcion: marca,
        tipo_solicitud_id: Some(body.tipo_solicitud_id),
        tipo_solicitud_descripcion: tipo,
        fecha_envio: Some(body.fecha_envio),
        nombre_contacto: body.nombre_contacto,
        numero_contacto: body.numero_contacto,
    };
    state.solicitudes.push(created.clone());

    if state.omit_created_id {
        return (
            StatusCode::CREATED,
            Json(json!({ "codigo": created.codigo })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_solicitud(State(state): State<Shared>, Path(key): Path<String>) -> Response {
    if let Err(response) = enter(&state, routes::DELETE_SOLICITUD).await {
        return response;
    }
    let Ok(id) = key.parse::<i64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut state = state.lock().unwrap();
    let before = state.solicitudes.len();
    state.solicitudes.retain(|s| s.id != id);
    if state.solicitudes.len() == before {
        return not_found(&key);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn export_solicitudes(State(state): State<Shared>) -> Response {
    if let Err(response) = enter(&state, routes::EXPORT).await {
        return response;
    }
    let mut csv = String::from("id,codigo,marca,tipoSolicitud,fechaEnvio,nombreContacto,numeroContacto\n");
    for s in &state.lock().unwrap().solicitudes {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            s.id,
            s.codigo,
            s.marca(),
            s.tipo(),
            s.fecha_envio.map(|f| f.to_string()).unwrap_or_default(),
            s.nombre_contacto,
            s.numero_contacto
        ));
    }
    ([(header::CONTENT_TYPE, "text/csv")], csv).into_response()
}

async fn list_contactos(State(state): State<Shared>) -> Response {
    if let Err(response) = enter(&state, routes::LIST_CONTACTOS).await {
        return response;
    }
    let contactos = state.lock().unwrap().contactos.clone();
    Json(contactos).into_response()
}

async fn contactos_by_solicitud(State(state): State<Shared>, Path(key): Path<String>) -> Response {
    if let Err(response) = enter(&state, routes::CONTACTOS_BY_SOLICITUD).await {
        return response;
    }
    let Ok(solicitud_id) = key.parse::<i64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let contactos: Vec<Contacto> = state
        .lock()
        .unwrap()
        .contactos
        .iter()
        .filter(|c| c.solicitud_id == Some(solicitud_id))
        .cloned()
        .collect();
    Json(contactos).into_response()
}

async fn create_contacto(State(state): State<Shared>, Json(raw): Json<Value>) -> Response {
    if let Err(response) = enter(&state, routes::CREATE_CONTACTO).await {
        return response;
    }
    let body: NuevoContacto = match serde_json::from_value(raw.clone()) {
        Ok(body) => body,
        Err(e) => return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    };

    let mut state = state.lock().unwrap();
    state.contacto_bodies.push(raw);
    if state.failing_contact_names.contains(&body.nombre_contacto) {
        return server_error(routes::CREATE_CONTACTO);
    }
    let created = Contacto {
        id: state.next_id(),
        nombre_contacto: body.nombre_contacto,
        numero_contacto: body.numero_contacto,
        solicitud_id: body.solicitud_id,
    };
    state.contactos.push(created.clone());
    if state.bodiless_contact_creates {
        return StatusCode::CREATED.into_response();
    }
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_contacto(State(state): State<Shared>, Path(key): Path<String>) -> Response {
    if let Err(response) = enter(&state, routes::DELETE_CONTACTO).await {
        return response;
    }
    let Ok(id) = key.parse::<i64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut state = state.lock().unwrap();
    let before = state.contactos.len();
    state.contactos.retain(|c| c.id != id);
    if state.contactos.len() == before {
        return not_found(&key);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_marcas(State(state): State<Shared>) -> Response {
    if let Err(response) = enter(&state, routes::MARCAS).await {
        return response;
    }
    let marcas = state.lock().unwrap().marcas.clone();
    Json(marcas).into_response()
}

async fn list_tipos(State(state): State<Shared>) -> Response {
    if let Err(response) = enter(&state, routes::TIPOS_SOLICITUD).await {
        return response;
    }
    let tipos = state.lock().unwrap().tipos.clone();
    Json(tipos).into_response()
}

/// Address nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
