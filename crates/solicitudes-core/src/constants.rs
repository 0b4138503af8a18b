// ABOUTME: Constants for the Solicitudes admin client organized by domain
// ABOUTME: Endpoint paths, configuration defaults, and user-facing labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Grouped by domain rather than kept in one flat list.

/// REST resource paths, relative to the configured base URL
pub mod endpoints {
    /// Request collection
    pub const SOLICITUDES: &str = "/solicitudes";
    /// CSV export under the request collection
    pub const SOLICITUDES_EXPORT: &str = "/solicitudes/export";
    /// Contact collection
    pub const CONTACTOS: &str = "/contactos";
    /// Brand lookup collection
    pub const MARCAS: &str = "/marca";
    /// Request-type lookup collection
    pub const TIPOS_SOLICITUD: &str = "/tipoSolicitud";
}

/// Configuration defaults
pub mod defaults {
    /// Backend base URL when nothing is configured
    pub const API_BASE_URL: &str = "http://localhost:8081";
    /// File name the CSV export is saved under
    pub const EXPORT_FILE_NAME: &str = "solicitudes.csv";
    /// Maximum length of a contact phone number
    pub const PHONE_MAX_LEN: usize = 9;
}

/// Environment variable names
pub mod env_config {
    /// Backend base URL override
    pub const API_URL: &str = "SOLICITUDES_API_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service names used in logs
pub mod service_names {
    /// This client
    pub const SOLICITUDES_ADMIN: &str = "solicitudes-admin";
    /// The REST backend, as named in error messages
    pub const BACKEND: &str = "solicitudes-api";
}

/// Date formats
pub mod formats {
    /// Display format for submission dates
    pub const DISPLAY_DATE: &str = "%d-%m-%Y";
    /// Wire format for submission dates sent to the backend
    pub const WIRE_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";
    /// Date-only input format (filters, CLI)
    pub const INPUT_DATE: &str = "%Y-%m-%d";
}

/// User-facing labels rendered by the views
pub mod labels {
    /// Placeholder while something loads
    pub const LOADING: &str = "Cargando...";
    /// Empty filtered request list
    pub const NO_SOLICITUDES: &str = "No hay solicitudes disponibles.";
    /// Empty contacts overlay
    pub const NO_CONTACTOS: &str = "No hay contactos asociados.";
    /// Delete confirmation prompt
    pub const CONFIRM_DELETE: &str = "¿Estás seguro de que deseas eliminar esta solicitud?";
    /// Delete success notice
    pub const DELETED: &str = "Solicitud eliminada correctamente";
    /// Registration success notice
    pub const REGISTERED: &str = "Solicitud y contactos registrados con éxito";
    /// Delete action cell text
    pub const DELETE_ACTION: &str = "Eliminar";
}
