// ABOUTME: Core types and constants for the Solicitudes admin client
// ABOUTME: Foundation crate with error handling, models, validators, and list filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Solicitudes Core
//!
//! Foundation crate providing the shared types of the Solicitudes admin
//! client. Nothing here performs I/O, so the whole crate is unit-testable
//! without a backend.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Endpoint paths, defaults, and user-facing labels
//! - **models**: Wire models for requests, contacts, and lookups
//! - **validators**: Superficial field checks (phone shape, required fields)
//! - **filter**: Client-side filtering of the request list

/// Unified error handling system with standard error codes
pub mod errors;

/// Endpoint paths, defaults, and user-facing labels
pub mod constants;

/// Wire models (Solicitud, Contacto, Marca, `TipoSolicitud`)
pub mod models;

/// Field-level validators
pub mod validators;

/// Client-side request list filtering
pub mod filter;

pub use errors::{AppError, AppResult, ErrorCode};
pub use filter::SolicitudFilter;
pub use models::{
    Contacto, FechaEnvio, Marca, NuevaSolicitud, NuevoContacto, Solicitud, TipoSolicitud,
};
