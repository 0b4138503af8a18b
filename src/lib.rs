// ABOUTME: Main library entry point for the Solicitudes admin client
// ABOUTME: Typed REST clients, stateful views, and the ambient config/logging stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Solicitudes Admin
//!
//! Administrative client for "solicitudes" (requests) and their "contactos"
//! (contacts), backed by a REST API.
//!
//! ## Architecture
//!
//! - **api**: one thin client per resource over a shared `reqwest` client
//! - **views**: list, detail, and registration views holding their own state
//! - **context**: explicit dependencies handed to each view
//! - **lifecycle**: view scopes that discard responses after a view closes
//! - **loadable**: pending / failed / ready state for anything fetched
//! - **ui**: text tables, selects, overlays, and confirmation prompts
//! - **config** / **logging**: environment-driven configuration and `tracing`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use solicitudes_admin::config::ClientConfig;
//! use solicitudes_admin::context::AppContext;
//! use solicitudes_admin::errors::AppResult;
//! use solicitudes_admin::views::SolicitudListView;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let ctx = AppContext::from_config(ClientConfig::from_env()?)?;
//!     let mut list = SolicitudListView::new(ctx);
//!     list.load().await;
//!     println!("{}", list.render());
//!     Ok(())
//! }
//! ```

/// REST clients for requests, contacts, brands, and request types
pub mod api;

/// Environment-driven client configuration
pub mod config;

/// Dependency context passed to views
pub mod context;

/// View lifetime scopes and cancellation
pub mod lifecycle;

/// Three-state loading container
pub mod loadable;

/// Structured logging setup
pub mod logging;

/// Text rendering primitives and prompts
pub mod ui;

/// Stateful views
pub mod views;

pub use solicitudes_core::{constants, errors, filter, models, validators};
