// ABOUTME: Configuration management module for the Solicitudes admin client
// ABOUTME: Re-exports the environment-driven client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: there is no config file. The CLI may
//! override individual values with flags after loading.

/// Environment and client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment};
