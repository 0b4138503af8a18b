// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for solicitudes-cli
// ABOUTME: Provides access to request, contact, and lookup commands

pub mod contactos;
pub mod lookups;
pub mod solicitudes;
