// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Argument parsing and output helpers for solicitudes-cli
// ABOUTME: Parses NAME:NUMBER contact arguments and re-exports display helpers

pub mod display;

use solicitudes_admin::views::PendingContact;

/// Parse a `NAME:NUMBER` contact argument
///
/// The split happens at the last colon so names may contain one.
pub fn parse_contacto(raw: &str) -> Result<PendingContact, String> {
    let (nombre, numero) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:NUMBER, got '{raw}'"))?;
    let (nombre, numero) = (nombre.trim(), numero.trim());
    if nombre.is_empty() || numero.is_empty() {
        return Err(format!("both name and number are required in '{raw}'"));
    }
    Ok(PendingContact::new(nombre, numero))
}
