// ABOUTME: Superficial field validators shared by the registration forms
// ABOUTME: Phone-shape check, keystroke filter, and required-field check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::PHONE_MAX_LEN;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

static PHONE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn phone_pattern() -> Option<&'static Regex> {
    PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{0,9}$").ok())
        .as_ref()
}

/// Whether `telefono` has the shape of a phone number: up to nine digits
///
/// The empty string passes so a field can be cleared digit by digit.
#[must_use]
pub fn validate_telefono(telefono: &str) -> bool {
    phone_pattern().is_some_and(|re| re.is_match(telefono))
}

/// Keystroke filter for the primary contact number field
///
/// A candidate value is accepted iff it is at most nine characters long and
/// passes [`validate_telefono`]. Rejected candidates leave the field as it was.
#[must_use]
pub fn accepts_phone_input(candidate: &str) -> bool {
    candidate.chars().count() <= PHONE_MAX_LEN && validate_telefono(candidate)
}

/// Required-field check used before submitting a form
///
/// # Errors
///
/// Returns `MissingRequiredField` naming `field` when `value` is blank.
pub fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}
