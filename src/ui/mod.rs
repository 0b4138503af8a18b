// ABOUTME: Text rendering primitives shared by the views
// ABOUTME: Labelled fields, lookup selects, overlays, tables, and confirmation prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared UI primitives
//!
//! Views render to plain `String`s; the CLI decides where they go.

/// Confirmation prompts
pub mod prompt;
/// Column-aligned text tables
pub mod table;

pub use prompt::{Confirm, FixedAnswer, StdinConfirm};
pub use table::{SortDirection, Table};

use crate::loadable::Loadable;
use solicitudes_core::constants::labels;
use solicitudes_core::models::LookupOption;
use std::fmt::Write;

/// `label: value` line
#[must_use]
pub fn field(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// Render a single-select backed by a lookup collection
///
/// Pending renders the loading placeholder, a failure renders its reason,
/// and ready options are listed with the selected one marked.
#[must_use]
pub fn select<T: LookupOption>(
    label: &str,
    options: &Loadable<Vec<T>>,
    selected: Option<i64>,
) -> String {
    let mut out = format!("{label}:\n");
    match options {
        Loadable::Pending => {
            let _ = writeln!(out, "  {}", labels::LOADING);
        }
        Loadable::Failed(reason) => {
            let _ = writeln!(out, "  Error: {reason}");
        }
        Loadable::Ready(options) if options.is_empty() => {
            let _ = writeln!(out, "  (sin opciones)");
        }
        Loadable::Ready(options) => {
            for option in options {
                let mark = if selected == Some(option.id()) { 'x' } else { ' ' };
                let _ = writeln!(out, "  [{mark}] {} - {}", option.id(), option.descripcion());
            }
        }
    }
    out
}

/// Secondary panel rendered below a view's main content
#[must_use]
pub fn overlay<I, S>(title: &str, lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rule = "=".repeat(title.chars().count() + 8);
    let mut out = format!("{rule}\n=== {title} ===\n{rule}\n");
    for line in lines {
        let _ = writeln!(out, "{}", line.as_ref());
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
