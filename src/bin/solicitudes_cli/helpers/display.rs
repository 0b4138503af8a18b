// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for solicitudes-cli
// ABOUTME: Prints delete outcomes, export results, and registration reports

use solicitudes_admin::views::{DeleteOutcome, SubmissionReport};
use std::path::Path;

/// Warning line on stderr, kept apart from rendered views on stdout
pub fn warn_line(message: &str) {
    eprintln!("WARNING {message}");
}

/// Display the result of a delete request
pub fn display_delete_outcome(id: i64, outcome: &DeleteOutcome) {
    match outcome {
        DeleteOutcome::Declined => println!("Eliminación cancelada (solicitud #{id})"),
        DeleteOutcome::Deleted => println!("Success Solicitud #{id} eliminada"),
        DeleteOutcome::Failed(reason) => {
            println!("Error No se pudo eliminar la solicitud #{id}: {reason}");
        }
    }
}

/// Display where the CSV export was written
pub fn display_export(path: &Path, bytes: usize) {
    println!("Success Exportación guardada en {} ({bytes} bytes)", path.display());
}

/// Display what a registration created, failed, skipped, and rolled back
pub fn display_submission_report(report: &SubmissionReport) {
    let solicitud = &report.solicitud;
    println!("\nSolicitud registrada");
    println!("{}", "=".repeat(50));
    println!("   Id: {}", solicitud.id);
    println!("   Código: {}", solicitud.codigo);
    println!("   Envío de contactos: {:?}", report.dispatch);

    if !report.created.is_empty() {
        println!("\nContactos creados:");
        for created in &report.created {
            println!("   {created}");
        }
    }
    if !report.failed.is_empty() {
        println!("\nContactos con error:");
        for failure in &report.failed {
            println!("   {} ({})", failure.contacto, failure.reason);
        }
    }
    if !report.skipped.is_empty() {
        println!("\nContactos no enviados:");
        for contacto in &report.skipped {
            println!("   {contacto}");
        }
    }

    if let Some(rollback) = &report.rollback {
        println!("\nReversión:");
        println!("   Contactos eliminados: {}", rollback.deleted_contactos.len());
        println!(
            "   Solicitud eliminada: {}",
            if rollback.solicitud_deleted { "sí" } else { "no" }
        );
        for failure in &rollback.failures {
            println!("   Error {failure}");
        }
    }
}
