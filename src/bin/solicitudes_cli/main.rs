// ABOUTME: Solicitudes CLI - command-line admin client for requests and contacts
// ABOUTME: Lists, shows, creates, deletes, and exports requests through the REST backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Solicitudes admin CLI
//!
//! Usage:
//! ```bash
//! # List requests submitted in a date range, newest first
//! solicitudes-cli solicitudes list --desde 2024-03-01 --hasta 2024-09-01 --sort fecha --desc
//!
//! # Show one request and its contacts
//! solicitudes-cli solicitudes show SOL-002 --contactos
//!
//! # Register a request with two extra contacts
//! solicitudes-cli solicitudes create --marca 1 --tipo 2 --nombre Ana --numero 600111222 \
//!     --contacto "Luis:611111111" --contacto "Eva:622222222"
//!
//! # Delete without the confirmation prompt
//! solicitudes-cli solicitudes delete 42 --yes
//!
//! # Save the backend CSV export
//! solicitudes-cli solicitudes export --output solicitudes.csv
//!
//! # Standalone contacts and lookups
//! solicitudes-cli contactos list
//! solicitudes-cli contactos create --nombre Marta --numero 633333333
//! solicitudes-cli lookups
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use solicitudes_admin::{
    config::ClientConfig,
    constants::defaults,
    context::AppContext,
    errors::AppResult,
    logging::LoggingConfig,
    views::{PendingContact, SolicitudColumn},
};
use std::path::PathBuf;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "solicitudes-cli",
    about = "Solicitudes admin CLI",
    long_about = "Command-line admin client for requests (solicitudes) and contacts (contactos) backed by the Solicitudes REST API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (defaults to `SOLICITUDES_API_URL` or http://localhost:8081)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Request management commands
    Solicitudes {
        #[command(subcommand)]
        action: SolicitudCommand,
    },

    /// Standalone contact commands
    Contactos {
        #[command(subcommand)]
        action: ContactoCommand,
    },

    /// List brands and request types
    Lookups,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SolicitudCommand {
    /// List requests with optional filters
    List {
        /// Earliest submission day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        desde: Option<String>,

        /// Latest submission day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        hasta: Option<String>,

        /// Text the request type must contain (any case)
        #[arg(long)]
        tipo: Option<String>,

        /// Sort column: codigo, marca, tipo, fecha, nombre, numero
        #[arg(long, default_value_t = SolicitudColumn::Codigo)]
        sort: SolicitudColumn,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show one request by code
    Show {
        /// Request code (e.g. SOL-001)
        codigo: String,

        /// Also list the contacts associated with the request
        #[arg(long)]
        contactos: bool,
    },

    /// Delete a request by identifier
    Delete {
        /// Request identifier
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Save the backend CSV export
    Export {
        /// Destination file
        #[arg(long, short = 'o', default_value = defaults::EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Register a request and its contacts
    Create {
        /// Brand identifier
        #[arg(long)]
        marca: i64,

        /// Request-type identifier
        #[arg(long)]
        tipo: i64,

        /// Primary contact name
        #[arg(long)]
        nombre: String,

        /// Primary contact number (up to 9 digits)
        #[arg(long)]
        numero: String,

        /// Submission date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        fecha: Option<String>,

        /// Additional contact as NAME:NUMBER (repeatable)
        #[arg(long = "contacto", value_parser = helpers::parse_contacto)]
        contactos: Vec<PendingContact>,

        /// Create additional contacts concurrently, without rollback
        #[arg(long, conflicts_with = "no_rollback")]
        concurrent: bool,

        /// Keep already-created records when a contact fails
        #[arg(long)]
        no_rollback: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ContactoCommand {
    /// List every contact
    List,

    /// Register a standalone contact
    Create {
        /// Contact name
        #[arg(long)]
        nombre: String,

        /// Contact number
        #[arg(long)]
        numero: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.override_base_url(api_url)?;
    }
    info!("Solicitudes CLI: {}", config.summary());
    let ctx = AppContext::from_config(config)?;

    let result = match cli.command {
        Command::Solicitudes { action } => match action {
            SolicitudCommand::List {
                desde,
                hasta,
                tipo,
                sort,
                desc,
            } => {
                let filter = commands::solicitudes::ListFilter { desde, hasta, tipo };
                commands::solicitudes::list(&ctx, &filter, sort, desc).await
            }
            SolicitudCommand::Show { codigo, contactos } => {
                commands::solicitudes::show(&ctx, &codigo, contactos).await
            }
            SolicitudCommand::Delete { id, yes } => {
                commands::solicitudes::delete(&ctx, id, yes).await
            }
            SolicitudCommand::Export { output } => {
                commands::solicitudes::export(&ctx, &output).await
            }
            SolicitudCommand::Create {
                marca,
                tipo,
                nombre,
                numero,
                fecha,
                contactos,
                concurrent,
                no_rollback,
            } => {
                let args = commands::solicitudes::CreateArgs {
                    marca,
                    tipo,
                    nombre,
                    numero,
                    fecha,
                    contactos,
                    concurrent,
                    rollback: !no_rollback,
                };
                commands::solicitudes::create(&ctx, args).await
            }
        },
        Command::Contactos { action } => match action {
            ContactoCommand::List => commands::contactos::list(&ctx).await,
            ContactoCommand::Create { nombre, numero } => {
                commands::contactos::create(&ctx, &nombre, &numero).await
            }
        },
        Command::Lookups => commands::lookups::show(&ctx).await,
    };

    ctx.shutdown();
    result
}
