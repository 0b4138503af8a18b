// ABOUTME: Wire models for requests, contacts, brands, and request types
// ABOUTME: camelCase JSON mapping plus the tolerant submission-date type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models exchanged with the REST backend.
//!
//! Field names follow the backend's JSON (`codigo`, `marcaDescripcion`,
//! `fechaEnvio`, ...) through `rename_all = "camelCase"`. Responses are
//! decoded leniently: anything but the identifier may be missing or `null`.

use crate::constants::formats;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Submission date of a request
///
/// The backend has been seen to answer with plain dates, naive timestamps,
/// and RFC 3339 timestamps, so decoding accepts all three. Encoding always
/// produces `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FechaEnvio(NaiveDateTime);

impl FechaEnvio {
    /// Midnight of the given day
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }

    /// Today, in local time, at midnight
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Calendar day of the submission
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Parse any of the accepted representations
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the text is none of: `YYYY-MM-DD`,
    /// `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`, RFC 3339.
    pub fn parse(text: &str) -> AppResult<Self> {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt.naive_local()));
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
                return Ok(Self(dt));
            }
        }
        NaiveDate::parse_from_str(text, formats::INPUT_DATE)
            .map(Self::from_date)
            .map_err(|e| AppError::invalid_format(format!("invalid date '{text}': {e}")))
    }

    /// `dd-MM-yyyy` rendering used by the list view
    #[must_use]
    pub fn display_date(&self) -> String {
        self.0.format(formats::DISPLAY_DATE).to_string()
    }
}

impl fmt::Display for FechaEnvio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(formats::WIRE_DATETIME))
    }
}

impl Serialize for FechaEnvio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FechaEnvio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A request ("solicitud") as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solicitud {
    /// Backend identifier, used for delete and contact lookups
    pub id: i64,
    /// Human-readable code assigned by the backend
    #[serde(default, deserialize_with = "nullable_string")]
    pub codigo: String,
    /// Brand reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca_id: Option<i64>,
    /// Brand description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca_descripcion: Option<String>,
    /// Request-type reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_solicitud_id: Option<i64>,
    /// Request-type description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_solicitud_descripcion: Option<String>,
    /// Submission date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_envio: Option<FechaEnvio>,
    /// Primary contact name
    #[serde(default, deserialize_with = "nullable_string")]
    pub nombre_contacto: String,
    /// Primary contact number
    #[serde(default, deserialize_with = "nullable_string")]
    pub numero_contacto: String,
}

impl Solicitud {
    /// Submission date as `dd-MM-yyyy`, empty when unknown
    #[must_use]
    pub fn fecha_envio_display(&self) -> String {
        self.fecha_envio
            .map(|fecha| fecha.display_date())
            .unwrap_or_default()
    }

    /// Brand description, empty when unknown
    #[must_use]
    pub fn marca(&self) -> &str {
        self.marca_descripcion.as_deref().unwrap_or_default()
    }

    /// Request-type description, empty when unknown
    #[must_use]
    pub fn tipo(&self) -> &str {
        self.tipo_solicitud_descripcion
            .as_deref()
            .unwrap_or_default()
    }
}

/// Body of a request creation call
///
/// Pending contacts are created separately once the identifier is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevaSolicitud {
    /// Selected brand
    pub marca_id: i64,
    /// Selected request type
    pub tipo_solicitud_id: i64,
    /// Primary contact name
    pub nombre_contacto: String,
    /// Primary contact number
    pub numero_contacto: String,
    /// Submission date
    pub fecha_envio: FechaEnvio,
}

/// A contact ("contacto")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacto {
    /// Backend identifier
    pub id: i64,
    /// Contact name
    #[serde(default, deserialize_with = "nullable_string")]
    pub nombre_contacto: String,
    /// Contact phone number
    #[serde(default, deserialize_with = "nullable_string")]
    pub numero_contacto: String,
    /// Owning request, when associated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solicitud_id: Option<i64>,
}

impl fmt::Display for Contacto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.nombre_contacto, self.numero_contacto)
    }
}

/// Body of a contact creation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoContacto {
    /// Owning request; absent for standalone contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solicitud_id: Option<i64>,
    /// Contact name
    pub nombre_contacto: String,
    /// Contact phone number
    pub numero_contacto: String,
}

impl NuevoContacto {
    /// Standalone contact
    pub fn standalone(nombre: impl Into<String>, numero: impl Into<String>) -> Self {
        Self {
            solicitud_id: None,
            nombre_contacto: nombre.into(),
            numero_contacto: numero.into(),
        }
    }

    /// Contact owned by a request
    pub fn for_solicitud(
        solicitud_id: i64,
        nombre: impl Into<String>,
        numero: impl Into<String>,
    ) -> Self {
        Self {
            solicitud_id: Some(solicitud_id),
            nombre_contacto: nombre.into(),
            numero_contacto: numero.into(),
        }
    }
}

/// Brand lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marca {
    /// Identifier sent back as `marcaId`
    pub id: i64,
    /// Display text
    #[serde(default, deserialize_with = "nullable_string")]
    pub descripcion: String,
}

/// Request-type lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipoSolicitud {
    /// Identifier sent back as `tipoSolicitudId`
    pub id: i64,
    /// Display text
    #[serde(default, deserialize_with = "nullable_string")]
    pub descripcion: String,
}

/// Common shape of the lookup entities, used to render select options
pub trait LookupOption {
    /// Option value
    fn id(&self) -> i64;
    /// Option label
    fn descripcion(&self) -> &str;
}

impl LookupOption for Marca {
    fn id(&self) -> i64 {
        self.id
    }

    fn descripcion(&self) -> &str {
        &self.descripcion
    }
}

impl LookupOption for TipoSolicitud {
    fn id(&self) -> i64 {
        self.id
    }

    fn descripcion(&self) -> &str {
        &self.descripcion
    }
}
