// ABOUTME: Client-side filter for the request list view
// ABOUTME: ANDs an optional date range with a case-insensitive request-type match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request list filtering.
//!
//! A request passes when every configured clause holds; a clause with no
//! value always passes. Dates are compared by calendar day, so an end bound
//! includes the whole end day.

use crate::errors::AppResult;
use crate::models::{FechaEnvio, Solicitud};
use chrono::NaiveDate;

/// Filter values entered above the request table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolicitudFilter {
    /// Earliest submission day, inclusive
    pub desde: Option<NaiveDate>,
    /// Latest submission day, inclusive
    pub hasta: Option<NaiveDate>,
    /// Substring the request-type description must contain, any case
    pub tipo: Option<String>,
}

impl SolicitudFilter {
    /// Build a filter from raw text inputs, treating blank strings as unset
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if a non-blank date does not parse.
    pub fn from_inputs(desde: &str, hasta: &str, tipo: &str) -> AppResult<Self> {
        Ok(Self {
            desde: parse_day(desde)?,
            hasta: parse_day(hasta)?,
            tipo: Some(tipo.to_owned()).filter(|t| !t.is_empty()),
        })
    }

    /// Whether no clause is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.desde.is_none() && self.hasta.is_none() && self.tipo_needle().is_none()
    }

    fn tipo_needle(&self) -> Option<String> {
        self.tipo
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `solicitud` satisfies every set clause
    #[must_use]
    pub fn passes(&self, solicitud: &Solicitud) -> bool {
        let fecha = solicitud.fecha_envio.map(|f| f.date());

        let after_start = self
            .desde
            .map_or(true, |desde| fecha.is_some_and(|f| f >= desde));
        let before_end = self
            .hasta
            .map_or(true, |hasta| fecha.is_some_and(|f| f <= hasta));
        let type_matches = self
            .tipo_needle()
            .map_or(true, |needle| solicitud.tipo().to_lowercase().contains(&needle));

        after_start && before_end && type_matches
    }

    /// Filter a full collection, preserving order
    #[must_use]
    pub fn apply<'a>(&self, solicitudes: &'a [Solicitud]) -> Vec<&'a Solicitud> {
        solicitudes.iter().filter(|s| self.passes(s)).collect()
    }
}

fn parse_day(text: &str) -> AppResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    FechaEnvio::parse(text).map(|f| Some(f.date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solicitud(id: i64, fecha: Option<&str>, tipo: Option<&str>) -> Solicitud {
        Solicitud {
            id,
            codigo: format!("SOL-{id:03}"),
            marca_id: None,
            marca_descripcion: None,
            tipo_solicitud_id: None,
            tipo_solicitud_descripcion: tipo.map(str::to_owned),
            fecha_envio: fecha.map(|f| FechaEnvio::parse(f).unwrap()),
            nombre_contacto: String::new(),
            numero_contacto: String::new(),
        }
    }

    fn day(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_date_range_keeps_only_inner_request() {
        let all = vec![
            solicitud(1, Some("2024-01-01"), None),
            solicitud(2, Some("2024-06-15"), None),
            solicitud(3, Some("2024-12-31"), None),
        ];
        let filter = SolicitudFilter {
            desde: Some(day("2024-03-01")),
            hasta: Some(day("2024-09-01")),
            tipo: None,
        };

        let ids: Vec<i64> = filter.apply(&all).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = SolicitudFilter::default();
        assert!(filter.is_empty());
        assert!(filter.passes(&solicitud(1, None, None)));
        assert!(filter.passes(&solicitud(2, Some("1999-01-01"), Some("Reclamo"))));
    }

    #[test]
    fn test_bounds_are_inclusive_by_day() {
        let filter = SolicitudFilter {
            desde: Some(day("2024-06-15")),
            hasta: Some(day("2024-06-15")),
            tipo: None,
        };
        assert!(filter.passes(&solicitud(1, Some("2024-06-15T23:59:00"), None)));
        assert!(!filter.passes(&solicitud(2, Some("2024-06-16T00:00:00"), None)));
    }

    #[test]
    fn test_missing_date_fails_set_date_clause() {
        let filter = SolicitudFilter {
            desde: Some(day("2024-01-01")),
            ..SolicitudFilter::default()
        };
        assert!(!filter.passes(&solicitud(1, None, None)));
    }

    #[test]
    fn test_type_match_is_case_insensitive_substring() {
        let filter = SolicitudFilter {
            tipo: Some("RECL".into()),
            ..SolicitudFilter::default()
        };
        assert!(filter.passes(&solicitud(1, None, Some("Reclamo técnico"))));
        assert!(!filter.passes(&solicitud(2, None, Some("Consulta"))));
        assert!(!filter.passes(&solicitud(3, None, None)));
    }

    #[test]
    fn test_clauses_are_anded() {
        let filter = SolicitudFilter {
            desde: Some(day("2024-01-01")),
            hasta: None,
            tipo: Some("consulta".into()),
        };
        assert!(filter.passes(&solicitud(1, Some("2024-02-01"), Some("Consulta"))));
        assert!(!filter.passes(&solicitud(2, Some("2023-02-01"), Some("Consulta"))));
        assert!(!filter.passes(&solicitud(3, Some("2024-02-01"), Some("Reclamo"))));
    }

    #[test]
    fn test_from_inputs_treats_blank_as_unset() {
        let filter = SolicitudFilter::from_inputs("", "  ", "").unwrap();
        assert!(filter.is_empty());

        let filter = SolicitudFilter::from_inputs("2024-03-01", "", "alta").unwrap();
        assert_eq!(filter.desde, Some(day("2024-03-01")));
        assert_eq!(filter.tipo.as_deref(), Some("alta"));

        assert!(SolicitudFilter::from_inputs("01/03/2024", "", "").is_err());
    }
}
