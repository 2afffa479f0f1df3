//! Incident reports.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fields sent when creating or updating a report.
///
/// The ids reference a person, animal, location and sensor that already
/// exist; the lookup lists feed the choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(rename = "idPessoa")]
    pub person_id: i64,
    #[serde(rename = "idAnimal")]
    pub animal_id: i64,
    #[serde(rename = "idLocal")]
    pub location_id: i64,
    #[serde(rename = "idSensor")]
    pub sensor_id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Disaster type, e.g. `enchente` or `incendio`.
    #[serde(rename = "tipoDesastre")]
    pub disaster_kind: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Local date-time of the incident.
    #[serde(rename = "dataReport")]
    pub reported_at: NaiveDateTime,
}

/// A report as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "idReport", default)]
    pub id: Option<i64>,
    #[serde(rename = "idPessoa", default)]
    pub person_id: Option<i64>,
    #[serde(rename = "idAnimal", default)]
    pub animal_id: Option<i64>,
    #[serde(rename = "idLocal", default)]
    pub location_id: Option<i64>,
    #[serde(rename = "idSensor", default)]
    pub sensor_id: Option<i64>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipoDesastre", default)]
    pub disaster_kind: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "dataReport", default)]
    pub reported_at: Option<NaiveDateTime>,
}
