//! Typed operations on the backend's resources.

use tracing::instrument;

use crate::Result;
use crate::api::endpoints::{ANIMALS, LOCATIONS, PEOPLE, REPORTS, SENSORS, item};
use crate::client::ApiClient;
use crate::error::{ApiError, ApiErrorKind, Error};
use crate::models::{
    Animal, AnimalInput, Location, NewPerson, Person, Report, ReportInput, Sensor,
};

/// Message returned when registration hits an existing CPF or e-mail.
pub const DUPLICATE_PERSON_MESSAGE: &str = "CPF or e-mail already registered";

impl ApiClient {
    // ========================================================================
    // People
    // ========================================================================

    /// Register a new person.
    ///
    /// # Errors
    ///
    /// A 409 is returned as [`Error::Api`] with
    /// [`DUPLICATE_PERSON_MESSAGE`] as its message.
    #[instrument(skip(self, person), fields(email = %person.email))]
    pub async fn register_person(&self, person: &NewPerson) -> Result<Option<Person>> {
        self.post_json(PEOPLE, person).await.map_err(|e| match e {
            Error::Api(err) if err.kind() == ApiErrorKind::Conflict => Error::Api(ApiError::new(
                err.status,
                err.error,
                Some(DUPLICATE_PERSON_MESSAGE.to_string()),
            )),
            other => other,
        })
    }

    /// List registered people.
    pub async fn list_people(&self) -> Result<Vec<Person>> {
        self.fetch_list(PEOPLE).await
    }

    // ========================================================================
    // Animals
    // ========================================================================

    /// List animals.
    pub async fn list_animals(&self) -> Result<Vec<Animal>> {
        self.fetch_list(ANIMALS).await
    }

    /// Fetch one animal by id.
    pub async fn get_animal(&self, id: i64) -> Result<Animal> {
        self.get_json(&item(ANIMALS, id)).await
    }

    /// Create an animal. An empty response body yields `None`.
    #[instrument(skip(self, animal), fields(name = %animal.name))]
    pub async fn create_animal(&self, animal: &AnimalInput) -> Result<Option<Animal>> {
        self.post_json(ANIMALS, animal).await
    }

    /// Replace the animal with `id`.
    #[instrument(skip(self, animal))]
    pub async fn update_animal(&self, id: i64, animal: &AnimalInput) -> Result<Option<Animal>> {
        self.put_json(&item(ANIMALS, id), animal).await
    }

    /// Delete the animal with `id`.
    #[instrument(skip(self))]
    pub async fn delete_animal(&self, id: i64) -> Result<()> {
        self.delete(&item(ANIMALS, id)).await
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// List disaster reports.
    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        self.fetch_list(REPORTS).await
    }

    /// Fetch one report by id.
    pub async fn get_report(&self, id: i64) -> Result<Report> {
        self.get_json(&item(REPORTS, id)).await
    }

    /// File a new report. An empty response body yields `None`.
    #[instrument(skip(self, report), fields(kind = %report.disaster_kind))]
    pub async fn create_report(&self, report: &ReportInput) -> Result<Option<Report>> {
        self.post_json(REPORTS, report).await
    }

    /// Replace the report with `id`.
    #[instrument(skip(self, report))]
    pub async fn update_report(&self, id: i64, report: &ReportInput) -> Result<Option<Report>> {
        self.put_json(&item(REPORTS, id), report).await
    }

    /// Delete the report with `id`.
    #[instrument(skip(self))]
    pub async fn delete_report(&self, id: i64) -> Result<()> {
        self.delete(&item(REPORTS, id)).await
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// List known locations.
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        self.fetch_list(LOCATIONS).await
    }

    /// List sensors.
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>> {
        self.fetch_list(SENSORS).await
    }
}
