//! Report subcommands.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Args, Subcommand};

use findmypet::models::ReportInput;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub command: ReportSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportSubcommand {
    /// List reports
    List {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch one report
    Get {
        id: i64,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// File a report
    Create(ReportFields),

    /// Replace a report's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: ReportFields,
    },

    /// Delete a report
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct ReportFields {
    /// Reporting person id
    #[arg(long)]
    pub person: i64,

    /// Animal id
    #[arg(long)]
    pub animal: i64,

    /// Location id
    #[arg(long)]
    pub location: i64,

    /// Sensor id
    #[arg(long)]
    pub sensor: i64,

    /// What happened
    #[arg(long)]
    pub description: String,

    /// Disaster type (enchente, incendio, ...)
    #[arg(long)]
    pub disaster: String,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Local date-time, e.g. 2024-05-04T14:30:00 (defaults to now)
    #[arg(long)]
    pub at: Option<NaiveDateTime>,
}

impl From<ReportFields> for ReportInput {
    fn from(fields: ReportFields) -> Self {
        ReportInput {
            person_id: fields.person,
            animal_id: fields.animal,
            location_id: fields.location,
            sensor_id: fields.sensor,
            description: fields.description,
            disaster_kind: fields.disaster,
            latitude: fields.latitude,
            longitude: fields.longitude,
            reported_at: fields.at.unwrap_or_else(|| Local::now().naive_local()),
        }
    }
}

pub async fn handle(cmd: ReportCommand, global: &GlobalArgs) -> Result<()> {
    let client = session::open_client(global)?;

    match cmd.command {
        ReportSubcommand::List { pretty } => {
            let reports = client
                .list_reports()
                .await
                .context("Failed to list reports")?;
            output::records(&reports, pretty, "No reports found.")
        }
        ReportSubcommand::Get { id, pretty } => {
            let report = client
                .get_report(id)
                .await
                .with_context(|| format!("Failed to fetch report {id}"))?;
            output::maybe(Some(&report), pretty, "")
        }
        ReportSubcommand::Create(fields) => {
            let created = client
                .create_report(&fields.into())
                .await
                .context("Failed to create report")?;
            output::maybe(created.as_ref(), false, "Report filed")
        }
        ReportSubcommand::Update { id, fields } => {
            let updated = client
                .update_report(id, &fields.into())
                .await
                .with_context(|| format!("Failed to update report {id}"))?;
            output::maybe(updated.as_ref(), false, "Report updated")
        }
        ReportSubcommand::Delete { id } => {
            client
                .delete_report(id)
                .await
                .with_context(|| format!("Failed to delete report {id}"))?;
            output::success(&format!("Deleted report {id}"));
            Ok(())
        }
    }
}
