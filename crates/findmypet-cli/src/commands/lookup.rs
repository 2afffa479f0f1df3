//! Lookup list subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LookupCommand {
    #[command(subcommand)]
    pub command: LookupSubcommand,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum LookupSubcommand {
    /// Registered people
    People,

    /// Monitored locations
    Locations,

    /// Installed sensors
    Sensors,
}

pub async fn handle(cmd: LookupCommand, global: &GlobalArgs) -> Result<()> {
    let client = session::open_client(global)?;

    match cmd.command {
        LookupSubcommand::People => {
            let people = client
                .list_people()
                .await
                .context("Failed to list people")?;
            output::records(&people, cmd.pretty, "No people found.")
        }
        LookupSubcommand::Locations => {
            let locations = client
                .list_locations()
                .await
                .context("Failed to list locations")?;
            for location in &locations {
                eprintln!("{}", location.label().dimmed());
            }
            output::records(&locations, cmd.pretty, "No locations found.")
        }
        LookupSubcommand::Sensors => {
            let sensors = client
                .list_sensors()
                .await
                .context("Failed to list sensors")?;
            for sensor in &sensors {
                eprintln!("{}", sensor.label().dimmed());
            }
            output::records(&sensors, cmd.pretty, "No sensors found.")
        }
    }
}
