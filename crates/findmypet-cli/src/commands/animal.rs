//! Animal subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use findmypet::models::AnimalInput;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AnimalCommand {
    #[command(subcommand)]
    pub command: AnimalSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AnimalSubcommand {
    /// List animals
    List {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch one animal
    Get {
        id: i64,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Create an animal
    Create(AnimalFields),

    /// Replace an animal's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: AnimalFields,
    },

    /// Delete an animal
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct AnimalFields {
    /// Animal name
    #[arg(long)]
    pub name: String,

    /// Species
    #[arg(long)]
    pub species: String,

    /// Size class (pequeno, médio, grande)
    #[arg(long)]
    pub size: String,

    /// Estimated age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Kind of animal (cachorro, gato, ...)
    #[arg(long)]
    pub kind: String,
}

impl From<AnimalFields> for AnimalInput {
    fn from(fields: AnimalFields) -> Self {
        AnimalInput {
            name: fields.name,
            species: fields.species,
            size: fields.size,
            estimated_age: fields.age,
            kind: fields.kind,
        }
    }
}

pub async fn handle(cmd: AnimalCommand, global: &GlobalArgs) -> Result<()> {
    let client = session::open_client(global)?;

    match cmd.command {
        AnimalSubcommand::List { pretty } => {
            let animals = client
                .list_animals()
                .await
                .context("Failed to list animals")?;
            output::records(&animals, pretty, "No animals found.")
        }
        AnimalSubcommand::Get { id, pretty } => {
            let animal = client
                .get_animal(id)
                .await
                .with_context(|| format!("Failed to fetch animal {id}"))?;
            output::maybe(Some(&animal), pretty, "")
        }
        AnimalSubcommand::Create(fields) => {
            let created = client
                .create_animal(&fields.into())
                .await
                .context("Failed to create animal")?;
            output::maybe(created.as_ref(), false, "Animal created")
        }
        AnimalSubcommand::Update { id, fields } => {
            let updated = client
                .update_animal(id, &fields.into())
                .await
                .with_context(|| format!("Failed to update animal {id}"))?;
            output::maybe(updated.as_ref(), false, "Animal updated")
        }
        AnimalSubcommand::Delete { id } => {
            client
                .delete_animal(id)
                .await
                .with_context(|| format!("Failed to delete animal {id}"))?;
            output::success(&format!("Deleted animal {id}"));
            Ok(())
        }
    }
}
