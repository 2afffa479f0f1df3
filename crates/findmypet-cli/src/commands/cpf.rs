//! CPF subcommands. These run locally and make no network calls.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};

use findmypet::{Cpf, mask};

use crate::output;

#[derive(Args, Debug)]
pub struct CpfCommand {
    #[command(subcommand)]
    pub command: CpfSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CpfSubcommand {
    /// Check length and check digits
    Validate { value: String },

    /// Apply the typing mask
    Format { value: String },
}

pub fn run(cmd: CpfCommand) -> Result<()> {
    match cmd.command {
        CpfSubcommand::Validate { value } => match Cpf::new(&value) {
            Ok(cpf) => {
                output::success(&format!("{cpf} is valid"));
                Ok(())
            }
            Err(e) => bail!("{e}"),
        },
        CpfSubcommand::Format { value } => {
            println!("{}", mask::cpf(&value));
            Ok(())
        }
    }
}
