//! Phone subcommands. These run locally and make no network calls.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};

use findmypet::{Phone, mask};

use crate::output;

#[derive(Args, Debug)]
pub struct PhoneCommand {
    #[command(subcommand)]
    pub command: PhoneSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PhoneSubcommand {
    /// Check that the number has 10 or 11 digits
    Validate { value: String },

    /// Apply the typing mask
    Format { value: String },
}

pub fn run(cmd: PhoneCommand) -> Result<()> {
    match cmd.command {
        PhoneSubcommand::Validate { value } => match Phone::new(&value) {
            Ok(phone) => {
                output::success(&format!("{phone} is valid"));
                Ok(())
            }
            Err(e) => bail!("{e}"),
        },
        PhoneSubcommand::Format { value } => {
            println!("{}", mask::phone(&value));
            Ok(())
        }
    }
}
