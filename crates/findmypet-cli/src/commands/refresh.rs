//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs, global: &GlobalArgs) -> Result<()> {
    let client = session::open_client(global)?;
    client
        .refresh()
        .await
        .context("Failed to refresh credentials")?;

    output::success("Credentials refreshed");
    Ok(())
}
