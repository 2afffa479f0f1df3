//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, global: &GlobalArgs) -> Result<()> {
    let client = session::open_client(global)?;
    let path = session::credentials_path(global)?;
    let authenticated = client
        .is_authenticated()
        .await
        .context("Failed to read credentials")?;

    output::field("API", client.base_url().as_str());
    output::field("Credentials", &path.display().to_string());
    output::field(
        "Status",
        if authenticated {
            "logged in"
        } else {
            "not logged in"
        },
    );

    Ok(())
}
