//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use findmypet::auth::{MIN_PASSWORD_LEN, password_meets_minimum};
use findmypet::{Email, LoginCredentials};

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account e-mail
    #[arg(long)]
    pub email: Email,

    /// Account password
    #[arg(long, env = "FINDMYPET_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, global: &GlobalArgs) -> Result<()> {
    if !password_meets_minimum(&args.password) {
        bail!("Password must have at least {MIN_PASSWORD_LEN} characters");
    }

    let client = session::open_client(global)?;
    let credentials = LoginCredentials::new(args.email.as_str(), args.password);

    eprintln!("{}", "Logging in...".dimmed());

    client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("E-mail", args.email.as_str());
    output::field("API", client.base_url().as_str());

    Ok(())
}
