//! Register command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use findmypet::auth::{MIN_PASSWORD_LEN, password_meets_minimum};
use findmypet::models::{NewPerson, PersonKind, Role};
use findmypet::{Cpf, Email, Phone};

use crate::cli::GlobalArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// CPF, with or without punctuation
    #[arg(long)]
    pub cpf: Cpf,

    /// Phone with area code
    #[arg(long)]
    pub phone: Phone,

    /// E-mail address
    #[arg(long)]
    pub email: Email,

    /// Password (at least six characters)
    #[arg(long, env = "FINDMYPET_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Resgatante, Denunciante or Adotante
    #[arg(long, default_value = "Resgatante")]
    pub kind: PersonKind,

    /// ADMIN or USER
    #[arg(long, default_value = "ADMIN")]
    pub role: Role,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: RegisterArgs, global: &GlobalArgs) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        bail!("Name must not be empty");
    }
    if !password_meets_minimum(&args.password) {
        bail!("Password must have at least {MIN_PASSWORD_LEN} characters");
    }

    let person = NewPerson {
        name: name.to_string(),
        cpf: args.cpf,
        phone: args.phone,
        kind: args.kind,
        email: args.email,
        password: args.password,
        role: args.role,
    };

    let client = session::open_client(global)?;
    eprintln!("{}", "Registering...".dimmed());

    let created = client
        .register_person(&person)
        .await
        .context("Failed to register")?;

    output::maybe(created.as_ref(), args.pretty, "Registered successfully")
}
