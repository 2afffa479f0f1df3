//! Subcommand implementations.

mod animal;
mod cpf;
mod login;
mod logout;
mod lookup;
mod phone;
mod refresh;
mod register;
mod report;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::GlobalArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the issued tokens
    Login(login::LoginArgs),

    /// Forget the stored tokens
    Logout(logout::LogoutArgs),

    /// Show the backend and login state
    #[command(alias = "status")]
    Whoami(whoami::WhoamiArgs),

    /// Renew the stored tokens
    Refresh(refresh::RefreshArgs),

    /// Register a new person
    Register(register::RegisterArgs),

    /// Animal records
    Animal(animal::AnimalCommand),

    /// Incident reports
    Report(report::ReportCommand),

    /// Lookup lists used by reports
    Lookup(lookup::LookupCommand),

    /// Validate or format a CPF
    Cpf(cpf::CpfCommand),

    /// Validate or format a phone number
    Phone(phone::PhoneCommand),
}

pub async fn handle(cmd: Commands, global: &GlobalArgs) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, global).await,
        Commands::Logout(args) => logout::run(args, global).await,
        Commands::Whoami(args) => whoami::run(args, global).await,
        Commands::Refresh(args) => refresh::run(args, global).await,
        Commands::Register(args) => register::run(args, global).await,
        Commands::Animal(cmd) => animal::handle(cmd, global).await,
        Commands::Report(cmd) => report::handle(cmd, global).await,
        Commands::Lookup(cmd) => lookup::handle(cmd, global).await,
        Commands::Cpf(cmd) => cpf::run(cmd),
        Commands::Phone(cmd) => phone::run(cmd),
    }
}
