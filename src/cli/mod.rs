//! Command-line surface.
//!
//! The CLI is the host application around the core: it owns the profile
//! store, runs the interactive assessment, and keeps the reminder scheduler
//! alive in the foreground.

mod assess;
mod profile;
mod remind;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::profile::UserProfile;

#[derive(Parser)]
#[command(
    name = "alianza",
    version,
    about = "Relationship coaching companion: love-language assessment and daily reminders"
)]
pub struct Cli {
    /// Path to the profile file (defaults to ~/.alianza/profile.json).
    #[arg(long, global = true)]
    pub profile_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage the couple profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Take the love-language assessment.
    Assess,
    /// Daily reminder scheduling.
    Remind {
        #[command(subcommand)]
        command: RemindCommand,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Create or replace the profile.
    Init(profile::InitArgs),
    /// Print the stored profile.
    Show,
}

#[derive(Subcommand)]
pub enum RemindCommand {
    /// Arm the daily reminder and run until interrupted.
    Start,
    /// Deliver a test notification immediately, without scheduling.
    Test,
}

/// Parse arguments and dispatch.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let profile_path = cli
        .profile_path
        .unwrap_or_else(UserProfile::default_path);

    match cli.command {
        Command::Profile { command } => match command {
            ProfileCommand::Init(args) => profile::init(&profile_path, args),
            ProfileCommand::Show => profile::show(&profile_path),
        },
        Command::Assess => assess::run(&profile_path),
        Command::Remind { command } => match command {
            RemindCommand::Start => remind::start(&profile_path).await,
            RemindCommand::Test => remind::test(&profile_path).await,
        },
    }
}
