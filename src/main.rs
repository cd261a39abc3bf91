use std::{env, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod core;
mod error;
mod git;
mod profile;
mod utils;

use crate::{
    commands::{Apply, Check, List, Prompt},
    config::Settings,
    core::command::{Command, CommandContext},
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Provision global Git aliases and a branch-aware shell prompt",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Apply(Apply),
    Check(Check),
    List(List),
    Prompt(Prompt),
}

impl Commands {
    fn as_command(&self) -> &dyn Command {
        match self {
            Commands::Apply(cmd) => cmd,
            Commands::Check(cmd) => cmd,
            Commands::List(cmd) => cmd,
            Commands::Prompt(cmd) => cmd,
        }
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env("GITALIAS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_ansi(settings.color)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = Settings {
        verbose: cli.verbose,
        quiet: cli.quiet,
        color: !cli.no_color,
        current_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    if !settings.color {
        colored::control::set_override(false);
    }
    init_logging(&settings);

    let command = cli.command.as_command();
    tracing::debug!(command = command.name(), "starting");

    let context = CommandContext { settings };
    match command.execute(&context) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", utils::format_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
