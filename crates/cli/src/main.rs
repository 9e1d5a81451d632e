mod cmd;
mod logging;

use chrono::NaiveDate;
use agecalc_core::config::loader::ConfigLoader;
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "agecalc", version, about = "Age in completed years from a birth date")]
struct Cli {
    /// Path to config file (default: $XDG_CONFIG_HOME/agecalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the age of one or more birthdays
    Age(AgeArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Birthdays, e.g. "2000-06-15" or "June 15, 2000" (an empty string means unknown)
    #[arg(required = true)]
    pub birthdays: Vec<String>,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output format, overrides `output.format` from config
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
    Quiet,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Age(args) => {
            let cfg = ConfigLoader::load(cli.config.as_deref()).map_err(|e| {
                eyre!("Configuration error: {e}\nRun 'agecalc doctor' to diagnose.")
            })?;
            // Dropped after the command returns, flushing the log file
            let _log_guard = logging::init(&cfg)?;
            cmd::age::run(&cfg, &args)
        }
        Commands::Doctor => Ok(cmd::doctor::run(cli.config.as_deref())),
    }
}
