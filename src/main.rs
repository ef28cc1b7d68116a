//! remind - Send yourself random highlights from your e-reader clippings

mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use remind::cli::{Cli, Commands, ConfigCommands};
use remind::{logging, Config};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init { force }) => commands::config::handle_init(force),
        Commands::Config(ConfigCommands::Show) => {
            let config = load_config(cli.verbose, cli.log_file.as_deref())?;
            commands::config::handle_show(&config)
        }
        Commands::Send(args) => {
            let config = load_config(cli.verbose, cli.log_file.as_deref())?;
            commands::send::handle(config, &args)
        }
        Commands::List(args) => {
            let config = load_config(cli.verbose, cli.log_file.as_deref())?;
            commands::list::handle(config, &args)
        }
    }
}

/// Load configuration, then start logging with its log file unless the
/// command line names one.
fn load_config(verbose: u8, log_file: Option<&Path>) -> Result<Config> {
    let config = Config::load()?;
    logging::init(verbose, log_file.or(config.log.file.as_deref()))?;

    let path = Config::config_path()?;
    if path.exists() {
        tracing::debug!(path = %path.display(), "loaded config file");
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
    }
    Ok(config)
}
