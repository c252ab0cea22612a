use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use sonova_wallet::cli::handle_replay_command;
use sonova_wallet::config::{Settings, WalletPaths};
use sonova_wallet::logging;

#[derive(Parser)]
#[command(
    name = "sonova",
    version,
    about = "Sonova Bank: a terminal wallet with expense tracking",
    long_about = "Sonova Bank is a terminal digital wallet. Log in with a username \
                  and PIN, add funds, pay other users, record categorized expenses \
                  against a monthly limit, and review your spending as charts."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run a CSV script of wallet actions against a fresh session
    Replay {
        /// Path to the CSV file (action,username,pin,recipient,amount,category)
        file: PathBuf,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            paths.ensure_directories()?;
            logging::init_file(&paths.log_file(), &settings.log_level)?;
            debug!(dir = %paths.base_dir().display(), "Starting TUI");
            sonova_wallet::tui::run_tui(&settings).context("TUI failed")?;
        }
        Commands::Replay { file, json } => {
            logging::init_stderr(&settings.log_level)?;
            handle_replay_command(&file, json, &settings)?;
        }
        Commands::Config { init } => {
            logging::init_stderr(&settings.log_level)?;
            if init {
                if paths.settings_file().exists() {
                    println!(
                        "Settings file already exists: {}",
                        paths.settings_file().display()
                    );
                } else {
                    settings.save(&paths)?;
                    println!("Wrote default settings to {}", paths.settings_file().display());
                }
                println!();
            }
            print_config(&paths, &settings);
        }
    }

    Ok(())
}

fn print_config(paths: &WalletPaths, settings: &Settings) {
    println!("Sonova Wallet Configuration");
    println!("===========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Timestamp format: {}", settings.timestamp_format);
    println!("  Auto-register:    {}", settings.auto_register);
    println!("  Tick rate:        {} ms", settings.tick_rate_ms);
    println!("  Log level:        {}", settings.log_level);
    println!(
        "  PIN hashing:      {} KiB, {} iterations, {} lanes",
        settings.pin_hashing.memory_kib,
        settings.pin_hashing.iterations,
        settings.pin_hashing.parallelism
    );
}
