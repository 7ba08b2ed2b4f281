use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod generators;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::session::Session;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    log::debug!("Command line args: {:?}", args.command.as_ref().map(command_name));
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = run(args, &config) {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args, config: &Config) -> cli::Result<()> {
    match args.command {
        Some(CliCommand::Check { password }) => {
            let password = match password {
                Some(password) => password,
                None => inquire::Password::new("Enter password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?,
            };
            let (_, output) = cli::handlers::handle_check(&password, args.json)?;
            println!("{}", output);
        }
        Some(CliCommand::Generate { length, digits, symbols }) => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                include_numbers: digits,
                include_symbols: symbols,
            };
            let output = cli::handlers::handle_generate(&PasswordGenerator::new(), config, &options, args.json)?;
            println!("{}", output);
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                if let Err(e) = ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, shutting down");
                    should_exit.store(true, Ordering::SeqCst);
                }) {
                    log::warn!("Failed to set Ctrl+C handler: {}", e);
                }
            }

            // History lives only as long as this session
            let mut session = Session::new();
            cli::menu::run_cli_menu(config, &mut session, should_exit)?;
            log::info!("Session ended with {} history entries", session.history().len());
        }
    }

    Ok(())
}

// Passwords passed on the command line must not reach the log
fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Check { .. } => "check",
        CliCommand::Generate { .. } => "generate",
    }
}
