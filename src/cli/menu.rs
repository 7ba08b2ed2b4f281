// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::{handle_check, handle_generate, render_history};
use crate::cli::{CliError, Result};
use crate::core::config::Config;
use crate::core::session::Session;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;

const CHECK: &str = "🔍  Check password strength";
const GENERATE: &str = "🔐  Generate password";
const HISTORY: &str = "📜  View history";
const CLEAR: &str = "🧹  Clear history";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, session: &mut Session, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║     🔐 PASSWORD STRENGTH ANALYZER    ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![CHECK, GENERATE, HISTORY, CLEAR, EXIT];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable()
        {
            Ok(selection) => selection,
            Err(InquireError::OperationInterrupted) => {
                log::info!("Menu interrupted");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let outcome = match selection {
            Some(CHECK) => check_strength(session),
            Some(GENERATE) => generate_password(&generator, config),
            Some(HISTORY) => {
                println!(
                    "\n{}\n",
                    render_history(session.history(), config.history_display_limit, config.show_history_passwords)
                );
                Ok(())
            }
            Some(CLEAR) => {
                if session.history().is_empty() {
                    println!("History is already empty");
                } else {
                    session.clear_history();
                    println!("✅ History cleared");
                }
                Ok(())
            }
            Some(EXIT) => {
                println!("👋 Goodbye!");
                break;
            }
            _ => Ok(()),
        };

        if after_action(outcome)? == MenuFlow::Exit {
            break;
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum MenuFlow {
    Continue,
    Exit,
}

// Esc inside a sub-prompt returns to the menu, Ctrl+C ends the session cleanly
fn after_action(outcome: Result<()>) -> Result<MenuFlow> {
    match outcome {
        Ok(()) => Ok(MenuFlow::Continue),
        Err(CliError::Prompt(InquireError::OperationCanceled)) => {
            println!("Cancelled");
            Ok(MenuFlow::Continue)
        }
        Err(CliError::Prompt(InquireError::OperationInterrupted)) => {
            log::info!("Prompt interrupted");
            Ok(MenuFlow::Exit)
        }
        Err(e) => Err(e),
    }
}

fn check_strength(session: &mut Session) -> Result<()> {
    let password = Password::new("Enter password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let (report, output) = handle_check(&password, false)?;
    println!("\n{}\n", output);

    // Only explicit checks of real input go into history
    session.record_check(&password, &report);

    Ok(())
}

fn generate_password(generator: &PasswordGenerator, config: &Config) -> Result<()> {
    let default_length = config.default_password_length.to_string();
    let prompt = format!(
        "Password length ({}-{}):",
        config.min_password_length, config.max_password_length
    );
    let input = Text::new(&prompt).with_default(&default_length).prompt()?;

    let length: usize = match input.trim().parse() {
        Ok(length) => length,
        Err(e) => {
            println!("❌ Invalid number '{}': {}", input.trim(), e);
            return Ok(());
        }
    };

    let include_numbers = Confirm::new("Use digits?")
        .with_default(false)
        .prompt()?;

    let include_symbols = Confirm::new("Use special characters?")
        .with_default(false)
        .prompt()?;

    let options = PasswordGenerationOptions {
        length,
        include_numbers,
        include_symbols,
    };

    match handle_generate(generator, config, &options, false) {
        Ok(output) => println!("\n{}\n", output),
        Err(e) => println!("❌ {}", e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn completed_action_continues() {
        assert_eq!(after_action(Ok(())).unwrap(), MenuFlow::Continue);
    }

    #[test]
    fn escape_in_sub_prompt_returns_to_menu() {
        let outcome = Err(CliError::Prompt(InquireError::OperationCanceled));
        assert_eq!(after_action(outcome).unwrap(), MenuFlow::Continue);
    }

    #[test]
    fn interrupt_in_sub_prompt_exits_cleanly() {
        let outcome = Err(CliError::Prompt(InquireError::OperationInterrupted));
        assert_eq!(after_action(outcome).unwrap(), MenuFlow::Exit);
    }

    #[test]
    fn other_errors_propagate() {
        let outcome = Err(CliError::Generator(GeneratorError::LengthOutOfRange { length: 1, min: 4, max: 32 }));
        assert!(after_action(outcome).is_err());
    }
}
