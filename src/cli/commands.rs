// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include digits in the character pool
        #[arg(long)]
        digits: bool,

        /// Include special characters in the character pool
        #[arg(long)]
        symbols: bool,
    },
}
