//! CLI module - Command-line interface for kivor
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// kivor - salon services and sales backend
#[derive(Parser)]
#[command(name = "kivor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "server")]
    Serve,

    /// Connect to the database and run a trivial query
    CheckDb,

    /// Print the stored digest for a password
    HashPassword {
        /// Plaintext password
        password: String,
    },

    /// Issue an access token for a username
    IssueToken {
        /// Username the token is issued to
        username: String,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["kivor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["kivor", "hash-password", "secret"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::HashPassword {
                password: "secret".to_string()
            })
        );

        let cli = Cli::try_parse_from(["kivor", "server"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));

        let cli = Cli::try_parse_from(["kivor", "check-db"]).unwrap();
        assert_eq!(cli.command, Some(Commands::CheckDb));
    }

    #[test]
    fn test_issue_token_requires_username() {
        assert!(Cli::try_parse_from(["kivor", "issue-token"]).is_err());
    }
}
