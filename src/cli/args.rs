//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Bookshelf - book catalog server and tools
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default when no command is given)
    Serve,

    /// Search books whose title contains NAME
    Search {
        /// Part of the title to look for
        name: String,
    },

    /// Read several books concurrently and print each result as it finishes
    Simulate {
        /// Book IDs; values that are not integers are reported and skipped
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        ids: Vec<String>,

        /// Reading time per found book in milliseconds (defaults to the configured delay)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "bookshelf", "simulate", "1", "abc", "-3", "--delay-ms", "10",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Simulate {
                ids: vec!["1".into(), "abc".into(), "-3".into()],
                delay_ms: Some(10),
            })
        );
    }

    #[test]
    fn test_simulate_requires_ids() {
        assert!(Cli::try_parse_from(["bookshelf", "simulate"]).is_err());
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["bookshelf", "search", "dune"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                name: "dune".into()
            })
        );
    }
}
