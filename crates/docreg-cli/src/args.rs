use clap::{Parser, Subcommand};

/// CLI arguments for docreg-cli
#[derive(Debug, Parser)]
#[command(
    name = "docreg",
    version,
    about = "Search the worldwide company documents register from the terminal"
)]
pub struct CliArgs {
    /// Path to the register JSON (or .json.gz). Defaults to the bundled register.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Download the register from this URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(short = 'u', long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG wins if set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the banner and every record
    List,

    /// Show records where any column contains the term (case-insensitive)
    Search {
        /// Substring to look for; quote it to keep spaces
        term: String,
    },

    /// Select a country the way a map click does (the term becomes the name)
    Country {
        /// Display name, e.g. "Brazil"
        name: String,
    },

    /// Print the flag code and glyph for a country name
    Resolve {
        /// Display name, e.g. "United States of America"
        name: String,
    },

    /// Show a summary of the register
    Stats,
}

impl Commands {
    /// Whether the command reads the register. Resolving a flag code does not.
    pub fn needs_register(&self) -> bool {
        !matches!(self, Commands::Resolve { .. })
    }
}
