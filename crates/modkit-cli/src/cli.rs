//! CLI argument definitions for modkit.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modkit",
    version,
    about = "A mod manager for game mods distributed as GitHub releases",
    long_about = "modkit manages game mods published as GitHub releases: each release \
                  carries a modkit.toml manifest naming its own dependencies, and modkit \
                  resolves the full dependency set, downloads the release archives, and \
                  unpacks them into the game directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Modkit.toml manifest in the current directory
    Init {
        /// Mod name
        #[arg(short, long)]
        name: Option<String>,

        /// Short mod description
        #[arg(short, long)]
        description: Option<String>,

        /// The game executable the mod is for, e.g. skyrim.exe
        #[arg(short, long)]
        game: Option<String>,

        /// The game version constraint this mod supports
        #[arg(long, default_value = ">=v0.0.0")]
        game_version: String,
    },

    /// Add a mod and its dependencies to the manifest
    Add {
        /// GitHub repository hosting the mod, e.g. afloesch/megamod
        repo: Option<String>,

        /// Release version to add
        #[arg(long, default_value = "latest")]
        version: String,
    },

    /// Resolve, download, and unpack all dependencies
    Install {
        /// Game directory to install into; defaults to the project root
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
