//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// vidsum - Summarise video captions with a hosted LLM
#[derive(Parser, Debug)]
#[command(name = "vidsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind to (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarise a video's captions and print the result as JSON
    Summarise {
        /// Video ID
        video_id: String,

        /// Caption language (defaults to captions.lang)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print a video's details and captions as JSON
    Transcribe {
        /// Video ID
        video_id: String,

        /// Caption language (defaults to captions.lang)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
