use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Render a static portfolio page with one-shot scroll reveal",
    version,
    after_help = "Logs are written to: ~/.local/share/folio/logs/folio.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to folio.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the page as a self-contained HTML document
    Render {
        /// Output file (defaults to `output` from config)
        #[arg(long, short = 'O', conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Render every block visible, without reveal transitions
        #[arg(long)]
        no_reveal: bool,

        /// Footer year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show the page in the terminal
    Preview {
        /// Footer year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the resolved page content
    Content {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Simulate scrolling the page and report when each section is revealed
    Scroll {
        /// Viewport height in pixels
        #[arg(long, default_value = "800")]
        viewport: f64,

        /// Scroll increment in pixels
        #[arg(long, default_value = "100")]
        step: f64,

        /// Milliseconds between scroll steps
        #[arg(long, default_value = "16")]
        tick: u64,

        /// Treat the host as lacking intersection observation
        #[arg(long)]
        no_observer: bool,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write default folio.yaml and content.yaml
    Init {
        /// Directory to initialize (defaults to ~/.config/folio)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}
