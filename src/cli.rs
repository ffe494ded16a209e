use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "IMPACT_DASHBOARD_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "impact-dashboard")]
#[command(about = "Impact-investing dashboard for Bridges Fund Management", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard
    Show {
        /// Configuration file (defaults to discovery, then the built-in preset)
        #[arg(short, long, env = CONFIG_ENV)]
        config: Option<PathBuf>,

        /// Tab to open first
        #[arg(short, long)]
        tab: Option<String>,

        /// Write logs to this file while the dashboard is open
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Render one frame off-screen and print it as plain text
    Render {
        /// Configuration file (defaults to discovery, then the built-in preset)
        #[arg(short, long, env = CONFIG_ENV)]
        config: Option<PathBuf>,

        /// Tab to render
        #[arg(short, long)]
        tab: Option<String>,

        /// Frame width in columns
        #[arg(long, default_value = "120")]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value = "32")]
        height: u16,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Check configuration and component registry, reporting every problem
    Validate {
        /// Configuration file (defaults to discovery, then the built-in preset)
        #[arg(short, long, env = CONFIG_ENV)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Serialize configuration, component ids and data
    Export {
        /// Configuration file (defaults to discovery, then the built-in preset)
        #[arg(short, long, env = CONFIG_ENV)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write the built-in tenant configuration as TOML
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Destination file
        #[arg(short, long, default_value = ".impact-dashboard.toml")]
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Toml,
}
