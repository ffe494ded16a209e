use anyhow::Result;
use clap::Parser;
use impact_dashboard::cli::{Cli, Commands};
use impact_dashboard::commands::{self, ExportConfig, RenderConfig, ShowConfig, ValidateConfig};
use impact_dashboard::observability::install_panic_hook;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            config,
            tab,
            log_file,
            verbosity,
        } => commands::show_dashboard(ShowConfig {
            config,
            tab,
            log_file,
            verbosity,
        }),
        Commands::Render {
            config,
            tab,
            width,
            height,
            verbosity,
        } => commands::render_dashboard(RenderConfig {
            config,
            tab,
            width,
            height,
            verbosity,
        }),
        Commands::Validate { config, verbosity } => {
            commands::validate_customization(ValidateConfig { config, verbosity })
        }
        Commands::Export {
            config,
            format,
            output,
            verbosity,
        } => commands::export_customization(ExportConfig {
            config,
            format,
            output,
            verbosity,
        }),
        Commands::Init { force, path } => commands::init_config(&path, force),
    }
}
