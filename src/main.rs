//! record-button CLI entry point

use std::process::ExitCode;

use clap::Parser;

use record_button::cli::{
    app::{config_store, load_merged_config, run_frames, run_geometry, run_render, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use record_button::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    if let Err(e) = init_logging() {
        presenter.warn(&format!("Logging disabled: {}", e));
    }

    let cli_config = cli.to_config();
    let store = config_store(cli.config_file);

    match cli.command {
        Commands::Config { action } => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Render { frame, output } => {
            let config = load_merged_config(&store, cli_config).await;
            run_render(&config, frame, &output)
        }
        Commands::Geometry { frame } => {
            let config = load_merged_config(&store, cli_config).await;
            run_geometry(&config, frame)
        }
        Commands::Frames {
            fps, taps, output, ..
        } => {
            let config = load_merged_config(&store, cli_config).await;
            run_frames(&config, fps, taps, &output)
        }
    }
}
