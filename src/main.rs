use clap::Parser;
use mission_control::cli::Cli;
use mission_control::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        log = %log_path.display(),
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    mission_control::ui::run(&config)
}
