use anyhow::{Context, Result};
use clap::Parser;
use cost_calc::{
    cli::{Args, CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&level)?)
        .with_writer(std::io::stderr)
        .with_ansi(!config.is_production())
        .init();

    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(args, &mut out)
}
