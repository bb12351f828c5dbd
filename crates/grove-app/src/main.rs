mod cli;
mod render;
mod run;

use std::process::ExitCode;

use grove_common::ConfigError;
use grove_config::GroveConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<GroveConfig, ConfigError> {
    match &args.config {
        Some(path) => grove_config::load_config_from(path),
        None => grove_config::load_config(),
    }
}

fn init_logging(level: &str) {
    let directive: Directive = level
        .to_ascii_lowercase()
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so it loads before logging starts.
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "info".into());
    init_logging(args.log_level.as_deref().unwrap_or(&config_level));

    tracing::info!("grove v{} starting", env!("CARGO_PKG_VERSION"));
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        GroveConfig::default()
    });

    let tree = match grove_tree::document::load_from_path(&args.document) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("failed to load {}: {e}", args.document.display());
            eprintln!("grove: {}: {e}", args.document.display());
            return ExitCode::FAILURE;
        }
    };

    let report = run::run(&args, &config, tree);
    print!("{}", render::render_report(&report));
    ExitCode::SUCCESS
}
