use anyhow::Result;
use clap::Parser;
use diarscribe::app::run_transcribe_command;
use diarscribe::cli::Cli;
use diarscribe::config::Config;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let config = apply_cli_overrides(config, &cli);

    let failures = run_transcribe_command(
        config,
        &cli.files,
        cli.output.as_deref(),
        cli.quiet,
        cli.verbose,
    )?;

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Load configuration from an explicit path or the default location,
/// then apply environment variable overrides.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load(p)?,
        None => Config::load_or_default(&Config::default_path())?,
    };
    Ok(config.with_env_overrides())
}

/// CLI flags win over config file and environment.
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(model) = &cli.model {
        config.stt.model = model.clone();
    }
    if let Some(language) = &cli.language {
        config.stt.language = language.clone();
    }
    if let Some(backend) = &cli.backend {
        config.stt.backend = backend.clone();
    }
    if let Some(format) = &cli.format {
        config.output.timestamp_format = format.clone();
    }
    if let Some(min_segment_length) = cli.min_segment_length {
        config.diarization.min_segment_length = min_segment_length;
    }
    if let Some(min_silence_length) = cli.min_silence_length {
        config.diarization.min_silence_length = min_silence_length;
    }
    config
}
