//! CLI entrypoint for parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use parley_application::{ChatSessionUseCase, NoProgress};
use parley_domain::{Session, Temperature};
use parley_infrastructure::{ConfigLoader, FileConfig, OllamaTransport};
use parley_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig, ThinkingSpinner};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting parley against {}", config.server.endpoint);

    // === Dependency Injection ===
    let transport = Arc::new(
        OllamaTransport::new(config.transport_settings()).context("Failed to build HTTP client")?,
    );
    let session = Session::new(config.server.endpoint.clone(), config.chat.model())?
        .with_temperature(config.temperature()?);
    let use_case =
        ChatSessionUseCase::new(transport, session).with_behavior(config.behavior_config());

    // Model listing mode
    if cli.list_models {
        let models = use_case.list_available_models().await?;
        println!(
            "{}",
            ConsoleFormatter::format_models(&models, &use_case.active_model().await)
        );
        return Ok(());
    }

    // Single prompt mode
    if let Some(prompt) = &cli.prompt {
        let started = Instant::now();
        let reply = if cli.quiet || !config.repl.show_progress {
            use_case.send_message_with_progress(prompt, &NoProgress).await
        } else {
            use_case
                .send_message_with_progress(prompt, &ThinkingSpinner::new())
                .await
        };
        info!("API call latency: {:.3} seconds", started.elapsed().as_secs_f64());

        return match reply {
            Ok(reply) => {
                println!("{}", ConsoleFormatter::format_reply(&reply));
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
                std::process::exit(1);
            }
        };
    }

    // Interactive mode
    let repl = ChatRepl::new(use_case).with_config(ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_path: config.repl.history_path(),
        choose_model_on_start: cli.model.is_none(),
    });
    repl.run().await?;

    Ok(())
}

/// Merge files and environment, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.server.endpoint = endpoint.clone();
    }
    if let Some(model) = &cli.model {
        config.chat.model = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.chat.temperature = Temperature::new(temperature)?.value();
    }

    Ok(config)
}
