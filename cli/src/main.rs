//! CLI entrypoint for kanji
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use kanji_application::{
    AlignmentAdvisor, BuildProposalsUseCase, CollectResponseUseCase, EventContextStore,
    NoAlignment, NoPlanEventLogger, PlanEventLogger, SessionLocks, VotingUseCase,
};
use kanji_infrastructure::{
    CatalogVenueSearch, ConfigLoader, FileConfig, FileOutputFormat, InMemoryEventContextStore,
    InMemoryPlanStore, JsonlPlanEventLogger, TemplateAlignmentAdvisor,
};
use kanji_presentation::{Cli, OutputConfig, OutputFormat, PlanningRepl, ReplConfig};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting kanji");

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format.map(|format| match format {
            FileOutputFormat::Text => OutputFormat::Text,
            FileOutputFormat::Json => OutputFormat::Json,
        }),
        config.output.color,
        cli.no_color,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store = Arc::new(InMemoryPlanStore::new());
    let locks = Arc::new(SessionLocks::new());
    let contexts: Arc<dyn EventContextStore> = Arc::new(InMemoryEventContextStore::new(
        config.context.max_entries,
        config.context.ttl(),
    ));
    let events = plan_event_logger(&config);
    let advisor: Arc<dyn AlignmentAdvisor> = if config.planning.alignment {
        Arc::new(TemplateAlignmentAdvisor::new())
    } else {
        Arc::new(NoAlignment)
    };
    let venues = CatalogVenueSearch::new(config.venues.clone());
    if venues.is_empty() {
        info!("No [[venues]] configured; proposals will list no venues");
    }

    let responses = CollectResponseUseCase::new(store.clone(), locks.clone())
        .with_context_store(contexts.clone())
        .with_plan_event_logger(events.clone());
    let proposals =
        BuildProposalsUseCase::new(store.clone(), locks.clone(), config.planning_config())
            .with_venue_search(Arc::new(venues))
            .with_alignment_advisor(advisor)
            .with_context_store(contexts.clone())
            .with_plan_event_logger(events.clone());
    let voting = VotingUseCase::new(store, locks)
        .with_context_store(contexts)
        .with_plan_event_logger(events);

    let repl = PlanningRepl::new(responses, proposals, voting)
        .with_format(output.format)
        .with_today(cli.today)
        .with_config(ReplConfig {
            interactive: !cli.quiet && cli.script.is_none(),
        });

    match &cli.script {
        Some(path) => repl
            .run_script(path)
            .await
            .with_context(|| format!("Failed to run script {}", path.display()))?,
        None => repl.run().await.context("Failed to read commands")?,
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to `file` when configured.
fn init_tracing(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or(OsStr::new("kanji.log"))
        .to_string_lossy()
        .into_owned();
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn plan_event_logger(config: &FileConfig) -> Arc<dyn PlanEventLogger> {
    let Some(path) = &config.logging.event_log else {
        return Arc::new(NoPlanEventLogger);
    };
    match JsonlPlanEventLogger::new(path) {
        Some(logger) => {
            info!("Writing plan events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Plan event log disabled: could not open {}", path.display());
            Arc::new(NoPlanEventLogger)
        }
    }
}
