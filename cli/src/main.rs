//! CLI entrypoint for Sarcasm Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sarcasm_application::ports::controller_factory::ControllerFactory;
use sarcasm_application::{
    AnalysisProgress, AnalyzeTextInput, BatchProgress, CredentialPool, NoBatchProgress,
    NoProgress, NoResultSink, ResultSink, RunBatchUseCase,
};
use sarcasm_domain::{ConfigIssue, OutputFormat, Severity};
use sarcasm_infrastructure::{
    ConfigLoader, CouncilFactory, FileConfig, JsonlRowWriter, read_records, write_metrics,
};
use sarcasm_presentation::{BatchProgressBar, Cli, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    info!("Starting Sarcasm Council");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    apply_cli_overrides(&cli, &mut config);

    let mut issues = config.validate();
    issues.extend(config.credential_issue());
    report_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration, see the errors above");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let factory = Arc::new(CouncilFactory::from_config(&config)?);
    let credentials = CredentialPool::new(config.provider.resolve_api_keys())?;

    info!(
        model = factory.model(),
        agents = factory.catalog().len(),
        web_search = factory.web_search_enabled(),
        "Council configured"
    );

    match &cli.batch {
        Some(path) => run_batch(&cli, &config, factory, credentials, path, format).await,
        None => run_single(&cli, factory, credentials, format).await,
    }
}

/// Analyze one text and print the result
async fn run_single(
    cli: &Cli,
    factory: Arc<CouncilFactory>,
    credentials: CredentialPool,
    format: OutputFormat,
) -> Result<()> {
    let Some(text) = cli.text.clone() else {
        bail!("Text is required. Use --batch <PATH> to analyze a JSONL file.");
    };

    let cancel = CancellationToken::new();
    let controller = factory.build(credentials.for_record(0), cancel.clone())?;

    let mut input = AnalyzeTextInput::new(text);
    if let Some(context) = &cli.context {
        input = input.with_context(context.clone());
    }

    let progress: Box<dyn AnalysisProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    // Ctrl-C cancels in-flight generation; the controller then finishes
    // with whatever it has.
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling pending requests");
            interrupt.cancel();
        }
    });

    let result = controller
        .analyze_with_progress(input, progress.as_ref())
        .await;
    cancel.cancel();

    println!("{}", ConsoleFormatter::render(&result, format));
    Ok(())
}

/// Analyze every record of a JSONL file
async fn run_batch(
    cli: &Cli,
    config: &FileConfig,
    factory: Arc<CouncilFactory>,
    credentials: CredentialPool,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let records = read_records(path)?;
    if records.is_empty() {
        bail!("No records found in {}", path.display());
    }

    let sink: Arc<dyn ResultSink> = match &cli.out {
        Some(out) => Arc::new(
            JsonlRowWriter::create(out)
                .with_context(|| format!("Could not create {}", out.display()))?,
        ),
        None => Arc::new(NoResultSink),
    };

    let use_case = RunBatchUseCase::new(factory, credentials)
        .with_params(config.batch.to_params())
        .with_sink(sink);

    let progress: Box<dyn BatchProgress> = if cli.quiet {
        Box::new(NoBatchProgress)
    } else {
        Box::new(BatchProgressBar::new())
    };

    let report = tokio::select! {
        biased;
        _ = tokio::signal::ctrl_c() => {
            bail!("Interrupted; rows finished so far were already written");
        }
        report = use_case.execute_with_progress(records, progress.as_ref()) => report,
    };

    if let Some(out) = &cli.out {
        let metrics_path = out.with_extension("metrics.json");
        write_metrics(&metrics_path, &report)
            .with_context(|| format!("Could not write {}", metrics_path.display()))?;
        info!("Metrics written to {}", metrics_path.display());
    }

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report.metrics).unwrap_or_else(|_| "null".to_string())
        ),
        _ => println!("{}", ConsoleFormatter::format_batch_report(&report)),
    }
    Ok(())
}

fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(n) = cli.n_initial {
        config.analysis.n_initial = n;
    }
    if let Some(rounds) = cli.max_rounds {
        config.analysis.max_rounds = rounds;
    }
    if let Some(threshold) = cli.threshold {
        config.analysis.vote_threshold = threshold;
    }
    if let Some(workers) = cli.workers {
        config.batch.workers = workers;
    }
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => eprintln!("error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
}

/// Console logging from the `-v` count (or `RUST_LOG`), optionally mirrored to a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}
