// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2docs::{
    output, CommandLineInput, ExportConfig, ExportContext, ExportMode, ExportReport,
    HttpImageFetcher, NotionFetcher, NotionHttpClient, ResponseCache, SlugRegistry, TreeExporter,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion2docs.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stdout", Box::new(stdout_appender)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the live collaborators and runs one export.
async fn run_export(config: &ExportConfig) -> anyhow::Result<ExportReport> {
    let cache = Arc::new(ResponseCache::new());
    let sweeper = ResponseCache::spawn_sweeper(Arc::clone(&cache), config.cache_ttl);
    if config.cache_ttl.is_zero() {
        log::info!("Response cache disabled");
    }

    let http = NotionHttpClient::new(&config.api_key)?;
    let fetcher = NotionFetcher::new(http, cache)
        .with_retry_policy(config.retry)
        .with_cache_ttl(config.cache_ttl);
    let ctx = ExportContext::new(
        Arc::new(fetcher),
        Arc::new(HttpImageFetcher::default()),
        config.settings.clone(),
    );

    output::create_directory(&config.output_dir).with_context(|| {
        format!(
            "cannot create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut slugs = SlugRegistry::new();
    let mut exporter = TreeExporter::new(&ctx);
    let report = match config.mode {
        ExportMode::BlockTree => {
            exporter
                .export_block_tree(&config.root, &config.output_dir, &mut slugs)
                .await
        }
        ExportMode::Database => {
            exporter
                .export_database(&config.root, &config.output_dir, &mut slugs)
                .await
        }
    }
    .with_context(|| format!("export of {} failed", config.root))?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    Ok(report)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("failed to initialize logging")?;

    let config = ExportConfig::resolve(cli)?;

    match run_export(&config).await {
        Ok(report) => {
            log::info!("Export completed successfully: {}", report);
            Ok(())
        }
        Err(err) => {
            log::error!("{:#}", err);
            Err(err)
        }
    }
}
