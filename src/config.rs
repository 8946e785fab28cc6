// src/config.rs
use crate::api::{PaginationOptions, RateLimitPolicy};
use crate::error::AppError;
use crate::export::ExportSettings;
use crate::types::{ApiKey, NotionId};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Export a Notion page tree into Docusaurus docs", long_about = None)]
pub struct CommandLineInput {
    /// Notion API token
    #[arg(short = 't', long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub token: Option<String>,

    /// Root block, page or database ID (or Notion URL)
    #[arg(short = 'r', long)]
    pub root: String,

    /// Treat the root as a database and export its pages
    #[arg(long, default_value_t = false)]
    pub database: bool,

    /// Output directory for markdown files
    #[arg(short = 'o', long, default_value = "./output")]
    pub output: PathBuf,

    /// Documentation root prepended to absolute slugs in links
    #[arg(long, default_value = "/docs")]
    pub docs: String,

    /// Static asset root; images go to <assets>/docs-images
    #[arg(long, default_value = "./static")]
    pub assets: PathBuf,

    /// Response cache TTL in seconds (0 disables caching)
    #[arg(long, default_value_t = 600)]
    pub cache_ttl: u64,

    /// Seconds to wait before retrying a rate-limited request
    #[arg(long, default_value_t = 3)]
    pub rate_limit_delay: u64,

    /// Give up after this many rate-limit retries (default: retry forever)
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Pause between paginated requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub page_delay_ms: u64,

    /// Maximum number of result pages fetched per listing
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Which remote collection the root ID names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    BlockTree,
    Database,
}

/// Resolved export configuration, validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub root: NotionId,
    pub mode: ExportMode,
    pub api_key: ApiKey,
    pub output_dir: PathBuf,
    pub settings: ExportSettings,
    pub cache_ttl: Duration,
    pub retry: RateLimitPolicy,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a complete export configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = cli.token.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            AppError::MissingConfiguration(
                "Notion API token is required (--token or NOTION_API_KEY)".to_string(),
            )
        })?;
        let api_key = ApiKey::new(token)?;
        let root = NotionId::parse(&cli.root)?;

        Ok(ExportConfig {
            root,
            mode: if cli.database {
                ExportMode::Database
            } else {
                ExportMode::BlockTree
            },
            api_key,
            output_dir: cli.output,
            settings: ExportSettings {
                docs_root: cli.docs,
                assets_dir: cli.assets,
                pagination: PaginationOptions {
                    page_delay: Duration::from_millis(cli.page_delay_ms),
                    max_pages: cli.max_pages,
                },
            },
            cache_ttl: Duration::from_secs(cli.cache_ttl),
            retry: RateLimitPolicy {
                delay: Duration::from_secs(cli.rate_limit_delay),
                max_retries: cli.max_retries,
            },
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "secret_abcdefghijklmnopqrstuvwxyz";
    const ROOT: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn defaults_match_the_documented_cli() {
        let cli = CommandLineInput::parse_from(["notion2docs", "-t", TOKEN, "-r", ROOT]);
        let config = ExportConfig::resolve(cli).unwrap();

        assert_eq!(config.mode, ExportMode::BlockTree);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.settings.docs_root, "/docs");
        assert_eq!(config.settings.assets_dir, PathBuf::from("./static"));
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.retry, RateLimitPolicy::default());
        assert_eq!(config.settings.pagination, PaginationOptions::default());
    }

    #[test]
    fn database_mode_and_bounds() {
        let cli = CommandLineInput::parse_from([
            "notion2docs",
            "--token",
            TOKEN,
            "--root",
            ROOT,
            "--database",
            "--max-retries",
            "4",
            "--max-pages",
            "2",
            "--cache-ttl",
            "0",
        ]);
        let config = ExportConfig::resolve(cli).unwrap();

        assert_eq!(config.mode, ExportMode::Database);
        assert_eq!(config.retry.max_retries, Some(4));
        assert_eq!(config.settings.pagination.max_pages, Some(2));
        assert!(config.cache_ttl.is_zero());
    }

    #[test]
    fn rejects_bad_root_and_missing_token() {
        let cli = CommandLineInput::parse_from(["notion2docs", "-t", TOKEN, "-r", "nope"]);
        assert!(ExportConfig::resolve(cli).is_err());

        let cli = CommandLineInput {
            token: None,
            ..CommandLineInput::parse_from(["notion2docs", "-t", TOKEN, "-r", ROOT])
        };
        assert!(matches!(
            ExportConfig::resolve(cli),
            Err(AppError::MissingConfiguration(_))
        ));
    }
}
