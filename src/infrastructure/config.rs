use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::use_cases::batch_analyze_documents::BatchSettings;
use crate::application::use_cases::run_scheduled_reanalysis::ReanalysisSettings;
use crate::domain::value_objects::ChunkingConfig;
use crate::infrastructure::external_services::{
    ComplianceModelConfig, EmbeddingClientConfig, RetryPolicy,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORAGE_DIR: &str = "./uploads";
const DEFAULT_EMBEDDING_API_URL: &str = "https://api.openai.com/v1/embeddings";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
const DEFAULT_ANALYSIS_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ANALYSIS_MODEL_VERSION: &str = "1.0";
const DEFAULT_REANALYSIS_INTERVAL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const MIN_STALE_DAYS: i64 = 1;
const MAX_STALE_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Missing(String),
    InvalidValue { name: String, value: String },
    InvalidChunking(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: '{}'", name, value)
            }
            ConfigError::InvalidChunking(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the service reads from its environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub document_storage_dir: PathBuf,
    /// `None` when no embedding key is set.
    pub embedding: Option<EmbeddingClientConfig>,
    /// `None` when no analysis key is set.
    pub analysis: Option<ComplianceModelConfig>,
    pub chunking: ChunkingConfig,
    pub batch: BatchSettings,
    pub reanalysis: ReanalysisSettings,
    pub reanalysis_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::Missing("DATABASE_URL".to_string()))?;

        let port = parse_or(&var, "PORT", DEFAULT_PORT)?;
        let document_storage_dir = PathBuf::from(
            var("DOCUMENT_STORAGE_DIR").unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string()),
        );

        let timeout_secs = parse_or(&var, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let retry = RetryPolicy {
            max_retries: parse_or(&var, "HTTP_MAX_RETRIES", RetryPolicy::default().max_retries)?,
            ..RetryPolicy::default()
        };

        let embedding = var("EMBEDDING_API_KEY")
            .or_else(|| var("OPENAI_API_KEY"))
            .map(|api_key| EmbeddingClientConfig {
                api_url: var("EMBEDDING_API_URL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_API_URL.to_string()),
                api_key,
                model: var("EMBEDDING_MODEL").unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
                timeout_secs,
                retry,
            });

        let analysis = var("ANALYSIS_API_KEY").map(|api_key| ComplianceModelConfig {
            api_url: var("ANALYSIS_API_URL").unwrap_or_else(|| DEFAULT_ANALYSIS_API_URL.to_string()),
            api_key,
            model: var("ANALYSIS_MODEL").unwrap_or_else(|| DEFAULT_ANALYSIS_MODEL.to_string()),
            model_version: var("ANALYSIS_MODEL_VERSION")
                .unwrap_or_else(|| DEFAULT_ANALYSIS_MODEL_VERSION.to_string()),
            timeout_secs,
            retry,
        });

        let chunking = ChunkingConfig::new(
            parse_or(&var, "CHUNK_SIZE", ChunkingConfig::DEFAULT_CHUNK_SIZE)?,
            parse_or(&var, "CHUNK_OVERLAP", ChunkingConfig::DEFAULT_OVERLAP)?,
        )
        .map_err(|e| ConfigError::InvalidChunking(e.to_string()))?;

        let batch_defaults = BatchSettings::default();
        let group_size = parse_or(&var, "BATCH_GROUP_SIZE", batch_defaults.group_size)?;
        if group_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "BATCH_GROUP_SIZE".to_string(),
                value: "0".to_string(),
            });
        }
        let batch = BatchSettings {
            group_size,
            group_delay: Duration::from_millis(parse_or(
                &var,
                "BATCH_GROUP_DELAY_MS",
                batch_defaults.group_delay.as_millis() as u64,
            )?),
        };

        let reanalysis_defaults = ReanalysisSettings::default();
        let reanalysis = ReanalysisSettings {
            stale_after_days: parse_in_range(
                &var,
                "REANALYSIS_STALE_DAYS",
                reanalysis_defaults.stale_after_days,
                MIN_STALE_DAYS..=MAX_STALE_DAYS,
            )?,
            max_batch: parse_in_range(
                &var,
                "REANALYSIS_MAX_BATCH",
                reanalysis_defaults.max_batch,
                1..=i64::MAX,
            )?,
        };

        let reanalysis_interval = Duration::from_secs(parse_or(
            &var,
            "REANALYSIS_INTERVAL_SECS",
            DEFAULT_REANALYSIS_INTERVAL_SECS,
        )?);

        Ok(Self {
            database_url,
            port,
            document_storage_dir,
            embedding,
            analysis,
            chunking,
            batch,
            reanalysis,
            reanalysis_interval,
        })
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

fn parse_in_range<T, F>(
    var: &F,
    name: &str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + ToString,
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(var, name, default)?;
    if !range.contains(&value) {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}
