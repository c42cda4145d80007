use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vmlabel_core::TokenizerConfig;
use vmlabel_observe::{LoggerConfig, LoggerLevel};

use crate::cli::Cli;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub tokenizer: TokenizerConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load the file named by `--config` (if any) and apply global flag overrides.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(level) = &cli.log_level {
            cfg.logger.level = LoggerLevel::new(level.as_str())?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.tokenizer, TokenizerConfig::default());
        assert_eq!(cfg.logger.level.as_str(), LoggerLevel::default().as_str());
    }

    #[test]
    fn load_reads_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"logger": {{"format": "json"}}, "tokenizer": {{"prefix": "caddy."}}}}"#
        )
        .unwrap();

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.tokenizer.prefix, "caddy.");
        assert_eq!(cfg.logger.format.to_string(), "json");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/vmlabel.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
