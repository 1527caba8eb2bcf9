use crate::constants;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub storage_dir: PathBuf,
    pub analysis: AnalysisConfig,
}

/// Настройки внешнего сервиса анализа документов.
/// Endpoint и ключ берутся только из окружения, без значений по умолчанию.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model_id: String,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(constants::DEFAULT_PORT);

        let poll_interval_ms: u64 = std::env::var("ANALYSIS_POLL_INTERVAL_MS")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(constants::DEFAULT_POLL_INTERVAL_MS);

        Self {
            host: host.clone(),
            port,
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            storage_dir: PathBuf::from(
                std::env::var("STORAGE_DIR")
                    .unwrap_or_else(|_| constants::DEFAULT_STORAGE_DIR.to_string()),
            ),
            analysis: AnalysisConfig {
                endpoint: std::env::var("ANALYSIS_ENDPOINT").unwrap_or_default(),
                api_key: std::env::var("ANALYSIS_API_KEY").unwrap_or_default(),
                model_id: std::env::var("ANALYSIS_MODEL_ID")
                    .unwrap_or_else(|_| constants::DEFAULT_MODEL_ID.to_string()),
                poll_interval: Duration::from_millis(poll_interval_ms),
            },
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_derived_from_host_and_port() {
        let config = Config::new();
        assert!(config.base_url.starts_with("http"));
        assert!(!config.storage_dir.as_os_str().is_empty());
    }

    #[test]
    fn model_id_has_a_default() {
        let config = Config::new();
        assert!(!config.analysis.model_id.is_empty());
    }
}
