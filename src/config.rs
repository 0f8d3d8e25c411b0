use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub vector: VectorStoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// `["*"]` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    /// Base address of the Ollama server, without a trailing slash.
    pub ollama_host: String,
    /// Model used for both pipeline steps and reported back to callers.
    pub ollama_model: String,
    /// Bounds the `/api/tags` calls made by `/health` and `/models`.
    pub probe_timeout: Duration,
    /// Bounds connection establishment for every backend call.
    pub connect_timeout: Duration,
    /// Total budget for one generation call. `None` leaves generation unbounded.
    pub generate_timeout: Option<Duration>,
    pub temperature: Option<f32>,
}

/// Qdrant address. Reserved for retrieval; the pipeline does not read it.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoreConfig {
    pub qdrant_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, applying defaults
    /// for anything missing.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let generate_timeout = match lookup("OLLAMA_GENERATE_TIMEOUT_SECS") {
            Some(secs) if !secs.trim().is_empty() => {
                Some(Duration::from_secs(secs.trim().parse()?))
            }
            _ => None,
        };

        let temperature = match lookup("LLM_TEMPERATURE") {
            Some(t) if !t.trim().is_empty() => Some(t.trim().parse()?),
            _ => None,
        };

        Ok(Self {
            server: ServerConfig {
                port: var("PORT", "8000").parse()?,
                host: var("HOST", "0.0.0.0"),
                cors_allowed_origins: var("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            llm: LLMConfig {
                ollama_host: var("OLLAMA_HOST", "http://ollama:11434")
                    .trim_end_matches('/')
                    .to_string(),
                ollama_model: var("OLLAMA_MODEL", "llama3"),
                probe_timeout: Duration::from_secs(var("OLLAMA_PROBE_TIMEOUT_SECS", "5").parse()?),
                connect_timeout: Duration::from_secs(
                    var("OLLAMA_CONNECT_TIMEOUT_SECS", "10").parse()?,
                ),
                generate_timeout,
                temperature,
            },
            vector: VectorStoreConfig {
                qdrant_host: var("QDRANT_HOST", "http://qdrant:6333"),
            },
        })
    }
}
