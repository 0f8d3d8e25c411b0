use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LLMConfig;
use crate::types::{AppResult, LLMMessage, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;

    /// The backend's model inventory exactly as it returned it.
    async fn model_inventory(&self) -> AppResult<serde_json::Value>;

    /// Model identifiers extracted from the inventory (`models[].name`). An
    /// inventory without a `models` list has no models.
    async fn list_models(&self) -> AppResult<Vec<String>> {
        let inventory = self.model_inventory().await?;
        Ok(model_names(&inventory))
    }
}

pub(crate) fn model_names(inventory: &serde_json::Value) -> Vec<String> {
    inventory
        .get("models")
        .and_then(|m| m.as_array())
        .map(|models| {
            models
                .iter()
                .filter_map(|m| m.get("name").and_then(|n| n.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Per-call generation knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Process-wide model client: one backend plus the default model identifier.
/// Cheap to clone; every clone shares the same adapter.
#[derive(Clone)]
pub struct LLM {
    adapter: Arc<dyn LLMAdapter>,
    default_model: String,
}

impl LLM {
    pub fn new(config: &LLMConfig) -> AppResult<Self> {
        let adapter = crate::llm::ollama::OllamaAdapter::new(config)?;
        Ok(Self::with_adapter(Arc::new(adapter), &config.ollama_model))
    }

    pub fn with_adapter(adapter: Arc<dyn LLMAdapter>, default_model: &str) -> Self {
        Self {
            adapter,
            default_model: default_model.to_string(),
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Generates text for `messages` with `model`, or the default model when
    /// none is given.
    pub async fn generate(
        &self,
        model: Option<&str>,
        messages: Vec<LLMMessage>,
        options: GenerateOptions,
    ) -> AppResult<String> {
        let request = LLMRequest {
            model: model.unwrap_or(self.default_model.as_str()).to_string(),
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self.adapter.create_chat_completion(&request).await?;
        debug!(
            model = %request.model,
            finish_reason = %response.finish_reason,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Generation finished"
        );

        Ok(response.content)
    }

    pub async fn list_models(&self) -> AppResult<Vec<String>> {
        self.adapter.list_models().await
    }

    pub async fn model_inventory(&self) -> AppResult<serde_json::Value> {
        self.adapter.model_inventory().await
    }
}
