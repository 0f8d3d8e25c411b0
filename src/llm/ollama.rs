// Ollama adapter implementation
// Chat: POST {host}/api/chat with stream=false
// Inventory: GET {host}/api/tags
// API Reference: https://github.com/ollama/ollama/blob/main/docs/api.md

use std::time::Duration;

use crate::config::LLMConfig;
use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct OllamaAdapter {
    client: Client,
    base_url: String,
    probe_timeout: Duration,
}

// Request types for the Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [LLMMessage],
    stream: bool,
    #[serde(skip_serializing_if = "OllamaOptions::is_empty")]
    options: OllamaOptions,
}

#[derive(Serialize, Default)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

impl OllamaOptions {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.num_predict.is_none()
    }
}

// Response types for the Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct OllamaErrorResponse {
    error: String,
}

impl OllamaAdapter {
    pub fn new(config: &LLMConfig) -> AppResult<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.generate_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.ollama_host.trim_end_matches('/').to_string(),
            probe_timeout: config.probe_timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        if let Ok(error_response) = serde_json::from_str::<OllamaErrorResponse>(&error_text) {
            return AppError::Backend(format!(
                "Ollama API error ({}): {}",
                status, error_response.error
            ));
        }

        AppError::Backend(format!("Ollama API error ({}): {}", status, error_text))
    }
}

#[async_trait]
impl LLMAdapter for OllamaAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let body = OllamaChatRequest {
            model: &request.model,
            messages: &request.messages,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            prompt_chars = request.full_prompt().len(),
            "Sending Ollama chat request"
        );

        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!(error = %err, "Ollama chat request failed");
            return Err(err);
        }

        let chat: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to parse Ollama response: {}", e)))?;

        if chat.message.content.trim().is_empty() {
            return Err(AppError::Backend("Ollama returned an empty message".to_string()));
        }

        let prompt_tokens = chat.prompt_eval_count.unwrap_or(0);
        let completion_tokens = chat.eval_count.unwrap_or(0);

        Ok(LLMResponse {
            content: chat.message.content,
            finish_reason: chat.done_reason.unwrap_or_else(|| "stop".to_string()),
            usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
        })
    }

    async fn model_inventory(&self) -> AppResult<serde_json::Value> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .timeout(self.probe_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to parse Ollama model list: {}", e)))
    }
}
