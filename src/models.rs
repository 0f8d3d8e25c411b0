use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::Config;
use crate::llm::provider::LLM;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: LLM,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResearchRequest {
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,
    /// `brief`, `medium` or `deep`; anything else is treated as `medium`.
    #[serde(default)]
    pub depth: Option<String>,
}

impl ResearchRequest {
    pub fn depth_label(&self) -> &str {
        self.depth.as_deref().unwrap_or("medium")
    }
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("topic must not be empty"));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub topic: String,
    pub result: String,
    pub duration_seconds: f64,
    pub model: String,
    pub agents_used: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchErrorResponse {
    pub error: String,
    pub hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String, // "healthy" or "degraded"
    pub ollama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    pub configured_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_defaults_to_medium() {
        let request: ResearchRequest = serde_json::from_str(r#"{"topic":"Rust"}"#).unwrap();
        assert_eq!(request.depth_label(), "medium");

        let request: ResearchRequest =
            serde_json::from_str(r#"{"topic":"Rust","depth":null}"#).unwrap();
        assert_eq!(request.depth_label(), "medium");

        let request: ResearchRequest =
            serde_json::from_str(r#"{"topic":"Rust","depth":"deep"}"#).unwrap();
        assert_eq!(request.depth_label(), "deep");
    }

    #[test]
    fn test_topic_validation() {
        let ok: ResearchRequest = serde_json::from_str(r#"{"topic":"Rust"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let blank: ResearchRequest = serde_json::from_str(r#"{"topic":"   "}"#).unwrap();
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("topic"));
    }

    #[test]
    fn test_health_response_omits_absent_fields() {
        let health = HealthResponse {
            status: "degraded".to_string(),
            ollama: "unreachable: refused".to_string(),
            available_models: None,
            configured_model: "llama3".to_string(),
            hint: Some("check the network".to_string()),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };
        let value = serde_json::to_value(&health).unwrap();
        assert!(value.get("available_models").is_none());
        assert_eq!(value["hint"], "check the network");
    }
}
