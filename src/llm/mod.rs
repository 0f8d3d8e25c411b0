// LLM abstraction layer

pub mod provider;
pub mod ollama;

pub use provider::*;
pub use crate::types::*;
