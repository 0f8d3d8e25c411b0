//! Agent System
//!
//! Two fixed roles run in sequence for every research request:
//!
//! - **Researcher** (`Senior Research Analyst`): produces a structured research brief
//! - **Writer** (`Expert Content Writer`): turns that brief into a markdown article
//!
//! ## Pipeline Overview
//!
//! ```text
//! Topic + Depth
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Researcher  │  → research brief
//! └─────────────┘
//!      │  (verbatim context)
//!      ▼
//! ┌─────────────┐
//! │   Writer    │  → article
//! └─────────────┘
//!      │
//!      ▼
//!  PipelineResult
//! ```

pub mod roles;
pub mod prompts;
pub mod pipeline;

pub use roles::{RoleSpec, RESEARCHER, WRITER, PIPELINE_ROLES};
pub use prompts::{Depth, PromptBuilder, TaskSpec};
pub use pipeline::{PipelineExecutor, PipelineResult, PipelineState};
