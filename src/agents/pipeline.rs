//! Pipeline Executor
//!
//! Runs the research task, then the writing task with the research output as
//! its context. A failure in either step ends the run; nothing from a failed
//! run is returned.

use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::agents::prompts::{Depth, PromptBuilder, TaskSpec};
use crate::agents::roles::PIPELINE_ROLES;
use crate::llm::provider::{GenerateOptions, LLM};
use crate::types::{AppError, AppResult};

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub topic: String,
    pub text: String,
    pub elapsed: Duration,
    pub model: String,
    /// Role names in execution order.
    pub roles_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Idle,
    ResearchRunning,
    WritingRunning,
    Done(PipelineResult),
    Failed(AppError),
}

impl PipelineState {
    fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::ResearchRunning => "research_running",
            PipelineState::WritingRunning => "writing_running",
            PipelineState::Done(_) => "done",
            PipelineState::Failed(_) => "failed",
        }
    }
}

/// Executes one pipeline run. Build a fresh executor per request.
pub struct PipelineExecutor {
    llm: LLM,
    options: GenerateOptions,
    state: PipelineState,
}

impl PipelineExecutor {
    pub fn new(llm: LLM, options: GenerateOptions) -> Self {
        Self {
            llm,
            options,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn model(&self) -> &str {
        self.llm.default_model()
    }

    pub async fn run(&mut self, topic: &str, depth: Depth) -> AppResult<PipelineResult> {
        if self.state != PipelineState::Idle {
            return Err(AppError::Internal(format!(
                "pipeline already ran (state: {})",
                self.state.label()
            )));
        }

        let started = Instant::now();
        info!(topic = %topic, depth = %depth, model = %self.model(), "Starting research pipeline");

        self.transition(PipelineState::ResearchRunning);
        let research_task = PromptBuilder::research_task(topic, depth);
        let outcome = self.execute(&research_task).await;
        let research = match outcome {
            Ok(text) => text,
            Err(e) => return Err(self.fail("research", e)),
        };
        info!(research_len = research.len(), "Research step complete");

        self.transition(PipelineState::WritingRunning);
        let writing_task = PromptBuilder::writing_task(topic).with_context(research);
        let outcome = self.execute(&writing_task).await;
        let article = match outcome {
            Ok(text) => text,
            Err(e) => return Err(self.fail("writing", e)),
        };

        let result = PipelineResult {
            topic: topic.to_string(),
            text: article,
            elapsed: started.elapsed(),
            model: self.model().to_string(),
            roles_used: PIPELINE_ROLES.iter().map(|r| r.name.to_string()).collect(),
        };
        info!(
            result_len = result.text.len(),
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Research pipeline complete"
        );

        self.transition(PipelineState::Done(result.clone()));
        Ok(result)
    }

    async fn execute(&self, task: &TaskSpec) -> AppResult<String> {
        debug!(role = task.role.name, "Dispatching task");
        self.llm.generate(None, task.messages(), self.options).await
    }

    fn fail(&mut self, step: &str, e: AppError) -> AppError {
        error!(step = step, error = %e, "Pipeline step failed");
        self.transition(PipelineState::Failed(e.clone()));
        e
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = self.state.label(), to = next.label(), "Pipeline transition");
        self.state = next;
    }
}
