//! Prompt Builder
//!
//! Renders the research and writing tasks for a topic. Pure: the same
//! `(topic, depth)` always yields the same prompts.

use crate::agents::roles::{RoleSpec, RESEARCHER, WRITER};
use crate::types::LLMMessage;

const BRIEF_INSTRUCTIONS: &str = "Keep your research concise - 3-5 key points maximum.";
const MEDIUM_INSTRUCTIONS: &str = "Provide a thorough analysis covering major aspects of the topic.";
const DEEP_INSTRUCTIONS: &str = "Do an exhaustive deep-dive. Cover history, current state, \
                                 key players, controversies, and future outlook.";

/// Requested research thoroughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    Brief,
    #[default]
    Medium,
    Deep,
}

impl Depth {
    /// Maps a request label to a depth. Anything other than the exact labels
    /// `brief`, `medium` and `deep` falls back to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "brief" => Depth::Brief,
            "deep" => Depth::Deep,
            _ => Depth::Medium,
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Depth::Brief => BRIEF_INSTRUCTIONS,
            Depth::Medium => MEDIUM_INSTRUCTIONS,
            Depth::Deep => DEEP_INSTRUCTIONS,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Brief => write!(f, "brief"),
            Depth::Medium => write!(f, "medium"),
            Depth::Deep => write!(f, "deep"),
        }
    }
}

/// One rendered pipeline step.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpec {
    pub role: &'static RoleSpec,
    pub topic: String,
    pub instructions: String,
    pub expected_output: String,
    /// Output of an upstream task, included verbatim when present.
    pub context: Option<String>,
}

impl TaskSpec {
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The task prompt proper, without the role's system message.
    pub fn user_prompt(&self) -> String {
        let mut prompt = format!(
            "{}\n\nThis is the expected criteria for your final answer: {}\n\
             you MUST return the actual complete content as the final answer, not a summary.",
            self.instructions, self.expected_output
        );

        if let Some(context) = &self.context {
            prompt.push_str("\n\nThis is the context you're working with:\n");
            prompt.push_str(context);
        }

        prompt
    }

    /// Messages to dispatch to the model client.
    pub fn messages(&self) -> Vec<LLMMessage> {
        vec![
            LLMMessage::system(self.role.system_prompt(&self.topic)),
            LLMMessage::user(self.user_prompt()),
        ]
    }
}

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn research_task(topic: &str, depth: Depth) -> TaskSpec {
        let instructions = format!(
            "Research the following topic thoroughly: {topic}\n\n\
             Instructions: {depth}\n\n\
             Provide:\n\
             1. Key findings and facts\n\
             2. Different perspectives or viewpoints\n\
             3. Important context\n\
             4. Areas where information is uncertain or debated",
            topic = topic,
            depth = depth.instructions(),
        );

        TaskSpec {
            role: &RESEARCHER,
            topic: topic.to_string(),
            instructions,
            expected_output: "A structured research brief with clearly labeled sections: \
                              Key Findings, Context, Perspectives, and Open Questions."
                .to_string(),
            context: None,
        }
    }

    /// The writing task, without the research context. The executor splices
    /// the research output in with [`TaskSpec::with_context`].
    pub fn writing_task(topic: &str) -> TaskSpec {
        let instructions = format!(
            "Using the research provided, write a well-structured article \
             about: {topic}\n\n\
             The article should:\n\
             - Have a compelling introduction\n\
             - Present information in a logical flow\n\
             - Be factual and balanced\n\
             - Include a brief conclusion\n\
             - Be written for an informed general audience",
            topic = topic,
        );

        TaskSpec {
            role: &WRITER,
            topic: topic.to_string(),
            instructions,
            expected_output: "A polished, well-written article in markdown format, \
                              ready for publication."
                .to_string(),
            context: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Depth; 3] = [Depth::Brief, Depth::Medium, Depth::Deep];

    #[test]
    fn test_depth_labels() {
        assert_eq!(Depth::from_label("brief"), Depth::Brief);
        assert_eq!(Depth::from_label("medium"), Depth::Medium);
        assert_eq!(Depth::from_label("deep"), Depth::Deep);
        assert_eq!(Depth::from_label("exhaustive"), Depth::Medium);
        assert_eq!(Depth::from_label(""), Depth::Medium);
        assert_eq!(Depth::from_label("Brief"), Depth::Medium);
    }

    #[test]
    fn test_research_prompt_has_exactly_one_depth_block() {
        for depth in ALL {
            let prompt = PromptBuilder::research_task("Rust", depth).user_prompt();
            for other in ALL {
                assert_eq!(
                    prompt.contains(other.instructions()),
                    other == depth,
                    "depth {} / block {}",
                    depth,
                    other
                );
            }
        }
    }

    #[test]
    fn test_unknown_depth_renders_like_medium() {
        let medium = PromptBuilder::research_task("Rust", Depth::Medium);
        let unknown = PromptBuilder::research_task("Rust", Depth::from_label("galactic"));
        assert_eq!(unknown, medium);
        assert_eq!(unknown.messages(), medium.messages());
    }

    #[test]
    fn test_research_task_structure() {
        let task = PromptBuilder::research_task("Quantum Computing", Depth::Brief);
        assert_eq!(task.role.name, "Senior Research Analyst");
        assert!(task.instructions.contains("Research the following topic thoroughly: Quantum Computing"));
        assert!(task.instructions.contains("3-5 key points maximum"));
        for point in [
            "1. Key findings and facts",
            "2. Different perspectives or viewpoints",
            "3. Important context",
            "4. Areas where information is uncertain or debated",
        ] {
            assert!(task.instructions.contains(point));
        }
        assert!(task.expected_output.contains("Key Findings, Context, Perspectives, and Open Questions"));
        assert!(task.context.is_none());

        let messages = task.messages();
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Conduct thorough research on: Quantum Computing"));
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_writing_task_structure() {
        let task = PromptBuilder::writing_task("Quantum Computing");
        assert_eq!(task.role.name, "Expert Content Writer");
        assert!(task.instructions.contains("write a well-structured article about: Quantum Computing"));
        for point in [
            "- Have a compelling introduction",
            "- Present information in a logical flow",
            "- Be factual and balanced",
            "- Include a brief conclusion",
            "- Be written for an informed general audience",
        ] {
            assert!(task.instructions.contains(point));
        }
        assert!(task.expected_output.contains("markdown"));
        assert!(!task.user_prompt().contains("context you're working with"));
    }

    #[test]
    fn test_context_is_appended_verbatim() {
        let research = "## Key Findings\n  * indented   spacing kept\n\n";
        let prompt = PromptBuilder::writing_task("X").with_context(research).user_prompt();
        assert!(prompt.contains(research));
        assert!(prompt.ends_with(research));
    }
}
