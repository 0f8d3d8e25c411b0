//! The two fixed agent roles.

/// Static persona data for one pipeline role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    pub name: &'static str,
    /// May contain a `{topic}` placeholder.
    objective: &'static str,
    pub persona: &'static str,
}

impl RoleSpec {
    /// The role's objective with `{topic}` filled in.
    pub fn objective(&self, topic: &str) -> String {
        self.objective.replace("{topic}", topic)
    }

    /// System message introducing the role to the model.
    pub fn system_prompt(&self, topic: &str) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.name,
            self.persona,
            self.objective(topic)
        )
    }
}

pub const RESEARCHER: RoleSpec = RoleSpec {
    name: "Senior Research Analyst",
    objective: "Conduct thorough research on: {topic}",
    persona: "You are a seasoned research analyst with decades of experience. \
              You excel at breaking down complex topics into key findings, \
              identifying important patterns, and separating fact from opinion. \
              You always cite your reasoning and note areas of uncertainty.",
};

pub const WRITER: RoleSpec = RoleSpec {
    name: "Expert Content Writer",
    objective: "Transform research findings into a clear, engaging article",
    persona: "You are an award-winning writer known for making complex topics \
              accessible. You structure information logically, use clear language, \
              and always ensure accuracy. You write in a professional but \
              engaging tone.",
};

/// Roles in execution order.
pub const PIPELINE_ROLES: [&RoleSpec; 2] = [&RESEARCHER, &WRITER];
