//! Prompt construction for plan generation
//!
//! Generation is two-step: the learner's goal and context are folded into a
//! single goal prompt, which is then wrapped in the mentor conversation sent
//! to the generator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// System message given to the generator
pub const MENTOR_SYSTEM_PROMPT: &str =
    "You are an expert learning mentor. Respond concisely and clearly.";

/// Preset goals offered to learners who don't know where to start
pub const QUICK_GOALS: &[&str] = &[
    "Learn Next.js API routes for a SaaS MVP",
    "Master TypeScript essentials for frontend",
    "Build a full-stack Prisma + Next.js CRUD app",
    "Get interview-ready for React patterns",
];

/// Learner experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    /// Get all experience levels
    pub fn all() -> &'static [Experience] {
        &[
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ]
    }

    /// Display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" | "b" => Ok(Experience::Beginner),
            "intermediate" | "i" => Ok(Experience::Intermediate),
            "advanced" | "a" => Ok(Experience::Advanced),
            _ => Err(format!("Unknown experience level: {}", s)),
        }
    }
}

/// Everything the learner tells us about the plan they want
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// What the learner wants to achieve
    pub goal: String,
    /// Self-reported experience
    pub experience: Experience,
    /// Daily time budget, free text (e.g. "45-60 mins")
    pub time_per_day: String,
    /// Focus areas, free text
    pub focus_area: String,
}

impl PlanRequest {
    /// Create a request with default context for the given goal
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            experience: Experience::default(),
            time_per_day: "45-60 mins".to_string(),
            focus_area: "Projects + spaced repetition".to_string(),
        }
    }

    /// Set the experience level
    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experience = experience;
        self
    }

    /// Set the daily time budget
    pub fn with_time_per_day(mut self, time: impl Into<String>) -> Self {
        self.time_per_day = time.into();
        self
    }

    /// Set the focus areas
    pub fn with_focus_area(mut self, focus: impl Into<String>) -> Self {
        self.focus_area = focus.into();
        self
    }

    /// Fold the goal and learner context into a single prompt
    pub fn goal_prompt(&self) -> Result<String> {
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(Error::Validation("Please enter a learning goal".to_string()));
        }

        Ok(format!(
            "{}. Assume learner experience: {}. Daily time: {}. Focus areas: {}. \
             Produce a concise 7-day plan with day headers, 3-5 bullet tasks per day, \
             and a short expected outcome per day. Use numbered days.",
            goal, self.experience, self.time_per_day, self.focus_area
        ))
    }
}

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// A single message in the conversation sent to the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the mentor conversation for a goal prompt
pub fn plan_messages(goal: &str) -> Result<Vec<ChatMessage>> {
    if goal.trim().is_empty() {
        return Err(Error::Validation("Goal is required".to_string()));
    }

    let user = format!(
        r#"Create a beginner-to-intermediate learning plan for:
"{}"

Return the response in this exact format:

1. Learning Goal Overview
2. Key Topics (bullet points)
3. 7-Day Learning Plan (Day 1 to Day 7)
"#,
        goal
    );

    Ok(vec![
        ChatMessage::system(MENTOR_SYSTEM_PROMPT),
        ChatMessage::user(user),
    ])
}
