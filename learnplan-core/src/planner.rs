//! Plan generation pipeline
//!
//! Validates a [`PlanRequest`], asks the generator for a plan, and parses the
//! reply into sections.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::generator::PlanGenerator;
use crate::plan::{parse_plan, plan_messages, PlanRequest, PlanSection};
use crate::Result;

/// A generated plan: the raw reply and its parsed sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Reply text exactly as the generator returned it
    pub raw: String,
    /// Sections parsed from `raw`
    pub sections: Vec<PlanSection>,
}

impl GeneratedPlan {
    /// Parse a raw reply
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let sections = parse_plan(&raw);
        Self { raw, sections }
    }
}

/// Drives a generator to produce learning plans
pub struct Planner<G> {
    generator: G,
}

impl<G: PlanGenerator> Planner<G> {
    /// Create a planner backed by `generator`
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get the underlying generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate and parse a plan for `request`
    pub async fn generate(&self, request: &PlanRequest) -> Result<GeneratedPlan> {
        let goal_prompt = request.goal_prompt()?;
        let messages = plan_messages(&goal_prompt)?;

        info!(
            generator = %self.generator.name(),
            experience = %request.experience,
            "Generating learning plan"
        );

        let started = Instant::now();
        let raw = self.generator.generate(&messages).await?;
        let plan = GeneratedPlan::from_raw(raw);

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            sections = plan.sections.len(),
            "Plan generated"
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ChatMessage, Role};
    use crate::Error;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Generator returning a fixed reply and recording what it was sent
    struct FixedGenerator {
        reply: String,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl FixedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlanGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            Ok(self.reply.clone())
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl PlanGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _messages: &[ChatMessage]) -> Result<String> {
            Err(Error::Generator("upstream unavailable".to_string()))
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_generate_parses_reply() {
        let planner = Planner::new(FixedGenerator::new(
            "1. Learning Goal Overview\nShip it.\n2. Key Topics\n- Ownership\n- Traits",
        ));

        let plan = planner.generate(&PlanRequest::new("Learn Rust")).await.unwrap();
        assert_eq!(plan.sections.len(), 2);
        assert_eq!(plan.sections[0].title, "Learning Goal Overview");
        assert_eq!(plan.sections[1].bullets, vec!["Ownership", "Traits"]);
        assert!(plan.raw.starts_with("1. Learning Goal Overview"));
    }

    #[tokio::test]
    async fn test_generate_sends_goal_prompt() {
        let planner = Planner::new(FixedGenerator::new("ok"));
        planner.generate(&PlanRequest::new("Learn Rust")).await.unwrap();

        let seen = planner.generator().seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, Role::System);
        assert!(seen[1].content.contains("Learn Rust. Assume learner experience: Beginner."));
    }

    #[tokio::test]
    async fn test_blank_goal_never_reaches_generator() {
        let planner = Planner::new(FixedGenerator::new("ok"));
        let err = planner.generate(&PlanRequest::new("  ")).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(planner.generator().seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generator_error_propagates() {
        let planner = Planner::new(FailingGenerator);
        let err = planner.generate(&PlanRequest::new("Learn Rust")).await.unwrap_err();
        assert!(matches!(err, Error::Generator(_)));
    }

    #[test]
    fn test_from_raw_unstructured_reply() {
        let plan = GeneratedPlan::from_raw("No response");
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.sections[0].title, "Plan");
        assert_eq!(plan.sections[0].body, vec!["No response"]);
    }
}
