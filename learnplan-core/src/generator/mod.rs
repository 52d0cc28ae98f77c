//! Plan generator abstraction
//!
//! A generator is an opaque collaborator: a conversation goes in, free-form
//! plan text comes out. The text is handed to [`parse_plan`](crate::parse_plan)
//! unchanged.

use async_trait::async_trait;

use crate::plan::ChatMessage;
use crate::Result;

mod command;

pub use command::CommandGenerator;

/// Reply used when a generator succeeds but prints nothing
pub const EMPTY_REPLY: &str = "No response";

/// Trait for plan text generators
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Get the name of this generator
    fn name(&self) -> &str;

    /// Send the conversation and return the raw reply text
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Check if this generator can be used on the system
    fn is_available(&self) -> bool;
}

/// Flatten a conversation into the text written to a generator's input
///
/// Message contents are joined with blank lines, in order.
pub fn transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| m.content.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript() {
        let messages = vec![
            ChatMessage::system("Be brief.\n"),
            ChatMessage::user("  Plan for Rust"),
        ];
        assert_eq!(transcript(&messages), "Be brief.\n\nPlan for Rust");
    }

    #[test]
    fn test_transcript_empty() {
        assert_eq!(transcript(&[]), "");
    }
}
