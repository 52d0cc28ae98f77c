//! Learning plan text handling
//!
//! This module turns generator replies into display sections, renders them
//! back to text, and builds the prompts that ask for a plan in the first
//! place.

mod parser;
mod prompt;
mod render;

pub use parser::{parse_plan, PlanSection, DEFAULT_SECTION_TITLE};
pub use prompt::{
    plan_messages, ChatMessage, Experience, PlanRequest, Role, MENTOR_SYSTEM_PROMPT, QUICK_GOALS,
};
pub use render::render_plan_text;
