//! learnplan core - plan parsing, prompt construction and learning items
//!
//! This crate turns a learner's goal into a prompt for an external text
//! generator, splits the generator's free-form reply into display sections,
//! and validates and summarises the learner's tracked items.

pub mod config;
pub mod error;
pub mod generator;
pub mod learning;
pub mod plan;
pub mod planner;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{CommandGenerator, PlanGenerator};
pub use learning::{
    Difficulty, ItemStore, LearningItem, LearningItemUpdate, LearningStats, LearningStatus,
    NewLearningItem,
};
pub use plan::{parse_plan, render_plan_text, ChatMessage, Experience, PlanRequest, PlanSection, Role};
pub use planner::{GeneratedPlan, Planner};
