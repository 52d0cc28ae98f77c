//! Prompt command - Show what would be sent to the generator

use clap::Args;
use learnplan_core::plan::{plan_messages, Experience, PlanRequest, QUICK_GOALS};
use learnplan_core::Config;

/// Goal and learner context shared by prompt and generate
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// What you want to achieve
    #[arg(short, long, required_unless_present = "list_goals")]
    pub goal: Option<String>,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(short, long)]
    pub experience: Option<Experience>,

    /// Daily time budget (e.g. "45-60 mins")
    #[arg(short, long)]
    pub time: Option<String>,

    /// Focus areas
    #[arg(short, long)]
    pub focus: Option<String>,

    /// List suggested goals and exit
    #[arg(long)]
    pub list_goals: bool,
}

impl RequestArgs {
    /// Build a request, filling unset fields from the planner defaults
    pub fn request(&self, config: &Config) -> PlanRequest {
        let mut request = config
            .planner
            .request(self.goal.clone().unwrap_or_default());

        if let Some(experience) = self.experience {
            request = request.with_experience(experience);
        }
        if let Some(time) = &self.time {
            request = request.with_time_per_day(time.clone());
        }
        if let Some(focus) = &self.focus {
            request = request.with_focus_area(focus.clone());
        }
        request
    }

    /// Print the suggested goals if asked to; returns whether it did
    pub fn print_goals(&self) -> bool {
        if self.list_goals {
            println!("Suggested goals:");
            for goal in QUICK_GOALS {
                println!("  - {}", goal);
            }
        }
        self.list_goals
    }
}

/// Arguments for the prompt command
#[derive(Args, Debug)]
pub struct PromptArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print the messages as JSON
    #[arg(long)]
    pub json: bool,
}

impl PromptArgs {
    /// Execute the prompt command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if self.request.print_goals() {
            return Ok(());
        }

        let goal_prompt = self.request.request(config).goal_prompt()?;
        let messages = plan_messages(&goal_prompt)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&messages)?);
            return Ok(());
        }

        for message in &messages {
            println!("[{}]", message.role.as_str());
            println!("{}", message.content.trim_end());
            println!();
        }

        Ok(())
    }
}
