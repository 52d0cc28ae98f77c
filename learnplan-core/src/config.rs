//! Configuration management for learnplan
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (LEARNPLAN_*)
//! 3. Config file (~/.config/learnplan/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::plan::{Experience, PlanRequest};
use crate::{Error, Result};

/// Settings for the external plan generator command
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Executable that reads a prompt on stdin and prints the reply
    pub command: String,

    /// Extra arguments passed before the model flag
    pub args: Vec<String>,

    /// Model to request, passed as `--model <model>`
    pub model: Option<String>,

    /// How long to wait for a reply
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: "llm".to_string(),
            args: Vec::new(),
            model: None, // Let the generator pick
            timeout: Duration::from_secs(120),
        }
    }
}

/// Default learner context for new plan requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub experience: Experience,
    pub time_per_day: String,
    pub focus_area: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            experience: Experience::Beginner,
            time_per_day: "45-60 mins".to_string(),
            focus_area: "Projects + spaced repetition".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Start a request for `goal` using these defaults
    pub fn request(&self, goal: impl Into<String>) -> PlanRequest {
        PlanRequest::new(goal)
            .with_experience(self.experience)
            .with_time_per_day(self.time_per_day.clone())
            .with_focus_area(self.focus_area.clone())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Generator configuration
    pub generator: GeneratorConfig,

    /// Planner defaults
    pub planner: PlannerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/learnplan/config.toml` on Linux
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("learnplan").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - LEARNPLAN_GENERATOR_COMMAND: Generator executable
    /// - LEARNPLAN_MODEL: Model to request
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(command) = std::env::var("LEARNPLAN_GENERATOR_COMMAND") {
            self.generator.command = command;
        }

        if let Ok(model) = std::env::var("LEARNPLAN_MODEL") {
            self.generator.model = Some(model);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, command: Option<String>, model: Option<String>) -> Self {
        if let Some(command) = command {
            self.generator.command = command;
        }

        if let Some(m) = model {
            self.generator.model = Some(m);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(command: Option<String>, model: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(command, model))
    }
}
