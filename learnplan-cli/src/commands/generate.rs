//! Generate command - Ask the generator for a plan and show its sections

use clap::Args;
use learnplan_core::{CommandGenerator, Config, PlanGenerator, Planner};

use super::print_sections;
use super::prompt::RequestArgs;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print the plan (raw text and sections) as JSON
    #[arg(long, conflicts_with = "raw")]
    pub json: bool,

    /// Print the generator's reply without parsing it
    #[arg(long)]
    pub raw: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        if self.request.print_goals() {
            return Ok(());
        }

        let request = self.request.request(config);
        let generator = CommandGenerator::from_config(&config.generator);

        if verbose {
            // `is_available` spawns a blocking child process
            let checker = generator.clone();
            let available = tokio::task::spawn_blocking(move || checker.is_available()).await?;
            tracing::info!(
                goal = %request.goal,
                command = %generator.name(),
                available,
                "Starting plan generation"
            );
        }

        let plan = Planner::new(generator).generate(&request).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else if self.raw {
            println!("{}", plan.raw.trim_end());
        } else {
            print_sections(&plan.sections);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn config_with_command(command: &str) -> Config {
        let mut config = Config::default();
        config.generator.command = command.to_string();
        config
    }

    #[tokio::test]
    async fn test_verbose_generate_checks_availability_off_runtime() {
        let cli = TestCli::try_parse_from(["learnplan", "-g", "Learn Rust", "--raw"]).unwrap();
        cli.args.execute(true, &config_with_command("cat")).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_generator_fails() {
        let cli = TestCli::try_parse_from(["learnplan", "-g", "Learn Rust"]).unwrap();
        let result = cli
            .args
            .execute(true, &config_with_command("learnplan-no-such-generator"))
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_json_conflicts_with_raw() {
        assert!(TestCli::try_parse_from(["learnplan", "-g", "x", "--json", "--raw"]).is_err());
    }
}
