//! learnplan CLI - Command line interface for learnplan
//!
//! Generate 7-day learning plans and inspect the sections they parse into.

mod commands;

use clap::{Parser, Subcommand};
use learnplan_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{GenerateArgs, ItemsArgs, ParseArgs, PromptArgs};

/// learnplan: turn a learning goal into a structured 7-day plan
#[derive(Parser, Debug)]
#[command(name = "learnplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generator executable (overrides config and env)
    #[arg(long, global = true, env = "LEARNPLAN_GENERATOR_COMMAND")]
    generator_command: Option<String>,

    /// Model to request (overrides config and env)
    #[arg(long, global = true, env = "LEARNPLAN_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Parse raw plan text into sections
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Show the prompt that would be sent for a goal
    Prompt(PromptArgs),

    /// Generate a learning plan for a goal
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Validate and summarise learning items
    Items(ItemsArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.generator_command.clone(), cli.model.clone())?;

    if cli.verbose {
        tracing::info!(
            command = %config.generator.command,
            model = ?config.generator.model,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("learnplan {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Parse(args)) => {
            args.execute()?;
        }
        Some(Commands::Prompt(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Generate(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Items(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("learnplan Configuration");
            println!("=======================");
            println!();
            println!("Generator Settings:");
            println!("  command: {}", config.generator.command);
            if !config.generator.args.is_empty() {
                println!("  args: {}", config.generator.args.join(" "));
            }
            println!("  model: {}", config.generator.model.as_deref().unwrap_or("(default)"));
            println!("  timeout: {}s", config.generator.timeout.as_secs());
            println!();
            println!("Planner Defaults:");
            println!("  experience: {}", config.planner.experience);
            println!("  time_per_day: {}", config.planner.time_per_day);
            println!("  focus_area: {}", config.planner.focus_area);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("learnplan - structured 7-day learning plans");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
