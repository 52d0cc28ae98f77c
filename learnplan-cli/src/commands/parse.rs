//! Parse command - Split raw plan text into sections

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use learnplan_core::parse_plan;

use super::print_sections;

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// File containing the raw plan text (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Print sections as JSON
    #[arg(long)]
    pub json: bool,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> anyhow::Result<()> {
        let text = match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let sections = parse_plan(&text);
        tracing::debug!(sections = sections.len(), "Parsed plan text");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&sections)?);
        } else {
            print_sections(&sections);
        }

        Ok(())
    }
}
