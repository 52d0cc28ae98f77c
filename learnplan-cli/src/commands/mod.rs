//! CLI command implementations

pub mod generate;
pub mod items;
pub mod parse;
pub mod prompt;

pub use generate::GenerateArgs;
pub use items::ItemsArgs;
pub use parse::ParseArgs;
pub use prompt::PromptArgs;

use learnplan_core::PlanSection;

/// Print sections in the terminal view, separated by blank lines
pub(crate) fn print_sections(sections: &[PlanSection]) {
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", section);
    }
}
