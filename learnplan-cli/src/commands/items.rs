//! Items commands - Track, validate and summarise learning items

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use learnplan_core::learning::{
    sort_newest_first, Difficulty, ItemStore, LearningItem, LearningItemUpdate, LearningStats,
    LearningStatus, NewLearningItem,
};

/// Learning item commands
#[derive(Args, Debug)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
    /// Add an item to the file, creating it if needed
    Add {
        /// JSON file containing an array of learning items
        file: PathBuf,

        /// Item title
        #[arg(short, long)]
        title: String,

        /// Difficulty (beginner, intermediate, advanced)
        #[arg(short, long)]
        difficulty: Difficulty,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Link to the learning resource
        #[arg(long)]
        url: Option<String>,

        /// Initial status (not-started, in-progress, completed)
        #[arg(short, long)]
        status: Option<LearningStatus>,
    },

    /// Change fields of an existing item
    Update {
        /// JSON file containing an array of learning items
        file: PathBuf,

        /// Id of the item to change
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(short, long)]
        status: Option<LearningStatus>,
    },

    /// Remove an item
    Delete {
        /// JSON file containing an array of learning items
        file: PathBuf,

        /// Id of the item to remove
        id: String,
    },

    /// Show counts by status
    Stats {
        /// JSON file containing an array of learning items
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every item and list them newest first
    Validate {
        /// JSON file containing an array of learning items
        file: PathBuf,
    },
}

impl ItemsArgs {
    /// Execute the items command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            ItemsCommand::Add {
                file,
                title,
                difficulty,
                description,
                url,
                status,
            } => {
                let mut new = NewLearningItem::new(title.clone(), *difficulty);
                if let Some(description) = description {
                    new = new.with_description(description.clone());
                }
                if let Some(url) = url {
                    new = new.with_resource_url(url.clone());
                }
                if let Some(status) = status {
                    new = new.with_status(*status);
                }
                add_item(file, new)
            }
            ItemsCommand::Update {
                file,
                id,
                title,
                difficulty,
                description,
                url,
                status,
            } => {
                let update = LearningItemUpdate {
                    title: title.clone(),
                    description: description.clone(),
                    resource_url: url.clone(),
                    difficulty: *difficulty,
                    status: *status,
                };
                update_item(file, id, update)
            }
            ItemsCommand::Delete { file, id } => delete_item(file, id),
            ItemsCommand::Stats { file, json } => show_stats(file, *json),
            ItemsCommand::Validate { file } => validate_items(file),
        }
    }
}

fn print_item(item: &LearningItem) {
    println!(
        "  {} [{} / {}] {}",
        item.id, item.difficulty, item.status, item.title
    );
}

fn add_item(file: &Path, new: NewLearningItem) -> anyhow::Result<()> {
    let mut store = ItemStore::open(file)?;
    let item = store.add(new)?.clone();
    store.save()?;

    tracing::info!(id = %item.id, file = %file.display(), "Added learning item");
    println!("✅ Added:");
    print_item(&item);
    Ok(())
}

fn update_item(file: &Path, id: &str, update: LearningItemUpdate) -> anyhow::Result<()> {
    let mut store = ItemStore::open(file)?;
    let item = store.update(id, update)?.clone();
    store.save()?;

    tracing::info!(id = %item.id, file = %file.display(), "Updated learning item");
    println!("✅ Updated:");
    print_item(&item);
    Ok(())
}

fn delete_item(file: &Path, id: &str) -> anyhow::Result<()> {
    let mut store = ItemStore::open(file)?;
    let item = store.delete(id)?;
    store.save()?;

    tracing::info!(id = %item.id, file = %file.display(), "Deleted learning item");
    println!("🗑️  Deleted:");
    print_item(&item);
    Ok(())
}

fn show_stats(file: &Path, json: bool) -> anyhow::Result<()> {
    let store = ItemStore::open(file)?;
    let stats = LearningStats::from_items(store.items());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Learning items: {}", stats.total);
    println!("  Not started: {}", stats.not_started);
    println!("  In progress: {}", stats.in_progress);
    println!("  Completed:   {}", stats.completed);
    println!();
    println!("Progress: {:.0}% completed", stats.completion_percent());

    Ok(())
}

fn validate_items(file: &Path) -> anyhow::Result<()> {
    let mut items = ItemStore::open(file)?.items().to_vec();
    sort_newest_first(&mut items);

    let mut invalid = 0;
    for item in &items {
        match item.validate() {
            Ok(()) => println!(
                "  ✅ {} [{} / {}] {}",
                item.id, item.difficulty, item.status, item.title
            ),
            Err(e) => {
                invalid += 1;
                println!("  ❌ {}: {}", item.id, e);
            }
        }
    }

    println!();
    println!("Summary: {} valid, {} invalid", items.len() - invalid, invalid);

    if invalid > 0 {
        anyhow::bail!("{} invalid learning item(s)", invalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ItemsArgs,
    }

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let mut argv = vec!["learnplan"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv)?.args.execute()
    }

    #[test]
    fn test_add_update_delete_round() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("items.json");
        let path = file.to_str().unwrap();

        run(&["add", path, "-t", "Lifetimes", "-d", "advanced", "--url", "https://doc.rust-lang.org"])
            .unwrap();
        let items = ItemStore::open(&file).unwrap().items().to_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].difficulty, Difficulty::Advanced);
        assert_eq!(items[0].status, LearningStatus::NotStarted);

        let id = items[0].id.clone();
        run(&["update", path, &id, "-s", "in-progress"]).unwrap();
        let items = ItemStore::open(&file).unwrap().items().to_vec();
        assert_eq!(items[0].status, LearningStatus::InProgress);
        assert_eq!(items[0].title, "Lifetimes");

        run(&["delete", path, &id]).unwrap();
        assert!(ItemStore::open(&file).unwrap().items().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_url() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("items.json");
        let path = file.to_str().unwrap();

        assert!(run(&["add", path, "-t", "Async", "-d", "beginner", "--url", "not a url"]).is_err());
        assert!(!file.exists());
    }

    #[test]
    fn test_unknown_id_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("items.json");
        let path = file.to_str().unwrap();

        assert!(run(&["delete", path, "missing"]).is_err());
        assert!(run(&["update", path, "missing", "-t", "x"]).is_err());
    }

    #[test]
    fn test_add_requires_title_and_difficulty() {
        assert!(TestCli::try_parse_from(["learnplan", "add", "items.json"]).is_err());
        assert!(TestCli::try_parse_from(["learnplan", "add", "items.json", "-t", "x"]).is_err());
    }
}
