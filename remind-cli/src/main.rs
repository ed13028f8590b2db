mod commands;
mod menu;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remind_core::Filter;
use remind_core::config::GlobalConfig;
use remind_core::dates;
use remind_core::store::{DEFAULT_UPCOMING_DAYS, EventStore};

#[derive(Parser)]
#[command(name = "remind")]
#[command(about = "Manage dated event reminders in a local flat file")]
struct Cli {
    /// Event store file (defaults to the configured path, or events.txt)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Event time (HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,
    },
    /// List events in chronological order
    List {
        /// Only events that are still pending
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only completed events (expired ones included)
        #[arg(long)]
        completed: bool,
    },
    /// Search events by date or by title keyword
    Search {
        /// Exact date to match (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Keyword to look for in titles (case-sensitive)
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Delete an event by id
    Delete { id: u32 },
    /// Show events coming up within the next days
    Upcoming {
        #[arg(long, default_value_t = DEFAULT_UPCOMING_DAYS)]
        days: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = resolve_store(cli.file)?;

    match cli.command {
        Some(Commands::Add { title, date, time }) => {
            let date = dates::parse_date(&date)?;
            let time = dates::parse_time(&time)?;
            commands::add::run(&store, &title, date, time)
        }
        Some(Commands::List { pending, completed }) => {
            let filter = if pending {
                Filter::Pending
            } else if completed {
                Filter::Completed
            } else {
                Filter::All
            };
            commands::list::run(&store, filter)
        }
        Some(Commands::Search { date, title }) => match (date, title) {
            (Some(date), None) => commands::search::by_date(&store, dates::parse_date(&date)?),
            (None, Some(keyword)) => commands::search::by_title(&store, &keyword),
            _ => anyhow::bail!("Search needs exactly one of --date or --title"),
        },
        Some(Commands::Delete { id }) => commands::delete::run(&store, id),
        Some(Commands::Upcoming { days }) => commands::upcoming::run(&store, days),
        None => menu::run(&store),
    }
}

fn resolve_store(file: Option<PathBuf>) -> Result<EventStore> {
    let path = match file {
        Some(path) => path,
        None => GlobalConfig::load()?.data_path(),
    };

    Ok(EventStore::new(path))
}
