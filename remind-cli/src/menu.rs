//! The interactive menu loop.
//!
//! Mirrors the store's operations one option per entry. Operation errors
//! are printed and control returns to the menu; only Exit leaves the loop,
//! after printing the upcoming-events reminders.

use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use remind_core::store::DEFAULT_UPCOMING_DAYS;
use remind_core::{EventStore, Filter, RemindError, dates};

use crate::commands;

const MENU_ITEMS: &[&str] = &[
    "Add Event",
    "View All Events",
    "View Pending Events",
    "View Completed Events",
    "Search Events by Date",
    "Search Events by Title",
    "Delete Event",
    "Exit",
];

const EXIT: usize = 7;

/// Run the interactive menu until the user exits.
pub fn run(store: &EventStore) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Event Reminder System")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        if choice == EXIT {
            commands::upcoming::run(store, DEFAULT_UPCOMING_DAYS)?;
            println!("Goodbye!");
            return Ok(());
        }

        let outcome = match choice {
            0 => add(store),
            1 => commands::list::run(store, Filter::All),
            2 => commands::list::run(store, Filter::Pending),
            3 => commands::list::run(store, Filter::Completed),
            4 => search_by_date(store),
            5 => search_by_title(store),
            6 => delete(store),
            _ => unreachable!(),
        };

        // Surface the failure and return to the menu.
        if let Err(err) = outcome {
            eprintln!("{}", err.to_string().red());
        }
    }
}

fn add(store: &EventStore) -> Result<()> {
    let title: String = Input::new().with_prompt("  Title").interact_text()?;
    let date = prompt_with_retry("  Date (YYYY-MM-DD)", dates::parse_date)?;
    let time = prompt_with_retry("  Time (HH:MM)", dates::parse_time)?;

    commands::add::run(store, &title, date, time)
}

fn search_by_date(store: &EventStore) -> Result<()> {
    let date = prompt_with_retry("  Date (YYYY-MM-DD)", dates::parse_date)?;
    commands::search::by_date(store, date)
}

fn search_by_title(store: &EventStore) -> Result<()> {
    let keyword: String = Input::new().with_prompt("  Keyword").interact_text()?;
    commands::search::by_title(store, &keyword)
}

fn delete(store: &EventStore) -> Result<()> {
    let id: u32 = Input::new().with_prompt("  Event ID").interact_text()?;
    commands::delete::run(store, id)
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T, RemindError>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
