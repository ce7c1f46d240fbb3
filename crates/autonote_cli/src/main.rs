//! Interactive console for the note store.
//!
//! # Responsibility
//! - Drive the numbered add/list/search menu over `autonote_core`.
//! - Print operation errors and keep the loop running.
//!
//! # Invariants
//! - A single failed operation never terminates the process.
//! - Storage problems at startup degrade to an empty in-memory store.

use autonote_core::{
    default_log_level, init_logging, ArchiveError, JsonFileArchive, LexiconTagger, Note,
    NoteStore, StoreError,
};
use clap::Parser;
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type CliStore = NoteStore<JsonFileArchive, LexiconTagger>;

#[derive(Parser)]
#[command(name = "autonote")]
#[command(about = "Personal note organizer with automatic keyword tags")]
struct Cli {
    /// Path of the JSON notes file.
    #[arg(long, default_value = "notes.json")]
    store: PathBuf,
    /// Absolute directory for rotating log files; logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error). Defaults per build mode.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("Logging disabled: {message}");
        }
    }

    let mut store = open_store(&cli.store);
    info!(
        "event=cli_start module=cli status=ok store={} count={}",
        cli.store.display(),
        store.len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("=== Autonote ===");
        println!("1. Add Note");
        println!("2. List Notes");
        println!("3. Search Notes");
        println!("4. Exit");
        let Some(choice) = prompt(&mut lines, "Choose an option: ") else {
            break;
        };
        match choice.as_str() {
            "1" => add_note(&mut lines, &mut store),
            "2" => list_notes(&store),
            "3" => search_notes(&mut lines, &store),
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}

/// Opens the store fail-open: startup storage problems are reported and
/// the session continues with an empty in-memory list. The damaged file
/// is only rewritten if the user adds a note (last writer wins).
fn open_store(path: &PathBuf) -> CliStore {
    match NoteStore::open(path) {
        Ok(store) => store,
        Err(StoreError::Archive(err @ ArchiveError::CorruptStore { .. })) => {
            eprintln!("Warning: {err}");
            eprintln!("Starting with an empty note list.");
            warn!("event=cli_start module=cli status=degraded reason=corrupt_store");
            NoteStore::empty(path)
        }
        Err(err) => {
            eprintln!("Warning: could not read note store: {err}");
            eprintln!("Starting with an empty note list.");
            warn!("event=cli_start module=cli status=degraded reason=load_failed");
            NoteStore::empty(path)
        }
    }
}

fn add_note(lines: &mut impl Iterator<Item = io::Result<String>>, store: &mut CliStore) {
    let Some(title) = prompt(lines, "Enter note title: ") else {
        return;
    };
    let Some(content) = prompt(lines, "Enter note content: ") else {
        return;
    };

    match store.add(title, content) {
        Ok(note) => println!("Note added with tags: {}", format_tags(&note.tags)),
        Err(err) => {
            eprintln!("Could not add note: {err}");
            error!("event=note_add module=cli status=error error={err}");
        }
    }
}

fn list_notes(store: &CliStore) {
    if store.is_empty() {
        println!("No notes available!");
        return;
    }

    println!();
    println!("=== Notes ===");
    for (index, note) in store.list_sorted().iter().enumerate() {
        println!("{}. {}", index + 1, summarize(note));
    }
}

fn search_notes(lines: &mut impl Iterator<Item = io::Result<String>>, store: &CliStore) {
    let Some(query) = prompt(lines, "Enter keyword to search: ") else {
        return;
    };

    let hits = store.search(&query);
    if hits.is_empty() {
        println!("No matching notes found.");
        return;
    }

    println!();
    println!("Found {} notes:", hits.len());
    for note in hits {
        println!("- {}", summarize(note));
    }
}

/// Prints `label`, flushes, and reads one trimmed line.
///
/// Returns `None` on EOF or a read failure, which callers treat as
/// "abandon the current prompt".
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn summarize(note: &Note) -> String {
    format!(
        "{} ({}) - Tags: {}",
        note.title,
        note.created_at,
        format_tags(&note.tags)
    )
}

fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(", "))
}
