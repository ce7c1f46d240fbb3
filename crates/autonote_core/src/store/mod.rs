//! Note store: in-memory collection plus durable archive.
//!
//! # Responsibility
//! - Own the in-memory note sequence and its lifecycle (load, append,
//!   persist-in-full).
//! - Orchestrate tag derivation on the add path.
//!
//! # Invariants
//! - Storage order is insertion order; sorting happens only in reads.
//! - Every successful `add` persists the whole collection.
//! - A failed persist leaves the in-memory append in place, so user
//!   content is not lost on transient disk errors.

use crate::model::note::Note;
use crate::search::filter::{filter_notes, sort_by_creation};
use crate::tagger::lexicon::LexiconTagger;
use crate::tagger::{extract_tags, LexicalTagger, TaggerError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub mod json_archive;

pub use json_archive::JsonFileArchive;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Durable-layer error for load/persist operations.
#[derive(Debug)]
pub enum ArchiveError {
    /// Durable read or write failed (disk full, permission denied, ...).
    Persistence { path: PathBuf, source: io::Error },
    /// Durable data is present but unparsable.
    CorruptStore { path: PathBuf, message: String },
}

impl Display for ArchiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence { path, source } => {
                write!(f, "persistence failed at `{}`: {source}", path.display())
            }
            Self::CorruptStore { path, message } => {
                write!(f, "corrupt note store at `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence { source, .. } => Some(source),
            Self::CorruptStore { .. } => None,
        }
    }
}

/// Durable storage contract: whole-collection load and overwrite.
///
/// One process owns the archive at a time; there is no locking and a
/// concurrent external writer loses to the next persist.
pub trait NoteArchive {
    /// Loads the full persisted collection.
    ///
    /// A missing archive yields an empty collection; present but
    /// unparsable data yields [`ArchiveError::CorruptStore`].
    fn load(&self) -> ArchiveResult<Vec<Note>>;

    /// Rewrites the full persisted collection.
    fn persist(&self, notes: &[Note]) -> ArchiveResult<()>;
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error combining tagging and persistence failures.
#[derive(Debug)]
pub enum StoreError {
    Tagging(TaggerError),
    Archive(ArchiveError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tagging(err) => write!(f, "{err}"),
            Self::Archive(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tagging(err) => Some(err),
            Self::Archive(err) => Some(err),
        }
    }
}

impl From<TaggerError> for StoreError {
    fn from(value: TaggerError) -> Self {
        Self::Tagging(value)
    }
}

impl From<ArchiveError> for StoreError {
    fn from(value: ArchiveError) -> Self {
        Self::Archive(value)
    }
}

/// Lowercases, trims and deduplicates caller-supplied tags.
///
/// Output order is ascending; empty values are dropped.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let normalized: BTreeSet<String> = tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();
    normalized.into_iter().collect()
}

/// In-memory owner of the note collection.
///
/// Generic over the durable archive and the tagging capability so both
/// can be substituted in tests or alternative deployments.
#[derive(Debug)]
pub struct NoteStore<A: NoteArchive, T: LexicalTagger> {
    archive: A,
    tagger: T,
    notes: Vec<Note>,
}

impl NoteStore<JsonFileArchive, LexiconTagger> {
    /// Opens a store at `path` with the default JSON archive and the
    /// built-in lexicon tagger, loading any existing durable data.
    ///
    /// # Errors
    /// - [`ArchiveError::Persistence`] when the file exists but cannot
    ///   be read.
    /// - [`ArchiveError::CorruptStore`] when the file contents are
    ///   unparsable.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::with_backends(JsonFileArchive::new(path), LexiconTagger::new())
    }

    /// Creates a store at `path` without reading existing durable data.
    ///
    /// Used to continue after a corrupt-store report; the next `add`
    /// overwrites the damaged file (last writer wins).
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            archive: JsonFileArchive::new(path),
            tagger: LexiconTagger::new(),
            notes: Vec::new(),
        }
    }
}

impl<A: NoteArchive, T: LexicalTagger> NoteStore<A, T> {
    /// Builds a store from explicit backends and loads durable data.
    pub fn with_backends(archive: A, tagger: T) -> StoreResult<Self> {
        let notes = archive.load()?;
        Ok(Self {
            archive,
            tagger,
            notes,
        })
    }

    /// Derives tags from `content`, appends a new note and persists the
    /// full collection.
    ///
    /// Returns the created note. When persistence fails, the in-memory
    /// append is kept and the error still surfaces, so durable state
    /// lags memory until the next successful persist.
    ///
    /// # Errors
    /// - [`StoreError::Tagging`] when the tagging capability fails; the
    ///   store is unchanged.
    /// - [`StoreError::Archive`] when the durable write fails.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let content = content.into();
        let tags = extract_tags(&self.tagger, &content)?;
        self.append_and_persist(Note::new(title, content, tags.into_iter().collect()))
    }

    /// Appends a note with caller-supplied tags, bypassing extraction.
    ///
    /// This is the fallback path for tagging outages and the import
    /// path for externally tagged records. Tags are normalized via
    /// [`normalize_tags`].
    pub fn add_with_tags(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> StoreResult<Note> {
        self.append_and_persist(Note::new(title, content, normalize_tags(&tags)))
    }

    fn append_and_persist(&mut self, note: Note) -> StoreResult<Note> {
        self.notes.push(note.clone());
        self.archive.persist(&self.notes)?;
        Ok(note)
    }

    /// Returns all notes ordered ascending by creation time.
    ///
    /// The sort is stable: notes sharing a timestamp keep insertion
    /// order. Repeated calls on an unchanged store are identical.
    pub fn list_sorted(&self) -> Vec<&Note> {
        sort_by_creation(&self.notes)
    }

    /// Returns notes matching `query`, in insertion order.
    ///
    /// A note matches when the lowercased query is a substring of its
    /// lowercased title or content, or an exact member of its tag set.
    /// The empty query matches every note.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        filter_notes(&self.notes, query)
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
