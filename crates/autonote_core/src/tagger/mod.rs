//! Keyword extraction over a pluggable lexical tagging capability.
//!
//! # Responsibility
//! - Define the part-of-speech vocabulary and the tagging contract.
//! - Derive lowercase candidate tags from raw note text.
//!
//! # Invariants
//! - Extracted tags contain no uppercase characters.
//! - Only nouns, plural nouns and adjectives qualify as tags.
//! - A backend that cannot process input must fail loudly instead of
//!   returning an empty tag list.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod lexicon;

/// Word classes distinguished by tagging backends.
///
/// Extraction only branches on `Noun`, `PluralNoun` and `Adjective`;
/// the remaining variants exist so backends can report what they saw
/// instead of collapsing everything else into one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    PluralNoun,
    Adjective,
    Verb,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Other,
}

/// One token paired with the word class a backend assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub token: String,
    pub pos: PartOfSpeech,
}

/// Result type for tagging APIs.
pub type TaggerResult<T> = Result<T, TaggerError>;

/// Tagging-layer error.
#[derive(Debug)]
pub enum TaggerError {
    /// The tagging capability could not process the input.
    TaggingUnavailable { reason: String },
}

impl Display for TaggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaggingUnavailable { reason } => {
                write!(f, "tagging capability unavailable: {reason}")
            }
        }
    }
}

impl Error for TaggerError {}

/// Injected lexical tagging capability.
///
/// The store and extraction logic depend only on this trait, so any
/// part-of-speech backend (statistical model, rule tagger, external
/// service) can be substituted without touching extraction rules.
pub trait LexicalTagger {
    /// Tokenizes `text` and assigns one [`PartOfSpeech`] per token.
    ///
    /// # Errors
    /// - [`TaggerError::TaggingUnavailable`] when the backend cannot
    ///   process the input.
    fn tag_text(&self, text: &str) -> TaggerResult<Vec<TaggedWord>>;
}

/// Derives candidate tags from raw note text.
///
/// Tokens tagged as singular noun, plural noun or adjective are kept,
/// lowercased and deduplicated. Empty or all-punctuation input yields
/// an empty set. No side effects.
///
/// # Errors
/// - Propagates [`TaggerError::TaggingUnavailable`] from the backend.
pub fn extract_tags<T: LexicalTagger + ?Sized>(
    tagger: &T,
    text: &str,
) -> TaggerResult<BTreeSet<String>> {
    let tagged = tagger.tag_text(text)?;
    Ok(tagged
        .into_iter()
        .filter(|word| {
            matches!(
                word.pos,
                PartOfSpeech::Noun | PartOfSpeech::PluralNoun | PartOfSpeech::Adjective
            )
        })
        .map(|word| word.token.to_lowercase())
        .collect())
}
