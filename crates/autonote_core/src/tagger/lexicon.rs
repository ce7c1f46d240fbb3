//! Built-in rule/lexicon tagging backend.
//!
//! # Responsibility
//! - Provide a dependency-free [`LexicalTagger`] implementation.
//! - Classify tokens via closed-class word lists, suffix rules and a
//!   noun-by-default fallback.
//!
//! # Invariants
//! - Classification is deterministic for a fixed input.
//! - Closed-class lists are checked before suffix heuristics.

use super::{LexicalTagger, PartOfSpeech, TaggedWord, TaggerResult};
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'\-]*|[0-9]+").expect("valid token regex"));

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "either", "neither", "both", "all",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "whose", "which",
    "what", "someone", "anyone", "everyone", "nobody", "something", "anything", "everything",
    "nothing",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "except",
    "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside",
    "over", "past", "since", "through", "to", "toward", "towards", "under", "until", "up", "upon",
    "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "when", "whenever", "where", "wherever", "whether", "than",
];

const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "go", "goes", "went", "gone", "get", "gets", "got", "make", "makes", "made", "take",
    "takes", "took", "buy", "buys", "bought", "need", "needs", "want", "wants", "call", "calls",
    "send", "sends", "sent", "meet", "meets", "met", "write", "writes", "wrote", "read", "reads",
    "remember", "finish", "check", "fix", "pay", "ask", "tell", "told", "bring", "brought",
    "pick", "put", "see", "saw", "seen", "know", "knew", "find", "found", "keep", "kept", "let",
    "say", "said", "think", "thought", "come", "came", "give", "gave", "look", "use", "try",
];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "also", "just", "now", "then", "here", "there", "today",
    "tomorrow", "yesterday", "soon", "later", "always", "never", "often", "sometimes", "usually",
    "again", "already", "still", "not", "maybe", "perhaps", "together", "away", "back", "well",
    "almost", "enough", "once", "twice",
];

const ADJECTIVES: &[&str] = &[
    "fresh", "good", "bad", "new", "old", "big", "small", "great", "little", "long", "short",
    "high", "low", "hot", "cold", "warm", "cool", "nice", "fine", "easy", "hard", "fast", "slow",
    "early", "late", "important", "urgent", "quick", "busy", "free", "full", "empty", "open",
    "closed", "ready", "happy", "sad", "clean", "dirty", "cheap", "expensive", "light", "dark",
    "heavy", "strong", "weak", "safe", "main", "next", "last", "first", "final", "daily",
    "weekly", "monthly", "personal", "public", "private", "simple", "common", "recent", "major",
    "minor", "favorite", "healthy", "sweet", "sour", "spicy", "red", "blue", "green", "black",
    "white", "yellow", "brown", "pink", "purple", "gray", "grey", "other", "same", "different",
    "whole", "half", "own", "best", "worst", "better", "worse",
];

// Common nouns that would otherwise trip the -ly adverb rule.
const LY_NOUNS: &[&str] = &[
    "family", "supply", "reply", "assembly", "jelly", "belly", "rally", "ally", "lily", "july",
    "italy", "monopoly",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "ish", "less"];

/// Rule-based lexical tagger: closed-class lexicon lookups, then suffix
/// heuristics, then noun by default.
///
/// This is the classic baseline for keyword-quality tagging; ambiguous
/// words land wherever the first matching rule puts them, which is the
/// precision callers should expect from any substituted backend too.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }
}

impl LexicalTagger for LexiconTagger {
    fn tag_text(&self, text: &str) -> TaggerResult<Vec<TaggedWord>> {
        Ok(TOKEN_RE
            .find_iter(text)
            .map(|m| {
                let token = normalize_token(m.as_str());
                let pos = classify(&token);
                TaggedWord { token, pos }
            })
            .collect())
    }
}

/// Strips possessive suffixes and stray trailing apostrophes/hyphens.
fn normalize_token(raw: &str) -> String {
    let token = raw
        .strip_suffix("'s")
        .or_else(|| raw.strip_suffix("'S"))
        .unwrap_or(raw);
    token.trim_end_matches(['\'', '-']).to_string()
}

fn classify(token: &str) -> PartOfSpeech {
    if token.is_empty() {
        return PartOfSpeech::Other;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return PartOfSpeech::Number;
    }

    let lower = token.to_lowercase();
    let word = lower.as_str();

    if DETERMINERS.contains(&word) {
        return PartOfSpeech::Determiner;
    }
    if PRONOUNS.contains(&word) {
        return PartOfSpeech::Pronoun;
    }
    if PREPOSITIONS.contains(&word) {
        return PartOfSpeech::Preposition;
    }
    if CONJUNCTIONS.contains(&word) {
        return PartOfSpeech::Conjunction;
    }
    if VERBS.contains(&word) {
        return PartOfSpeech::Verb;
    }
    if ADVERBS.contains(&word) {
        return PartOfSpeech::Adverb;
    }
    if ADJECTIVES.contains(&word) {
        return PartOfSpeech::Adjective;
    }
    if LY_NOUNS.contains(&word) {
        return PartOfSpeech::Noun;
    }

    if word.len() > 3 && word.ends_with("ly") {
        return PartOfSpeech::Adverb;
    }
    if word.len() > 4 && word.ends_with("ing") {
        return PartOfSpeech::Verb;
    }
    if word.len() > 3 && word.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| word.len() > suffix.len() + 1 && word.ends_with(suffix))
    {
        return PartOfSpeech::Adjective;
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return PartOfSpeech::PluralNoun;
    }

    PartOfSpeech::Noun
}
