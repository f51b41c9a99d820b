//! Keyword completion for NESTML model blocks.

use crate::document::Document;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WORD_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w*$").expect("word pattern is valid"));

/// What a completion inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    /// Block keyword.
    Keyword,
    /// Built-in function.
    Function,
}

/// A completion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Inserted text.
    pub label: &'static str,
    /// Candidate category.
    #[serde(rename = "type")]
    pub kind: CompletionKind,
}

/// Candidates offered in NESTML documents, in display order.
pub const COMPLETIONS: &[Completion] = &[
    keyword("model"),
    keyword("state"),
    keyword("parameters"),
    keyword("equations"),
    keyword("input"),
    keyword("output"),
    keyword("update"),
    Completion {
        label: "onCondition",
        kind: CompletionKind::Function,
    },
];

const fn keyword(label: &'static str) -> Completion {
    Completion {
        label,
        kind: CompletionKind::Keyword,
    }
}

/// Candidates for a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// Start of the word being completed.
    pub from: usize,
    /// Candidates whose label starts with that word.
    pub options: Vec<Completion>,
}

/// Complete the word before `pos`.
///
/// Without a word in front of the cursor only an explicit request (the user
/// asked for completion) yields candidates.
#[must_use]
pub fn complete(doc: &Document, pos: usize, explicit: bool) -> Option<CompletionResult> {
    let pos = doc.char_floor(pos);
    let line = doc.line_at(pos);
    let before = doc.slice(line.from, pos);
    let word = WORD_BEFORE.find(before).map_or("", |m| m.as_str());
    if word.is_empty() && !explicit {
        return None;
    }
    Some(CompletionResult {
        from: pos - word.len(),
        options: COMPLETIONS
            .iter()
            .filter(|completion| completion.label.starts_with(word))
            .copied()
            .collect(),
    })
}
