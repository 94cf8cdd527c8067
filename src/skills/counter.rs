// Whole-word skill counting over a collection of job descriptions.
//
// All documents are joined with a single space and lowercased into one corpus
// string. Each vocabulary term then gets its own scan, so a term and a longer
// term containing it (e.g. "spark" and "apache spark") are counted
// independently. A single combined alternation would hide one of them.
//
// Word boundaries are checked by hand rather than with `\b`: regex-lite only
// knows ASCII word characters, and "excel" must not match inside "excelência".

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::debug;

use super::report::{SkillCount, SkillReport};
use super::vocabulary::Vocabulary;

/// A compiled skill matcher for one vocabulary.
///
/// Patterns are compiled once, up front. `count` takes `&self` and keeps no
/// state between calls, so a single counter can be shared across threads.
#[derive(Debug, Clone)]
pub struct SkillCounter {
    patterns: Vec<(String, Regex)>,
}

impl SkillCounter {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let patterns = vocabulary
            .terms()
            .iter()
            .map(|term| {
                // Escape so terms like "c++" or "node.js" match literally
                let regex = Regex::new(&regex_lite::escape(term))
                    .with_context(|| format!("Failed to compile pattern for skill '{term}'"))?;
                Ok((term.clone(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Count whole-word occurrences of every vocabulary term.
    ///
    /// Returns only the terms that were found, ranked by count descending,
    /// plus the lowercased corpus text for the word cloud.
    pub fn count<S: AsRef<str>>(&self, documents: &[S]) -> SkillReport {
        let corpus_text = documents
            .iter()
            .map(|d| d.as_ref())
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        let mut counts: Vec<SkillCount> = self
            .patterns
            .iter()
            .map(|(term, regex)| SkillCount {
                skill: term.clone(),
                count: count_whole_words(regex, &corpus_text),
            })
            .filter(|sc| sc.count > 0)
            .collect();

        // Stable sort: ties stay in vocabulary order
        counts.sort_by(|a, b| b.count.cmp(&a.count));

        debug!(
            documents = documents.len(),
            corpus_len = corpus_text.len(),
            skills_found = counts.len(),
            "Counted skills"
        );

        SkillReport {
            counts,
            corpus_text,
            document_count: documents.len(),
        }
    }

    /// Number of terms this counter searches for.
    pub fn term_count(&self) -> usize {
        self.patterns.len()
    }
}

/// One-shot convenience: compile a counter for `vocabulary` and run it.
pub fn count<S: AsRef<str>>(documents: &[S], vocabulary: &Vocabulary) -> Result<SkillReport> {
    Ok(SkillCounter::new(vocabulary)?.count(documents))
}

/// Unicode word character: any letter or digit in any script, or `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when byte offset `at` sits between a word and a non-word character.
/// Text start and end count as non-word.
fn is_boundary(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back().is_some_and(is_word_char);
    let after = text[at..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Count non-overlapping literal matches of `regex` with a word boundary on
/// both sides.
///
/// A rejected hit only advances the search by one character, so a valid
/// match overlapping it is still found.
fn count_whole_words(regex: &Regex, text: &str) -> usize {
    let mut count = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(m) = regex.find_at(text, pos) else {
            break;
        };

        if is_boundary(text, m.start()) && is_boundary(text, m.end()) {
            count += 1;
            pos = m.end().max(m.start() + 1);
        } else {
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
    }

    count
}
