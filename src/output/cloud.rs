// Terminal word cloud over the analyzed corpus.
//
// Tokenizes the corpus text into words of two or more characters (a word
// character followed by word characters or apostrophes, in any script), drops
// English stop words and bare numbers, and ranks what's left by frequency.
// Each word's weight is its frequency relative to the most frequent word,
// which drives how loudly it gets printed.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use stop_words::{get, LANGUAGE};

use crate::skills::counter::is_word_char;

/// Most words a cloud will keep.
pub const DEFAULT_MAX_WORDS: usize = 200;

const LINE_WIDTH: usize = 72;

/// One word in the cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub frequency: usize,
    /// Frequency relative to the top word, in (0.0, 1.0]
    pub weight: f64,
}

/// Ranked word frequencies, most frequent first.
#[derive(Debug, Clone, Serialize)]
pub struct WordCloud {
    pub words: Vec<CloudWord>,
}

impl WordCloud {
    /// Build a cloud from corpus text.
    ///
    /// Fails when the text has no usable words. Callers should treat that as
    /// a warning, not a reason to abort.
    pub fn generate(text: &str, max_words: usize) -> Result<Self> {
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for token in tokenize(text) {
            let word = token.to_lowercase();
            if stop_words.contains(&word) || word.chars().all(char::is_numeric) {
                continue;
            }
            *frequencies.entry(word).or_insert(0) += 1;
        }

        if frequencies.is_empty() {
            anyhow::bail!("Not enough text to build a word cloud (no usable words found)");
        }

        let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
        // Alphabetical tie-break keeps output stable across runs
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_words);

        let top = ranked.first().map(|(_, f)| *f).unwrap_or(1) as f64;
        let words = ranked
            .into_iter()
            .map(|(word, frequency)| CloudWord {
                word,
                frequency,
                weight: frequency as f64 / top,
            })
            .collect();

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Print the top `limit` words, wrapped, louder the more frequent.
    pub fn display(&self, limit: usize) {
        println!("\n{}", "=== Word Cloud ===".bold());
        println!();

        let mut line = String::new();
        let mut line_len = 0;

        for cw in self.words.iter().take(limit) {
            let styled = if cw.weight >= 0.6 {
                cw.word.to_uppercase().bright_cyan().bold()
            } else if cw.weight >= 0.3 {
                cw.word.bright_green().bold()
            } else if cw.weight >= 0.1 {
                cw.word.normal()
            } else {
                cw.word.dimmed()
            };

            // Visible width, not the length of the escape-coded string
            let width = cw.word.chars().count() + 2;
            if line_len + width > LINE_WIDTH && line_len > 0 {
                println!("  {line}");
                line.clear();
                line_len = 0;
            }
            line.push_str(&format!("{styled}  "));
            line_len += width;
        }

        if line_len > 0 {
            println!("  {line}");
        }
    }
}

/// Split text into tokens of at least two characters: a word character
/// followed by word characters or apostrophes.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = 0;

    for (i, c) in text.char_indices() {
        match start {
            Some(_) if is_word_char(c) || c == '\'' => chars += 1,
            Some(s) => {
                if chars >= 2 {
                    tokens.push(&text[s..i]);
                }
                start = None;
            }
            None => {}
        }
        if start.is_none() && is_word_char(c) {
            start = Some(i);
            chars = 1;
        }
    }

    if let Some(s) = start {
        if chars >= 2 {
            tokens.push(&text[s..]);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_and_weights() {
        let cloud = WordCloud::generate(
            "python python python sql sql dashboards",
            DEFAULT_MAX_WORDS,
        )
        .unwrap();

        assert_eq!(cloud.words[0].word, "python");
        assert_eq!(cloud.words[0].frequency, 3);
        assert!((cloud.words[0].weight - 1.0).abs() < f64::EPSILON);
        assert!((cloud.words[1].weight - 2.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_drops_stop_words_numbers_and_single_chars() {
        let cloud = WordCloud::generate("the r and 2024 of excel", DEFAULT_MAX_WORDS).unwrap();
        let words: Vec<&str> = cloud.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["excel"]);
    }

    #[test]
    fn test_empty_text_is_insufficient() {
        let err = WordCloud::generate("", DEFAULT_MAX_WORDS).unwrap_err();
        assert!(err.to_string().contains("Not enough text"));
        assert!(WordCloud::generate("a b c", DEFAULT_MAX_WORDS).is_err());
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let cloud = WordCloud::generate("café excelência café", DEFAULT_MAX_WORDS).unwrap();
        let words: Vec<&str> = cloud.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["café", "excelência"]);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("it's a naïve_test, 'quoted' x"),
            vec!["it's", "naïve_test", "quoted'"]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_max_words() {
        let cloud = WordCloud::generate("tableau spreadsheet warehouse pipeline", 2).unwrap();
        assert_eq!(cloud.len(), 2);
    }
}
