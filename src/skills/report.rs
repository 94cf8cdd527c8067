// Skill count results.

use serde::{Deserialize, Serialize};

/// How many times one skill term appeared across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

impl SkillCount {
    pub fn new(skill: impl Into<String>, count: usize) -> Self {
        Self {
            skill: skill.into(),
            count,
        }
    }
}

/// Output of a single `SkillCounter::count` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillReport {
    /// Found skills only (count > 0), highest count first
    pub counts: Vec<SkillCount>,
    /// All documents joined with a single space, lowercased
    #[serde(skip_serializing)]
    #[serde(default)]
    pub corpus_text: String,
    /// Number of documents that went into the corpus
    pub document_count: usize,
}

impl SkillReport {
    /// True when no vocabulary term was found at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the total number of whole-word matches.
    pub fn total_matches(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Look up the count for one skill. Absent skills return `None`, not 0.
    pub fn get(&self, skill: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.skill == skill)
            .map(|c| c.count)
    }

    /// The `n` highest-ranked skills.
    pub fn top(&self, n: usize) -> &[SkillCount] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// Percentage of all matches that belong to `count`.
    pub fn share(&self, count: usize) -> f64 {
        let total = self.total_matches();
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    }
}
