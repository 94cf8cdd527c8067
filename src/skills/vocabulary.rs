// Skill vocabulary: the fixed list of keywords we hunt for.
//
// Terms are normalized (trimmed, lowercased) on construction and must be
// distinct and non-empty. A bad vocabulary is rejected here, at startup,
// so the counter never has to deal with it.

use std::collections::HashSet;

use anyhow::Result;

/// The default keyword list, tuned for data analysis roles.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "sql",
    "r",
    "excel",
    "tableau",
    "power bi",
    "sas",
    "spss",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "aws",
    "azure",
    "gcp",
    "spark",
    "hadoop",
    "jira",
    "agile",
];

/// An ordered list of distinct, lowercase skill terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, normalizing each term.
    ///
    /// Fails on the first empty term or the first duplicate (compared after
    /// normalization, so "SQL" and "sql" collide).
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for (i, raw) in terms.into_iter().enumerate() {
            let term = raw.as_ref().trim().to_lowercase();
            if term.is_empty() {
                anyhow::bail!("Skill vocabulary entry #{} is empty", i + 1);
            }
            if !seen.insert(term.clone()) {
                anyhow::bail!("Skill vocabulary contains duplicate term '{term}'");
            }
            normalized.push(term);
        }

        Ok(Self { terms: normalized })
    }

    /// Parse a comma-separated list like `"python, sql, power bi"`.
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(list.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.terms.iter().any(|t| *t == needle)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
