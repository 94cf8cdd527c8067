// Job postings dataset: CSV loading, cleaning and title selection.
//
// The expected file is a Glassdoor-style export with at least the
// "Job Title" and "Job Description" columns. Everything else is ignored.

pub mod titles;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Deserialize;
use tracing::info;

pub use titles::TitleCount;

pub const TITLE_COLUMN: &str = "Job Title";
pub const DESCRIPTION_COLUMN: &str = "Job Description";

/// A single cleaned job posting.
///
/// The title is cleaned and trimmed. The description is kept exactly as it
/// appeared in the file and is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
}

/// Raw CSV row. Empty cells come through as `None`.
#[derive(Debug, Deserialize)]
struct RawPosting {
    #[serde(rename = "Job Title")]
    title: Option<String>,
    #[serde(rename = "Job Description")]
    description: Option<String>,
}

/// All usable postings from one CSV file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub postings: Vec<JobPosting>,
    /// Rows dropped for a missing title or description
    pub skipped: usize,
}

impl Dataset {
    /// Load and clean a dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Dataset file not found: {}", path.display());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open dataset {}", path.display()))?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;

        info!(
            path = %path.display(),
            postings = dataset.postings.len(),
            skipped = dataset.skipped,
            "Loaded job postings"
        );

        Ok(dataset)
    }

    /// Parse a dataset from any CSV source (file, in-memory buffer, ...).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        // serde treats a missing column as None for Option fields, so an
        // absent column would silently skip every row. Check up front.
        let headers = rdr.headers().context("Failed to read CSV header row")?;
        for required in [TITLE_COLUMN, DESCRIPTION_COLUMN] {
            if !headers.iter().any(|h| h == required) {
                anyhow::bail!("Dataset is missing required column '{required}'");
            }
        }

        let parens = parenthetical_pattern()?;
        let mut dataset = Dataset::default();

        for (i, row) in rdr.deserialize::<RawPosting>().enumerate() {
            // +2: one for the header row, one for 1-based numbering
            let row = row.with_context(|| format!("Malformed CSV row {}", i + 2))?;

            let title = row.title.as_deref().map(|t| clean_title_with(&parens, t));
            // Blank descriptions count as missing, but kept text is not trimmed
            let description = row.description.filter(|d| !d.trim().is_empty());

            match (title, description) {
                (Some(title), Some(description)) if !title.is_empty() => {
                    dataset.postings.push(JobPosting { title, description });
                }
                _ => dataset.skipped += 1,
            }
        }

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Descriptions of every posting whose cleaned title equals `title`,
    /// in dataset order.
    pub fn descriptions_for(&self, title: &str) -> Vec<&str> {
        self.postings
            .iter()
            .filter(|p| p.title == title)
            .map(|p| p.description.as_str())
            .collect()
    }

    /// The most common titles, see [`titles::top_titles`].
    pub fn top_titles(&self, limit: usize) -> Vec<TitleCount> {
        titles::top_titles(&self.postings, limit)
    }
}

/// Strip parenthesized segments from a job title and trim it.
///
/// "Data Analyst (Remote)" becomes "Data Analyst", so postings that only
/// differ by a location or seniority note group under one title.
pub fn clean_title(title: &str) -> Result<String> {
    Ok(clean_title_with(&parenthetical_pattern()?, title))
}

fn clean_title_with(parens: &Regex, title: &str) -> String {
    parens.replace_all(title, "").trim().to_string()
}

fn parenthetical_pattern() -> Result<Regex> {
    Regex::new(r"\(.*?\)").context("Failed to compile title cleaning pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("Data Analyst (Remote)").unwrap(), "Data Analyst");
        assert_eq!(
            clean_title("Sr. Analyst (NYC) (Contract)").unwrap(),
            "Sr. Analyst"
        );
        assert_eq!(clean_title("  Data Analyst  ").unwrap(), "Data Analyst");
        assert_eq!(clean_title("(Remote)").unwrap(), "");
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "Job Title,Salary\nData Analyst,100\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Job Description"));
    }

    #[test]
    fn test_skips_incomplete_rows() {
        let csv = "\
Job Title,Job Description,Rating
Data Analyst,Python and SQL,4.1
,Orphan description,3.0
Data Analyst (Remote),,3.5
(Contract),Has a description,2.0
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped, 3);
        assert_eq!(dataset.postings[0].title, "Data Analyst");
    }

    #[test]
    fn test_description_whitespace_preserved() {
        let csv = "Job Title,Job Description\nData Analyst,\"  SQL and R \"\nBI Analyst,\"   \"\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped, 1);
        assert_eq!(dataset.postings[0].description, "  SQL and R ");
    }
}
