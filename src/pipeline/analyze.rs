// Title analysis pipeline: pick title -> filter postings -> count skills.
//
// This is the one workflow the tool exists for. Given a loaded dataset and a
// job title, it:
// 1. Selects the descriptions of every posting with that title
// 2. Runs the skill counter over them
// 3. Returns the ranked counts plus the corpus text for the word cloud

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::dataset::Dataset;
use crate::skills::{SkillCounter, SkillReport};

/// Result of analyzing one job title.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub title: String,
    /// Postings that matched the title
    pub posting_count: usize,
    pub report: SkillReport,
}

/// Analyze the skills mentioned in every posting titled `title`.
///
/// A blank title or one with no postings is an error, since there is
/// nothing to count. A title whose postings mention no skills is not.
pub fn run(dataset: &Dataset, title: &str, counter: &SkillCounter) -> Result<Analysis> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Please select a job title");
    }

    let descriptions = dataset.descriptions_for(title);
    if descriptions.is_empty() {
        anyhow::bail!("No jobs found for title '{title}'");
    }

    let report = counter.count(&descriptions);

    info!(
        title,
        postings = descriptions.len(),
        skills_found = report.counts.len(),
        total_matches = report.total_matches(),
        "Analyzed job title"
    );

    Ok(Analysis {
        title: title.to_string(),
        posting_count: descriptions.len(),
        report,
    })
}
