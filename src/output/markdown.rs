// Markdown report for one title analysis.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::cloud::WordCloud;
use crate::pipeline::analyze::Analysis;

/// How many cloud words the report lists.
const REPORT_CLOUD_WORDS: usize = 25;

/// Write a markdown report for `analysis` to `path`, creating parent
/// directories as needed. Returns the path that was written.
pub fn generate_report(
    analysis: &Analysis,
    cloud: Option<&WordCloud>,
    path: impl AsRef<Path>,
) -> Result<String> {
    let path = path.as_ref();
    let content = render_report(analysis, cloud);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path.display().to_string())
}

/// Render the report body without touching the filesystem.
pub fn render_report(analysis: &Analysis, cloud: Option<&WordCloud>) -> String {
    let report = &analysis.report;
    let mut md = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(md, "# Skill Report: {}", analysis.title);
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "Generated {} from {} job postings.",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
        analysis.posting_count
    );
    let _ = writeln!(md);

    let _ = writeln!(md, "## Skills");
    let _ = writeln!(md);
    if report.is_empty() {
        let _ = writeln!(
            md,
            "No skills from the keyword list were found in the job descriptions."
        );
    } else {
        let _ = writeln!(md, "| Rank | Skill | Count | Share |");
        let _ = writeln!(md, "|------|-------|-------|-------|");
        for (i, sc) in report.counts.iter().enumerate() {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {:.1}% |",
                i + 1,
                sc.skill,
                sc.count,
                report.share(sc.count)
            );
        }
        let _ = writeln!(md, "| | **Total** | **{}** | |", report.total_matches());
    }

    if let Some(cloud) = cloud.filter(|c| !c.is_empty()) {
        let _ = writeln!(md);
        let _ = writeln!(md, "## Most Frequent Words");
        let _ = writeln!(md);
        let words: Vec<String> = cloud
            .words
            .iter()
            .take(REPORT_CLOUD_WORDS)
            .map(|w| format!("{} ({})", w.word, w.frequency))
            .collect();
        let _ = writeln!(md, "{}", words.join(", "));
    }

    md
}
