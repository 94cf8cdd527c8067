// Colored terminal output for title lists, skill charts and tables.
//
// This module handles all terminal-specific formatting: colors, bars,
// column alignment. The main.rs commands delegate here.

use colored::Colorize;

use crate::dataset::TitleCount;
use crate::pipeline::analyze::Analysis;
use crate::skills::{SkillReport, Vocabulary};

const BAR_WIDTH: usize = 30;

/// Display the most common job titles, numbered for the picker.
pub fn display_titles(titles: &[TitleCount]) {
    if titles.is_empty() {
        println!("No job titles found in the dataset.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} Job Titles ===", titles.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<50} {:>8}",
        "#".dimmed(),
        "Title".dimmed(),
        "Postings".dimmed()
    );
    println!("  {}", "-".repeat(64).dimmed());

    for (i, t) in titles.iter().enumerate() {
        println!(
            "  {:>4}. {:<50} {:>8}",
            i + 1,
            super::truncate_chars(&t.title, 47),
            t.postings
        );
    }
    println!();
}

/// Display the configured skill vocabulary.
pub fn display_vocabulary(vocabulary: &Vocabulary) {
    println!(
        "\n{}",
        format!("=== Skill Keywords ({} terms) ===", vocabulary.len()).bold()
    );
    println!("  {}", vocabulary.terms().join(", "));
}

/// Display the header line for an analysis.
pub fn display_summary(analysis: &Analysis) {
    println!(
        "\n{} Analyzed {} job descriptions for '{}'",
        "✓".green(),
        analysis.posting_count,
        analysis.title.bold()
    );
}

/// Warning shown when none of the keywords appeared.
pub fn display_no_skills() {
    println!(
        "\n  {}",
        "No skills from the keyword list were found in the job descriptions.".yellow()
    );
}

/// Display the top `limit` skills as a horizontal bar chart.
///
/// Bars are scaled to the most frequent skill.
pub fn display_skill_chart(report: &SkillReport, title: &str, limit: usize) {
    if report.is_empty() {
        display_no_skills();
        return;
    }

    println!(
        "\n{}",
        format!("=== Top In-Demand Skills for {title} ===").bold()
    );
    println!();

    let top = report.top(limit);
    let max = top.first().map(|s| s.count).unwrap_or(1).max(1);

    for (i, sc) in top.iter().enumerate() {
        let filled = ((sc.count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled.max(1));

        // Color by share of all matches
        let share = report.share(sc.count);
        let colored_bar = if share >= 25.0 {
            bar.bright_green()
        } else if share >= 10.0 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<14} {} {}",
            i + 1,
            sc.skill.bold(),
            colored_bar,
            sc.count
        );
    }
}

/// Display every found skill with its count and share of all matches.
pub fn display_skill_table(report: &SkillReport) {
    if report.is_empty() {
        display_no_skills();
        return;
    }

    println!(
        "\n{}",
        format!("=== All Found Skills ({}) ===", report.counts.len()).bold()
    );
    println!();
    println!(
        "  {:<16} {:>7} {:>8}",
        "Skill".dimmed(),
        "Count".dimmed(),
        "Share".dimmed()
    );
    println!("  {}", "-".repeat(33).dimmed());

    for sc in &report.counts {
        println!(
            "  {:<16} {:>7} {:>7.1}%",
            sc.skill,
            sc.count,
            report.share(sc.count)
        );
    }

    println!("  {}", "-".repeat(33).dimmed());
    println!("  {:<16} {:>7}", "Total".bold(), report.total_matches());
}
