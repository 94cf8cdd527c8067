// Composition tests: verifying that the modules chain together correctly.
//
// These tests exercise the data flow:
//   CSV -> Dataset -> analyze pipeline -> SkillReport -> word cloud -> report
// without a terminal (except report generation which writes to /tmp).

use skillscan::dataset::Dataset;
use skillscan::output::cloud::{WordCloud, DEFAULT_MAX_WORDS};
use skillscan::output::markdown::{generate_report, render_report};
use skillscan::pipeline::analyze;
use skillscan::skills::{SkillCounter, Vocabulary};

const CSV: &str = r#"Job Title,Job Description
Data Analyst,"Looking for Python and SQL skills, advanced Excel a plus."
Data Analyst (Contract),"Python, Python everywhere."
Marketing Coordinator,"Plan campaigns, write copy and manage events."
Office Manager,"the and of"
"#;

fn setup() -> (Dataset, SkillCounter) {
    let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
    let counter = SkillCounter::new(&Vocabulary::new(["python", "sql", "excel"]).unwrap()).unwrap();
    (dataset, counter)
}

// ============================================================
// Chain: Dataset -> analyze -> SkillReport
// ============================================================

#[test]
fn analyst_postings_rank_python_first() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Data Analyst", &counter).unwrap();

    assert_eq!(analysis.posting_count, 2);
    assert_eq!(analysis.report.counts[0].skill, "python");
    assert_eq!(analysis.report.get("python"), Some(3));
    assert_eq!(analysis.report.get("sql"), Some(1));
    assert_eq!(analysis.report.get("excel"), Some(1));
}

#[test]
fn title_with_no_skills_is_empty_not_error() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Marketing Coordinator", &counter).unwrap();
    assert!(analysis.report.is_empty());
    assert!(!analysis.report.corpus_text.is_empty());
}

#[test]
fn corpus_keeps_description_whitespace() {
    let csv = "Job Title,Job Description\nData Analyst,\" Python \"\nData Analyst,SQL\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    let (_, counter) = setup();
    let analysis = analyze::run(&dataset, "Data Analyst", &counter).unwrap();

    assert_eq!(analysis.report.corpus_text, " python  sql");
    assert_eq!(analysis.report.total_matches(), 2);
}

#[test]
fn analysis_serializes_without_corpus() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Data Analyst", &counter).unwrap();
    let json: serde_json::Value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["title"], "Data Analyst");
    assert_eq!(json["posting_count"], 2);
    assert_eq!(json["report"]["counts"][0]["skill"], "python");
    assert_eq!(json["report"]["counts"][0]["count"], 3);
    assert!(json["report"].get("corpus_text").is_none());
}

// ============================================================
// Chain: SkillReport -> word cloud
// ============================================================

#[test]
fn cloud_built_from_corpus_text() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Data Analyst", &counter).unwrap();
    let cloud = WordCloud::generate(&analysis.report.corpus_text, DEFAULT_MAX_WORDS).unwrap();

    assert_eq!(cloud.words[0].word, "python");
    assert_eq!(cloud.words[0].frequency, 3);
}

#[test]
fn stop_word_only_corpus_degrades_to_error() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Office Manager", &counter).unwrap();
    assert!(WordCloud::generate(&analysis.report.corpus_text, DEFAULT_MAX_WORDS).is_err());
}

// ============================================================
// Chain: Analysis -> markdown report
// ============================================================

#[test]
fn report_contains_skill_table() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Data Analyst", &counter).unwrap();
    let cloud = WordCloud::generate(&analysis.report.corpus_text, DEFAULT_MAX_WORDS).unwrap();

    let tmp_path = "/tmp/skillscan_test_report/analyst.md";
    let written = generate_report(&analysis, Some(&cloud), tmp_path).unwrap();
    assert_eq!(written, tmp_path);

    let content = std::fs::read_to_string(tmp_path).unwrap();
    assert!(content.contains("# Skill Report: Data Analyst"));
    assert!(content.contains("from 2 job postings"));
    assert!(content.contains("| 1 | python | 3 | 60.0% |"));
    assert!(content.contains("| | **Total** | **5** | |"));
    assert!(content.contains("## Most Frequent Words"));
    assert!(content.contains("python (3)"));

    let _ = std::fs::remove_dir_all("/tmp/skillscan_test_report");
}

#[test]
fn report_without_skills_or_cloud() {
    let (dataset, counter) = setup();
    let analysis = analyze::run(&dataset, "Marketing Coordinator", &counter).unwrap();
    let content = render_report(&analysis, None);

    assert!(content.contains("No skills from the keyword list were found"));
    assert!(!content.contains("| Rank |"));
    assert!(!content.contains("## Most Frequent Words"));
}
