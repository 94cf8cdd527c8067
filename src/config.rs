use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::Vocabulary;

pub const DEFAULT_DATA_PATH: &str = "./DataAnalyst.csv";
pub const DEFAULT_REPORT_PATH: &str = "output/skillscan-report.md";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the job postings CSV
    pub data_path: PathBuf,
    /// Skills to search for (SKILLSCAN_SKILLS overrides the built-in list)
    pub vocabulary: Vocabulary,
    /// How many titles the picker offers
    pub top_titles: usize,
    /// How many skills the bar chart shows
    pub chart_limit: usize,
    /// Where `analyze --report` writes by default
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A malformed vocabulary or number fails here, before any data is read.
    pub fn load() -> Result<Self> {
        let vocabulary = match env::var("SKILLSCAN_SKILLS") {
            Ok(list) if !list.trim().is_empty() => {
                Vocabulary::parse_list(&list).context("Invalid SKILLSCAN_SKILLS")?
            }
            _ => Vocabulary::default(),
        };

        Ok(Self {
            data_path: env::var("SKILLSCAN_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            vocabulary,
            top_titles: usize_var("SKILLSCAN_TOP_TITLES", 30)?,
            chart_limit: usize_var("SKILLSCAN_CHART_LIMIT", 10)?,
            report_path: env::var("SKILLSCAN_REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH)),
        })
    }
}

fn usize_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
