use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use skillscan::config::Config;
use skillscan::dataset::{titles, Dataset};
use skillscan::output::cloud::{WordCloud, DEFAULT_MAX_WORDS};
use skillscan::output::{markdown, terminal};
use skillscan::pipeline::analyze;
use skillscan::skills::SkillCounter;

/// Cloud words shown in the terminal.
const CLOUD_DISPLAY_WORDS: usize = 60;

/// skillscan: find the most in-demand skills for a job title.
///
/// Loads a CSV of job postings, filters it to one job title and counts
/// which skills from a keyword list the descriptions mention.
#[derive(Parser)]
#[command(name = "skillscan", version, about)]
struct Cli {
    /// Job postings CSV (overrides SKILLSCAN_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the most common job titles in the dataset
    Titles {
        /// How many titles to show (default: SKILLSCAN_TOP_TITLES or 30)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the skill keywords being searched for
    Skills,

    /// Analyze the skills mentioned for one job title
    Analyze {
        /// The job title, exactly as listed by `skillscan titles`
        title: String,

        /// Skills to show in the bar chart (default: SKILLSCAN_CHART_LIMIT or 10)
        #[arg(long)]
        top: Option<usize>,

        /// Print the result as JSON instead of charts
        #[arg(long)]
        json: bool,

        /// Also write a markdown report, to PATH or SKILLSCAN_REPORT_PATH.
        /// Put the title first when passing this without a path.
        #[arg(long, value_name = "PATH", num_args = 0..=1, conflicts_with = "json")]
        report: Option<Option<PathBuf>>,

        /// Skip the word cloud
        #[arg(long)]
        no_cloud: bool,
    },

    /// Pick titles from a list and analyze them one after another
    Interactive,
}

/// Display options shared by `analyze` and `interactive`.
struct DisplayOptions {
    chart_limit: usize,
    cloud: bool,
    report_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skillscan=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    match cli.command {
        Commands::Titles { limit } => {
            let dataset = Dataset::load(&config.data_path)?;
            let top = dataset.top_titles(limit.unwrap_or(config.top_titles));
            terminal::display_titles(&top);
        }

        Commands::Skills => {
            terminal::display_vocabulary(&config.vocabulary);
        }

        Commands::Analyze {
            title,
            top,
            json,
            report,
            no_cloud,
        } => {
            let counter = SkillCounter::new(&config.vocabulary)?;
            let dataset = Dataset::load(&config.data_path)?;

            if json {
                let analysis = analyze::run(&dataset, &title, &counter)?;
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }

            let options = DisplayOptions {
                chart_limit: top.unwrap_or(config.chart_limit),
                cloud: !no_cloud,
                report_path: report.map(|path| path.unwrap_or_else(|| config.report_path.clone())),
            };
            analyze_and_display(&dataset, &title, &counter, &options)?;
        }

        Commands::Interactive => {
            let counter = SkillCounter::new(&config.vocabulary)?;
            // Loaded once and reused for every pick in this session
            let dataset = Dataset::load(&config.data_path)?;
            let top = dataset.top_titles(config.top_titles);

            if top.is_empty() {
                println!("No usable job postings in {}.", config.data_path.display());
                return Ok(());
            }

            let options = DisplayOptions {
                chart_limit: config.chart_limit,
                cloud: true,
                report_path: None,
            };

            let stdin = io::stdin();
            loop {
                terminal::display_titles(&top);
                print!("Select a job title (number or name, empty to quit): ");
                io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                let choice = line.trim();
                if choice.is_empty() || choice.eq_ignore_ascii_case("q") {
                    break;
                }

                let title = titles::resolve_choice(choice, &top);
                if let Err(e) = analyze_and_display(&dataset, &title, &counter, &options) {
                    println!("  {} {e}", "Error:".red());
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Analyze one title and render the chart, table and word cloud.
///
/// A word cloud that can't be built is reported as a warning; only the
/// analysis itself or a failed report write is an error.
fn analyze_and_display(
    dataset: &Dataset,
    title: &str,
    counter: &SkillCounter,
    options: &DisplayOptions,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    spinner.set_message(format!("Analyzing jobs for '{title}'..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = analyze::run(dataset, title, counter);
    spinner.finish_and_clear();
    let analysis = result?;

    terminal::display_summary(&analysis);

    if analysis.report.is_empty() {
        terminal::display_no_skills();
    } else {
        terminal::display_skill_chart(&analysis.report, &analysis.title, options.chart_limit);
        terminal::display_skill_table(&analysis.report);
    }

    let cloud = if options.cloud && !analysis.report.is_empty() {
        match WordCloud::generate(&analysis.report.corpus_text, DEFAULT_MAX_WORDS) {
            Ok(cloud) => {
                cloud.display(CLOUD_DISPLAY_WORDS);
                Some(cloud)
            }
            Err(e) => {
                warn!(error = %e, "Word cloud skipped");
                println!("\n  {} Could not generate word cloud: {e}", "Warning:".yellow());
                None
            }
        }
    } else {
        None
    };

    if let Some(path) = &options.report_path {
        let written = markdown::generate_report(&analysis, cloud.as_ref(), path)?;
        info!(path = %written, "Wrote markdown report");
        println!("\n{}", format!("Markdown report saved to: {written}").bold());
    }

    Ok(())
}
