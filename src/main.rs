use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use time::{OffsetDateTime, UtcOffset};
use topictag::{
    Difficulty, ParseDifficultyError, ParsePlatformError, ParseTimeRangeError, Platform, Question,
    QuestionFilter, Submission, TagNormalizer, TimeRange, TopicTag, UserActivity,
    default_bank_path, distinct_topics, filter_questions, progress_report, recent_activity,
    top_topics,
};

/// topictag - canonical topic tags for practice-question catalogs
#[derive(Parser)]
#[command(name = "topictag")]
#[command(about = "Normalize topic phrases and query a question bank by canonical tags")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Normalize topic phrases to canonical tags
    Normalize(NormalizeCommand),
    /// Suggest canonical tags for a partial phrase
    Suggest(SuggestCommand),
    /// Check whether a value is a canonical tag
    Check(CheckCommand),
    /// List canonical tags, or the tags present in a question bank
    Tags(TagsCommand),
    /// Filter a question bank by topics, platform, and difficulty
    Filter(FilterCommand),
    /// Summarize submission progress over a time window
    Progress(ProgressCommand),
    /// Show the most recent submissions
    Activity(ActivityCommand),
}

/// Normalize one or more topic phrases
#[derive(Parser)]
struct NormalizeCommand {
    /// Topic phrases to normalize
    #[arg(value_name = "PHRASE", required = true)]
    phrases: Vec<String>,

    /// Print the tags as a JSON array
    #[arg(long)]
    json: bool,
}

/// Suggest canonical tags matching a partial phrase
#[derive(Parser)]
struct SuggestCommand {
    /// The partial phrase to complete
    #[arg(value_name = "PHRASE")]
    phrase: String,

    /// Print the suggestions as a JSON array
    #[arg(long)]
    json: bool,
}

/// Check a value against the canonical vocabulary
#[derive(Parser)]
struct CheckCommand {
    /// The value to check
    #[arg(value_name = "TAG")]
    tag: String,
}

/// List topic tags
#[derive(Parser)]
struct TagsCommand {
    /// Question bank to list tags from; omits the canonical vocabulary
    #[arg(long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Print the tags as a JSON array
    #[arg(long)]
    json: bool,
}

/// Filter the question bank
#[derive(Parser)]
struct FilterCommand {
    /// Comma-separated topic phrases to filter by
    #[arg(short, long, value_name = "TOPICS")]
    topics: Option<String>,

    /// Only questions hosted on this platform
    #[arg(short, long, value_name = "PLATFORM")]
    platform: Option<String>,

    /// Comma-separated difficulty grades to keep
    #[arg(short, long, value_name = "DIFFICULTIES")]
    difficulty: Option<String>,

    /// Only the question with this slug
    #[arg(long, value_name = "SLUG")]
    slug: Option<String>,

    /// Only the question whose slug matches this URL's trailing segment
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Drop questions already solved (needs --submissions)
    #[arg(long)]
    unsolved_only: bool,

    /// Maximum number of results (clamped to 1..=100)
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Question bank file; defaults to the data directory
    #[arg(long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Submissions file used to mark solved questions
    #[arg(long, value_name = "FILE")]
    submissions: Option<PathBuf>,

    /// Print the matches as JSON
    #[arg(long)]
    json: bool,
}

/// Summarize submission progress
#[derive(Parser)]
struct ProgressCommand {
    /// Submissions file to summarize
    #[arg(long, value_name = "FILE")]
    submissions: PathBuf,

    /// Question bank file; defaults to the data directory
    #[arg(long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Time window: week, month, or all
    #[arg(long, value_name = "RANGE", default_value = "all")]
    range: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Show recent submissions with question details
#[derive(Parser)]
struct ActivityCommand {
    /// Submissions file to read
    #[arg(long, value_name = "FILE")]
    submissions: PathBuf,

    /// Question bank file; defaults to the data directory
    #[arg(long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Maximum number of entries
    #[arg(short, long, value_name = "N", default_value_t = 20)]
    limit: usize,

    /// Print the entries as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Normalize(cmd) => handle_normalize(cmd),
        Commands::Suggest(cmd) => handle_suggest(cmd),
        Commands::Check(cmd) => handle_check(cmd),
        Commands::Tags(cmd) => handle_tags(cmd),
        Commands::Filter(cmd) => handle_filter(cmd),
        Commands::Progress(cmd) => handle_progress(cmd),
        Commands::Activity(cmd) => handle_activity(cmd),
    };

    if let Err(e) = result {
        // Determine exit code based on error type
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e}");
        std::process::exit(exit_code);
    }
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors are bad argument values, like an unknown difficulty or
/// platform name. Internal errors include I/O failures and malformed files.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<ParseDifficultyError>().is_some()
        || error.downcast_ref::<ParsePlatformError>().is_some()
        || error.downcast_ref::<ParseTimeRangeError>().is_some()
}

/// Handles the normalize command by mapping phrases to a sorted tag set.
fn handle_normalize(cmd: &NormalizeCommand) -> Result<()> {
    let mut tags: Vec<TopicTag> = TagNormalizer::normalize_topics(&cmd.phrases)
        .into_iter()
        .collect();
    tags.sort();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }
    for tag in &tags {
        println!("{tag}");
    }
    Ok(())
}

/// Handles the suggest command, preserving vocabulary order.
fn handle_suggest(cmd: &SuggestCommand) -> Result<()> {
    let suggestions = TagNormalizer::suggest_topics(&cmd.phrase);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }
    for tag in &suggestions {
        println!("{tag}");
    }
    Ok(())
}

/// Handles the check command against the canonical vocabulary.
fn handle_check(cmd: &CheckCommand) -> Result<()> {
    if TagNormalizer::is_recognized(&cmd.tag) {
        println!("'{}' is a canonical tag", cmd.tag);
    } else {
        println!("'{}' is not a canonical tag", cmd.tag);
    }
    Ok(())
}

/// Handles the tags command.
///
/// Without a bank file this lists the canonical vocabulary in definition
/// order; with one it lists the distinct tags stored in the bank.
fn handle_tags(cmd: &TagsCommand) -> Result<()> {
    let tags: Vec<TopicTag> = match &cmd.bank {
        Some(path) => distinct_topics(&load_bank(path)?),
        None => TagNormalizer::canonical_topics()
            .iter()
            .map(|tag| TopicTag::new(*tag))
            .collect(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }
    for tag in &tags {
        println!("{tag}");
    }
    Ok(())
}

/// Handles the filter command.
///
/// Argument values are validated before any file is touched so that a typo
/// in a difficulty name fails fast.
fn handle_filter(cmd: &FilterCommand) -> Result<()> {
    let mut filter = QuestionFilter::new();
    if let Some(topics) = &cmd.topics {
        filter = filter.topics(parse_topics(topics));
    }
    if let Some(platform) = &cmd.platform {
        filter = filter.platform(platform.parse::<Platform>()?);
    }
    if let Some(difficulties) = &cmd.difficulty {
        for difficulty in parse_difficulties(difficulties)? {
            filter = filter.difficulty(difficulty);
        }
    }
    if let Some(slug) = &cmd.slug {
        filter = filter.slug(slug.as_str());
    }
    if let Some(url) = &cmd.url {
        filter = filter.url(url.as_str());
    }
    if cmd.unsolved_only {
        filter = filter.unsolved_only(true);
    }
    if let Some(limit) = cmd.limit {
        filter = filter.limit(limit);
    }

    let bank = load_bank(&resolve_bank_path(cmd.bank.as_ref())?)?;
    let activity = match &cmd.submissions {
        Some(path) => UserActivity::from_submissions(&load_submissions(path)?),
        None => UserActivity::new(),
    };

    let matches = filter_questions(&bank, &activity, &filter);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    for item in &matches {
        let mut line = format!(
            "{} [{}] {}",
            item.question.slug,
            item.question.difficulty,
            item.title()
        );
        if item.is_solved {
            line.push_str(" (solved)");
        }
        println!("{line}");
    }
    Ok(())
}

/// Handles the progress command.
fn handle_progress(cmd: &ProgressCommand) -> Result<()> {
    let range = cmd.range.parse::<TimeRange>()?;
    let submissions = load_submissions(&cmd.submissions)?;
    let bank = load_bank(&resolve_bank_path(cmd.bank.as_ref())?)?;
    let now = OffsetDateTime::now_utc();

    let report = progress_report(&submissions, &bank, range, now);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Time range: {}", report.time_range);
    println!("Total solved: {}", report.total_solved);
    println!("Current streak: {} day(s)", report.current_streak);
    println!();
    for slice in &report.difficulty_breakdown {
        println!(
            "{}: {}/{} solved ({}%)",
            slice.difficulty, slice.solved, slice.attempted, slice.success_rate
        );
    }

    let topics = preferred_topics(&submissions, &bank, range, now);
    if !topics.is_empty() {
        let names: Vec<&str> = topics.iter().map(TopicTag::as_str).collect();
        println!();
        println!("Top topics: {}", names.join(", "));
    }
    Ok(())
}

/// Handles the activity command.
fn handle_activity(cmd: &ActivityCommand) -> Result<()> {
    let submissions = load_submissions(&cmd.submissions)?;
    let bank = load_bank(&resolve_bank_path(cmd.bank.as_ref())?)?;
    let entries = recent_activity(&submissions, &bank, cmd.limit);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {} [{}]  {}",
            entry.timestamp.to_offset(UtcOffset::UTC).date(),
            entry.title,
            entry.difficulty,
            entry.description
        );
    }
    Ok(())
}

/// The tags of the questions the user attempted most recently in the window.
fn preferred_topics(
    submissions: &[Submission],
    bank: &[Question],
    range: TimeRange,
    now: OffsetDateTime,
) -> Vec<TopicTag> {
    let since = range.since(now);
    let mut ordered: Vec<&Submission> = submissions
        .iter()
        .filter(|s| since.is_none_or(|cutoff| s.created_at >= cutoff))
        .collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut seen = HashSet::new();
    let attempted: Vec<Question> = ordered
        .iter()
        .filter(|s| seen.insert(s.question_id.clone()))
        .filter_map(|s| bank.iter().find(|q| q.id == s.question_id))
        .cloned()
        .collect();

    top_topics(&attempted, 3)
}

/// Resolves the question bank path.
///
/// Uses the explicit `--bank` path when given, otherwise
/// `{data_dir}/topictag/bank.json` where `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
fn resolve_bank_path(bank: Option<&PathBuf>) -> Result<PathBuf> {
    match bank {
        Some(path) => Ok(path.clone()),
        None => default_bank_path(),
    }
}

/// Loads a question bank from a JSON file.
fn load_bank(path: &Path) -> Result<Vec<Question>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read question bank: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse question bank: {}", path.display()))
}

/// Loads a user's submissions from a JSON file.
fn load_submissions(path: &Path) -> Result<Vec<Submission>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read submissions: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse submissions: {}", path.display()))
}

/// Parses comma-separated topic phrases from a string.
///
/// Splits on commas, trims whitespace from each phrase, and filters out
/// empty strings.
fn parse_topics(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a comma-separated difficulty list.
fn parse_difficulties(input: &str) -> Result<Vec<Difficulty>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Difficulty>().map_err(anyhow::Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_topics_with_normal_input() {
        let result = parse_topics("arrays,two pointers");
        assert_eq!(result, vec!["arrays", "two pointers"]);
    }

    #[test]
    fn parse_topics_with_whitespace() {
        let result = parse_topics(" arrays , two pointers ");
        assert_eq!(result, vec!["arrays", "two pointers"]);
    }

    #[test]
    fn parse_topics_with_empty_elements() {
        let result = parse_topics("arrays,,two pointers");
        assert_eq!(result, vec!["arrays", "two pointers"]);
    }

    #[test]
    fn parse_topics_with_trailing_comma() {
        let result = parse_topics("arrays,two pointers,");
        assert_eq!(result, vec!["arrays", "two pointers"]);
    }

    #[test]
    fn parse_topics_empty_string() {
        let result = parse_topics("");
        assert!(result.is_empty());
    }

    #[test]
    fn parse_topics_only_whitespace() {
        let result = parse_topics("  ,  ,  ");
        assert!(result.is_empty());
    }

    #[test]
    fn parse_difficulties_accepts_mixed_case() {
        let result = parse_difficulties("easy, HARD").unwrap();
        assert_eq!(result, vec![Difficulty::Easy, Difficulty::Hard]);
    }

    #[test]
    fn parse_difficulties_rejects_unknown_grades() {
        let err = parse_difficulties("easy,impossible").unwrap_err();
        assert!(err.downcast_ref::<ParseDifficultyError>().is_some());
    }

    #[test]
    fn bad_difficulty_is_a_user_error() {
        let err = parse_difficulties("impossible").unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn bad_platform_is_a_user_error() {
        let cmd = FilterCommand {
            topics: None,
            platform: Some("atcoder".to_string()),
            difficulty: None,
            slug: None,
            url: None,
            unsolved_only: false,
            limit: None,
            bank: None,
            submissions: None,
            json: false,
        };
        let err = handle_filter(&cmd).unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn io_failures_are_internal_errors() {
        let err = anyhow::anyhow!("Failed to read question bank: /nonexistent/bank.json");
        assert!(!is_user_error(&err));
    }
}
