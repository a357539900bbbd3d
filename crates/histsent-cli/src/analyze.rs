//! Batch sentiment scoring over a scraped newspaper CSV.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use histsent_core::AppConfig;
use histsent_sentiment::{ConsensusEngine, Method, Sentiment};
use serde::{Deserialize, Serialize};

/// Examples kept per polarity for the printed summary.
const EXAMPLES_PER_CLASS: usize = 2;

/// One scraped article. Columns absent from the CSV default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ArticleRecord {
    pub date: String,
    pub newspaper: String,
    pub title: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub keyword_matches: Option<u32>,
    pub content_preview: String,
}

impl ArticleRecord {
    /// Text to classify: the preview, or the title when the preview is blank.
    pub(crate) fn content(&self) -> &str {
        if self.content_preview.trim().is_empty() {
            &self.title
        } else {
            &self.content_preview
        }
    }
}

/// One output row of the `_sentiment.csv` table.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SentimentRow {
    pub date: String,
    pub newspaper: String,
    pub title: String,
    pub keyword_matches: Option<u32>,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub agreement: bool,
    pub contexts_found: usize,
    pub similarity_score: f64,
    pub compound_score: f64,
    pub polarity_score: f64,
    pub example_context: Option<String>,
}

impl SentimentRow {
    const HEADERS: [&'static str; 12] = [
        "date",
        "newspaper",
        "title",
        "keyword_matches",
        "sentiment",
        "sentiment_score",
        "agreement",
        "contexts_found",
        "similarity_score",
        "compound_score",
        "polarity_score",
        "example_context",
    ];
}

/// An article shown in the printed summary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Example {
    pub date: String,
    pub newspaper: String,
    pub context: Option<String>,
    pub score: f64,
}

/// Tallies for one batch run.
#[derive(Debug, Default)]
pub(crate) struct BatchSummary {
    pub rows_read: usize,
    pub analyzed: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Content not longer than the configured minimum.
    pub skipped_short: usize,
    /// Rows the CSV reader could not decode.
    pub malformed: usize,
    pub positive_examples: Vec<Example>,
    pub negative_examples: Vec<Example>,
}

/// Batch knobs taken from [`AppConfig`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct BatchOptions {
    pub min_content_chars: usize,
    pub progress_every: usize,
}

impl From<&AppConfig> for BatchOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            min_content_chars: config.min_content_chars,
            progress_every: config.progress_every.max(1),
        }
    }
}

/// `articles.csv` -> `articles_sentiment.csv` in the same directory.
pub(crate) fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "articles".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_sentiment.csv"))
}

/// Score every record from `input` and write the result table to `output`.
///
/// Records are classified in order. Rows that fail to decode are logged and
/// counted but do not abort the run.
///
/// # Errors
///
/// Returns an error if the CSV header cannot be read or the output cannot be written.
pub(crate) fn analyze_csv<R: Read, W: Write>(
    engine: &ConsensusEngine,
    options: BatchOptions,
    input: R,
    output: W,
) -> anyhow::Result<BatchSummary> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer
        .write_record(SentimentRow::HEADERS)
        .context("failed to write CSV header")?;

    // Surface a broken header up front rather than once per row.
    reader.headers().context("failed to read CSV header")?;

    let mut summary = BatchSummary::default();

    for (idx, record) in reader.deserialize::<ArticleRecord>().enumerate() {
        summary.rows_read += 1;
        let row_number = idx + 1;

        match record {
            Ok(record) => {
                let content = record.content();
                if content.chars().count() > options.min_content_chars {
                    let row = score_record(engine, &record);
                    tally(&mut summary, &row);
                    writer
                        .serialize(&row)
                        .with_context(|| format!("failed to write row {row_number}"))?;
                } else {
                    summary.skipped_short += 1;
                    tracing::debug!(row = row_number, "content too short; skipping");
                }
            }
            Err(e) => {
                summary.malformed += 1;
                tracing::warn!(row = row_number, error = %e, "skipping malformed CSV row");
            }
        }

        if row_number % options.progress_every == 0 {
            tracing::info!(processed = row_number, "processed articles");
        }
    }

    writer.flush().context("failed to flush output")?;
    Ok(summary)
}

fn score_record(engine: &ConsensusEngine, record: &ArticleRecord) -> SentimentRow {
    let result = engine.classify(record.content());
    SentimentRow {
        date: record.date.clone(),
        newspaper: record.newspaper.clone(),
        title: record.title.clone(),
        keyword_matches: record.keyword_matches,
        sentiment: result.sentiment,
        sentiment_score: result.score,
        agreement: result.agreement,
        contexts_found: result.contexts_found(),
        similarity_score: result.method_score(Method::Similarity),
        compound_score: result.method_score(Method::Compound),
        polarity_score: result.method_score(Method::Polarity),
        example_context: result.first_context().map(str::to_string),
    }
}

fn tally(summary: &mut BatchSummary, row: &SentimentRow) {
    summary.analyzed += 1;
    let example = || Example {
        date: row.date.clone(),
        newspaper: row.newspaper.clone(),
        context: row.example_context.clone(),
        score: row.sentiment_score,
    };
    match row.sentiment {
        Sentiment::Positive => {
            summary.positive += 1;
            if summary.positive_examples.len() < EXAMPLES_PER_CLASS {
                summary.positive_examples.push(example());
            }
        }
        Sentiment::Negative => {
            summary.negative += 1;
            if summary.negative_examples.len() < EXAMPLES_PER_CLASS {
                summary.negative_examples.push(example());
            }
        }
        Sentiment::Neutral => summary.neutral += 1,
    }
}

/// Render the end-of-run summary printed by `histsent analyze`.
pub(crate) fn render_summary(summary: &BatchSummary, output: &Path) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "\nSENTIMENT ANALYSIS SUMMARY");
    let _ = writeln!(out, "Total articles analyzed: {}", summary.analyzed);
    let _ = writeln!(out, "Positive: {}", summary.positive);
    let _ = writeln!(out, "Negative: {}", summary.negative);
    let _ = writeln!(out, "Neutral: {}", summary.neutral);
    if summary.skipped_short > 0 || summary.malformed > 0 {
        let _ = writeln!(
            out,
            "Skipped: {} too short, {} malformed",
            summary.skipped_short, summary.malformed
        );
    }
    let _ = writeln!(out, "Results saved to: {}", output.display());

    for (heading, examples) in [
        ("POSITIVE EXAMPLES", &summary.positive_examples),
        ("NEGATIVE EXAMPLES", &summary.negative_examples),
    ] {
        if examples.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{heading}:");
        for example in examples {
            let _ = writeln!(out, "   {} - {}", example.date, example.newspaper);
            if let Some(context) = &example.context {
                let _ = writeln!(out, "   Context: {context}");
            }
            let _ = writeln!(out, "   Score: {:.3}\n", example.score);
        }
    }
    out
}

/// Run `histsent analyze`.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the output cannot be
/// created, or the CSV cannot be processed.
pub(crate) fn run_analyze(
    engine: &ConsensusEngine,
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);

    let reader = File::open(input)
        .with_context(|| format!("failed to open {}; run the scraper first", input.display()))?;
    let writer = File::create(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    tracing::info!(input = %input.display(), output = %output.display(), "analyzing articles");
    let summary = analyze_csv(engine, BatchOptions::from(config), reader, writer)?;
    tracing::info!(
        rows = summary.rows_read,
        analyzed = summary.analyzed,
        skipped = summary.skipped_short,
        malformed = summary.malformed,
        "batch complete"
    );

    print!("{}", render_summary(&summary, &output));
    Ok(())
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
