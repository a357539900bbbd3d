//! Single-passage classification and the sample-passage demo.

use std::fmt::Write as _;

use histsent_sentiment::{ConsensusEngine, ConsensusResult, Method};

/// Passages used by `histsent demo`, spanning favourable and hostile framing.
pub(crate) const DEMO_PASSAGES: &[&str] = &[
    "The Chinese coolies have proven to be industrious and peaceful workers in our mines",
    "We must restrict coolie labor as it threatens white labor and drives down wages",
    "The heathen Chinese with their filthy habits cannot be Americanized",
    "These quiet and law abiding people have been faithful servants on the railroad",
    "The yellow peril brings vice and gambling dens that cause moral corruption",
];

/// Render a human-readable summary of one verdict.
pub(crate) fn render_result(text: &str, result: &ConsensusResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Text: {text}");
    let _ = writeln!(
        out,
        "Sentiment: {} (Score: {:.3})",
        result.sentiment, result.score
    );
    let _ = writeln!(out, "Methods agree: {}", result.agreement);
    for method in Method::ALL {
        if let Some(m) = result.methods.get(&method) {
            let _ = writeln!(
                out,
                "  {:<11}{:<9} score {:>7.3}  confidence {:.3}",
                method.as_str(),
                m.sentiment.as_str(),
                m.score,
                m.confidence
            );
        }
    }
    if let Some(context) = result.first_context() {
        let _ = writeln!(out, "Context found: {context}");
    }
    out
}

/// Classify `text` and print the verdict.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_classify(engine: &ConsensusEngine, text: &str, json: bool) -> anyhow::Result<()> {
    let result = engine.classify(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(text, &result));
    }
    Ok(())
}

/// Classify every demo passage and print each verdict.
pub(crate) fn run_demo(engine: &ConsensusEngine) {
    println!("Historical sentiment analysis: sample passages");
    println!("==============================================\n");
    for text in DEMO_PASSAGES {
        let result = engine.classify(text);
        print!("{}", render_result(text, &result));
        println!("---\n");
    }
}
