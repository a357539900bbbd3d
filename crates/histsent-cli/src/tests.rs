use super::*;

#[test]
fn parses_classify_command() {
    let cli = Cli::try_parse_from(["histsent", "classify", "the yellow peril"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Classify { ref text, json: false }) if text == "the yellow peril"
    ));
}

#[test]
fn parses_classify_json_flag() {
    let cli = Cli::try_parse_from(["histsent", "classify", "--json", "coolie labor"])
        .expect("expected valid cli args");

    assert!(matches!(cli.command, Some(Commands::Classify { json: true, .. })));
}

#[test]
fn classify_requires_text() {
    assert!(Cli::try_parse_from(["histsent", "classify"]).is_err());
}

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from(["histsent", "analyze", "articles.csv"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Analyze { input, output }) => {
            assert_eq!(input, PathBuf::from("articles.csv"));
            assert!(output.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_analyze_output_override() {
    let cli = Cli::try_parse_from([
        "histsent",
        "analyze",
        "articles.csv",
        "--output",
        "out/scored.csv",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { output: Some(ref p), .. }) if p == &PathBuf::from("out/scored.csv")
    ));
}

#[test]
fn parses_demo_command() {
    let cli = Cli::try_parse_from(["histsent", "demo"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Demo)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["histsent"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
