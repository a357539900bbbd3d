use super::*;

#[test]
fn empty_text_yields_no_matches() {
    assert!(ContextExtractor::default().extract("").is_empty());
}

#[test]
fn text_without_terms_yields_no_matches() {
    let text = "The steamer arrived from Panama with a cargo of sugar.";
    assert!(ContextExtractor::default().extract(text).is_empty());
}

#[test]
fn coolie_window_bounds() {
    let prefix = "x".repeat(200);
    let suffix = "y".repeat(300);
    let text = format!("{prefix}coolie{suffix}");
    let p = prefix.len();

    let matches = extract_contexts(&text, 150);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.term, "coolie");
    assert_eq!(m.offset, p);

    let start = p.saturating_sub(150);
    let end = (p + "coolie".len() + 150).min(text.len());
    assert_eq!(m.context, &text[start..end]);
}

#[test]
fn window_clamps_at_text_edges() {
    let text = "coolie labor";
    let matches = extract_contexts(text, 150);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].context, text);
    assert_eq!(matches[0].preceding, "");
    assert_eq!(matches[0].following, " labor");
}

#[test]
fn preceding_and_following_are_fifty_chars() {
    let text = format!("{}Chinaman{}", "a".repeat(80), "b".repeat(80));
    let m = &extract_contexts(&text, 150)[0];
    assert_eq!(m.preceding, "a".repeat(50));
    assert_eq!(m.following, "b".repeat(50));
    assert_eq!(m.context, text);
}

#[test]
fn matching_is_case_insensitive_and_keeps_source_casing() {
    let matches = ContextExtractor::default().extract("The CELESTIAL Empire");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term, "CELESTIAL");
}

#[test]
fn overlapping_terms_match_independently() {
    let matches = ContextExtractor::default().extract("the heathen Chinese");
    let terms: Vec<&str> = matches.iter().map(|m| m.term.as_str()).collect();
    assert_eq!(terms, vec!["Chinese", "heathen Chinese"]);
}

#[test]
fn order_is_term_list_then_position() {
    let text = "A Mongolian, a coolie, another coolie, and a Chinese cook.";
    let matches = ContextExtractor::default().extract(text);
    let terms: Vec<&str> = matches.iter().map(|m| m.term.as_str()).collect();
    assert_eq!(terms, vec!["coolie", "coolie", "Chinese", "Mongolian"]);
    assert!(matches[0].offset < matches[1].offset);
}

#[test]
fn plural_forms_match_the_stem() {
    let matches = ContextExtractor::default().extract("Coolies arrived");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term, "Coolie");
    assert_eq!(matches[0].following, "s arrived");
}

#[test]
fn windows_never_split_multibyte_characters() {
    let text = format!("{}coolie{}", "é".repeat(10), "ü".repeat(10));
    let m = &extract_contexts(&text, 3)[0];
    assert_eq!(m.context, "ééécoolieüüü");
    assert_eq!(m.preceding, "é".repeat(10));
}

#[test]
fn zero_window_returns_term_only() {
    let m = &extract_contexts("yellow peril ahead", 0)[0];
    assert_eq!(m.term, "yellow peril");
    assert_eq!(m.context, "yellow peril");
}

#[test]
fn window_accessor_reports_configured_size() {
    assert_eq!(ContextExtractor::default().window(), DEFAULT_WINDOW);
    assert_eq!(ContextExtractor::new(42).window(), 42);
}
