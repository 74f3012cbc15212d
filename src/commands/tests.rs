// Command parsing and interactive session tests

use std::io::Cursor;

use super::*;
use crate::settings::Settings;

fn run(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    run_session(session, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn empty_session() -> Session {
    Session::from_settings(&Settings {
        seed_sample: false,
        ..Settings::default()
    })
}

// ---------------------------------------------------------------
// parse_line
// ---------------------------------------------------------------

#[test]
fn blank_line_parses_to_none() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   \t ").unwrap(), None);
}

#[test]
fn parses_add_with_and_without_title() {
    assert_eq!(parse_line("add").unwrap(), Some(SessionCommand::Add { title: vec![] }));
    assert_eq!(
        parse_line("add Why AI -won't- take your job").unwrap(),
        Some(SessionCommand::Add { title: vec!["Why AI -won't- take your job".into()] })
    );
}

#[test]
fn titles_keep_inner_spacing() {
    assert_eq!(
        parse_line("  add Why  AI   wins  ").unwrap(),
        Some(SessionCommand::Add { title: vec!["Why  AI   wins".into()] })
    );
    assert_eq!(
        parse_line("title 7   Top  10\tTips").unwrap(),
        Some(SessionCommand::Title { id: 7, title: vec!["Top  10\tTips".into()] })
    );
}

#[test]
fn help_describes_the_session() {
    let Err(RankerError::Command(msg)) = parse_line("help") else {
        panic!("help should render as a command message");
    };
    assert!(msg.contains("Rank video ideas by weighted factors"));
    assert!(!msg.contains("Wrapper"));
    assert!(msg.contains("add"));
}

#[test]
fn parses_rate_with_factor_key_forms() {
    let expected = Some(SessionCommand::Rate { id: 12, factor: Factor::TrendingTopicScore, value: 9 });
    assert_eq!(parse_line("rate 12 trendingTopicScore 9").unwrap(), expected);
    assert_eq!(parse_line("rate 12 trending_topic_score 9").unwrap(), expected);
}

#[test]
fn parses_negative_values_for_clamping() {
    assert_eq!(
        parse_line("weight brandFit -4").unwrap(),
        Some(SessionCommand::Weight { factor: Factor::BrandFit, value: -4 })
    );
}

#[test]
fn parses_preset_and_aliases() {
    assert_eq!(parse_line("preset brand").unwrap(), Some(SessionCommand::Preset { preset: Preset::BrandFirst }));
    assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
    assert_eq!(parse_line("rm 3").unwrap(), Some(SessionCommand::Remove { id: 3 }));
}

#[test]
fn rejects_unknown_factor_and_non_numeric_values() {
    assert!(matches!(parse_line("rate 1 vibes 5"), Err(RankerError::Command(_))));
    assert!(matches!(parse_line("weight brandFit lots"), Err(RankerError::Command(_))));
    assert!(matches!(parse_line("preset chaos"), Err(RankerError::Command(_))));
    assert!(matches!(parse_line("frobnicate"), Err(RankerError::Command(_))));
}

#[test]
fn title_requires_words() {
    assert!(parse_line("title 5").is_err());
}

// ---------------------------------------------------------------
// execute
// ---------------------------------------------------------------

#[test]
fn execute_mutations_reach_the_session() {
    let mut session = empty_session();
    let mut out = Vec::new();

    execute(&mut session, SessionCommand::Add { title: vec!["First".into()] }, &mut out).unwrap();
    let id = session.ideas()[0].id;

    execute(&mut session, SessionCommand::Rate { id: id.0, factor: Factor::BrandFit, value: 99 }, &mut out).unwrap();
    execute(&mut session, SessionCommand::Weight { factor: Factor::BrandFit, value: 20 }, &mut out).unwrap();

    assert_eq!(session.ideas()[0].rating(Factor::BrandFit), 10);
    assert_eq!(session.weights().get(Factor::BrandFit), 20);
    assert_eq!(session.total_weight(), 112);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Added idea"));
    assert!(text.contains("Brand Safety & Fit = 10"));
    assert!(text.contains("(total 112%)"));
}

#[test]
fn execute_unknown_id_is_reported_not_fatal() {
    let mut session = empty_session();
    let mut out = Vec::new();

    let flow = execute(&mut session, SessionCommand::Remove { id: 999 }, &mut out).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert!(String::from_utf8(out).unwrap().contains("nothing removed"));
}

#[test]
fn execute_quit_stops_the_loop() {
    let mut session = empty_session();
    let mut out = Vec::new();
    assert_eq!(execute(&mut session, SessionCommand::Quit, &mut out).unwrap(), Flow::Quit);
}

#[test]
fn rank_json_is_valid() {
    let mut session = Session::from_settings(&Settings::default());
    let mut out = Vec::new();
    execute(&mut session, SessionCommand::Rank { json: true }, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["ideaCount"], 1);
    assert_eq!(value["totalWeight"], 100);
    assert_eq!(value["balanced"], true);
    assert_eq!(value["entries"][0]["score"], serde_json::json!(72.4));
    assert_eq!(value["entries"][0]["tier"], "high");
    assert_eq!(value["entries"][0]["urgency"]["tier"], "timely");
    assert_eq!(value["entries"][0]["idea"]["title"], "Sample Video 1");
}

#[test]
fn show_prints_breakdown() {
    let mut session = Session::from_settings(&Settings::default());
    let id = session.ideas()[0].id;
    let mut out = Vec::new();
    execute(&mut session, SessionCommand::Show { id: id.0 }, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("score 72.4 (High)"));
    assert!(text.contains("Strongest factor: Engagement Potential"));
    assert!(text.contains("Urgency: Timely"));
}

// ---------------------------------------------------------------
// run_session
// ---------------------------------------------------------------

#[test]
fn session_script_ranks_after_each_change() {
    let mut session = empty_session();
    let output = run(&mut session, "add Slow burner\nadd Trend rider\nquit\n");

    assert_eq!(session.ideas().len(), 2);
    let trend_rider = session.ideas()[1].id;

    let output2 = run(&mut session, &format!("rate {} trendingTopicScore 10\nrank\n", trend_rider));

    assert!(output.contains("Added idea"));
    assert!(output.contains("Video Content Ideas (2)"));
    let top_line = output2
        .lines()
        .filter(|line| line.trim_start().starts_with("#1"))
        .last()
        .unwrap();
    assert!(top_line.contains("Trend rider"), "unexpected top row: {}", top_line);
    assert!(top_line.contains("URGENT - Act Now!"));
}

#[test]
fn session_survives_bad_input() {
    let mut session = empty_session();
    let output = run(&mut session, "bogus\nrate 1 nope 3\nadd\n");

    assert!(output.contains("unrecognized subcommand 'bogus'"), "{}", output);
    assert!(output.contains("invalid value 'nope'"), "{}", output);
    assert!(output.contains("Added idea"));
    assert_eq!(session.ideas().len(), 1);
}

#[test]
fn session_stores_title_verbatim() {
    let mut session = empty_session();
    let output = run(&mut session, "add Why  AI   wins\n");

    assert_eq!(session.ideas()[0].title, "Why  AI   wins");
    assert!(output.contains("'Why  AI   wins'"));
}

#[test]
fn ranking_shows_score_tier() {
    let mut session = Session::from_settings(&Settings::default());
    let mut out = Vec::new();
    execute(&mut session, SessionCommand::Rank { json: false }, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let row = text.lines().find(|line| line.contains("Sample Video 1")).unwrap();
    assert!(row.contains("72.4"));
    assert!(row.contains("High"));
}

#[test]
fn session_shows_weight_advisory() {
    let mut session = empty_session();
    let output = run(&mut session, "weight viralPotential 50\n");

    assert!(output.contains("Factor Weights (Total: 140%)"));
    assert!(output.contains("not on a percentage scale"));
}

#[test]
fn session_ends_on_eof() {
    let mut session = empty_session();
    let output = run(&mut session, "");
    assert!(output.contains("No ideas yet"));
}

#[test]
fn preset_replaces_weights_in_session() {
    let mut session = empty_session();
    run(&mut session, "weight brandFit 50\npreset trend\n");
    assert_eq!(session.weights(), &Preset::Trend.weights());
}

// ---------------------------------------------------------------
// score_one
// ---------------------------------------------------------------

fn score_text(ratings: Vec<i64>, preset: Option<Preset>, weights: Option<Vec<i64>>) -> String {
    let mut out = Vec::new();
    score_one(ratings, preset, weights, "One-off".into(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn score_one_defaults_to_balanced() {
    let text = score_text(vec![7; 8], None, None);

    assert!(text.contains("One-off"));
    assert!(text.contains("score 70.0 (High)"));
    assert!(!text.contains("Note:"));
}

#[test]
fn score_one_uses_preset() {
    let text = score_text(vec![7, 8, 6, 7, 9, 7, 8, 5], Some(Preset::Trend), None);
    assert!(text.contains("score 70.9"));
}

#[test]
fn score_one_notes_unbalanced_weights() {
    let text = score_text(vec![5; 8], None, Some(vec![10; 8]));

    assert!(text.contains("score 40.0 (Low)"));
    assert!(text.contains("Note: weights total 80%, not 100%"));
}

#[test]
fn score_one_rejects_wrong_weight_count() {
    let mut out = Vec::new();
    let err = score_one(vec![5; 8], None, Some(vec![10, 20, 30]), "x".into(), &mut out).unwrap_err();

    assert!(matches!(err, RankerError::WrongArity { expected: 8, actual: 3 }));
    assert_eq!(err.to_string(), "Expected 8 values, got 3");
    assert!(out.is_empty());
}
