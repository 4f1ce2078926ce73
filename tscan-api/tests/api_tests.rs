//! Tests for the public analysis API

use std::fs;
use tscan_api::*;

const DOCUMENT: &str = r#"{"paragraphs":[{"sentences":[
  {"words":[
    {"text":"Jan","pos":{"head":"SPEC","features":["deeleigen"]},"lemma":"Jan","ner":"B-PER"},
    {"text":"fietst","pos":{"head":"WW","features":["pv","tgw","met-t"]},"lemma":"fietsen"},
    {"text":"snel","pos":{"head":"ADJ","features":["vrij","basis"]},"lemma":"snel"},
    {"text":".","pos":{"head":"LET"},"lemma":"."}]},
  {"words":[
    {"text":"Hij","pos":{"head":"VNW","features":["pers","pron","3","ev"]},"lemma":"hij"},
    {"text":"fietst","pos":{"head":"WW","features":["pv","tgw","met-t"]},"lemma":"fietsen"},
    {"text":"?","pos":{"head":"LET"},"lemma":"?"}]}
]}]}"#;

#[test]
fn test_analyze_json_produces_all_tables() {
    let report = analyze_json(DOCUMENT).unwrap();
    assert_eq!(report.name, "stdin");
    assert_eq!(report.document.len(), 1);
    assert_eq!(report.paragraphs.len(), 1);
    assert_eq!(report.sentences.len(), 2);
    assert_eq!(report.words.len(), 7);
    assert!(report.document.header.starts_with("Inputfile,Par_per_doc,"));
    assert!(report.sentences.rows[1].contains("\"Hij fietst ?\""));
    assert_eq!(report.metadata.sentences, 2);
    assert_eq!(report.metadata.words, 5);
}

#[test]
fn test_every_row_matches_its_header_width() {
    let report = analyze_json(DOCUMENT).unwrap();
    for (_, table) in report.tables() {
        let width = table.header.matches(',').count();
        for row in &table.rows {
            // quoted sentence text holds no commas here
            assert_eq!(row.matches(',').count(), width, "{row}");
        }
    }
}

#[test]
fn test_metrics_json_and_question_flag() {
    let report = analyze_json(DOCUMENT).unwrap();
    let sentence = &report.metrics.children[0].children[1];
    assert_eq!(sentence.level, "sentence");
    assert_eq!(sentence.get("isQuestion"), Some("true"));
    let json = report.metrics_json().unwrap();
    assert!(json.contains("\"level\": \"document\""));
}

#[test]
fn test_problems_list_unknown_verbs() {
    let report = analyze_json(DOCUMENT).unwrap();
    assert!(report
        .problems
        .iter()
        .any(|p| p.missing == "verb" && p.lemma == "fietsen"));
    // unknown names are not problems
    assert!(report.problems.iter().all(|p| p.word != "jan"));
    let mut out = Vec::new();
    write_problems(&report.problems, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with(PROBLEMS_HEADER));
}

#[test]
fn test_file_with_settings() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("verhaal.json");
    fs::write(&doc, DOCUMENT).unwrap();
    let settings = dir.path().join("tscan.toml");
    fs::write(&settings, "[services]\nuse_parser = false\nexecution = \"sequential\"\n").unwrap();

    let report = analyze_file_with_settings(&doc, &settings).unwrap();
    assert_eq!(report.name, "verhaal.json");
    assert_eq!(report.metadata.parse_status, -1);
    assert_eq!(report.metadata.mode_used, "sequential");
    assert!(report.document.rows[0].starts_with("verhaal.json,"));
}

#[test]
fn test_lsa_setting_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("tscan.toml");
    fs::write(&settings, "[services]\nuse_lsa = true\n").unwrap();
    let err = ReadabilityAnalyzer::from_settings_file(&settings)
        .err()
        .unwrap();
    assert!(matches!(err, ApiError::Engine(_)));
    assert!(err.is_configuration());
}
