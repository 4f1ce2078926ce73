//! End-to-end tests from annotated input to report tables

use tscan_core::annotation::{
    AnnotatedDocument, AnnotatedParagraph, AnnotatedSentence, AnnotatedWord, ParseOutcome, PosTag,
    SentenceParse, WordParse,
};
use tscan_core::lexicon::{LexiconBuilder, LexiconKind};
use tscan_core::report::Cell;
use tscan_core::{
    build_annotated, document_table, metric_tree, sentence_table, AnalysisConfig, CsvTable,
    LexiconStore, StatsNode, TreeBuilder,
};

fn word(text: &str, head: &str, features: &[&str], lemma: &str) -> AnnotatedWord {
    AnnotatedWord {
        text: text.to_string(),
        pos: Some(PosTag {
            head: head.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }),
        lemma: lemma.to_string(),
        ..Default::default()
    }
}

fn sentence(words: Vec<AnnotatedWord>) -> AnnotatedSentence {
    AnnotatedSentence {
        words,
        ..Default::default()
    }
}

fn three_sentences() -> AnnotatedDocument {
    AnnotatedDocument {
        paragraphs: vec![AnnotatedParagraph {
            sentences: vec![
                sentence(vec![
                    word("De", "LID", &["bep"], "de"),
                    word("kat", "N", &["soort", "ev"], "kat"),
                    word("slaapt", "WW", &["pv", "tgw", "met-t"], "slapen"),
                    word(".", "LET", &[], "."),
                ]),
                sentence(vec![
                    word("De", "LID", &["bep"], "de"),
                    word("katten", "N", &["soort", "mv"], "kat"),
                    word("eten", "WW", &["pv", "tgw", "mv"], "eten"),
                    word(".", "LET", &[], "."),
                ]),
                sentence(vec![
                    word("Hij", "VNW", &["pers", "pron", "3", "ev"], "hij"),
                    word("loopt", "WW", &["pv", "tgw", "met-t"], "lopen"),
                    word(".", "LET", &[], "."),
                ]),
            ],
        }],
    }
}

fn sentences(doc: &StatsNode) -> Vec<&StatsNode> {
    doc.children.iter().flat_map(|p| p.children.iter()).collect()
}

fn cell<'t>(table: &'t CsvTable, row: usize, name: &str) -> &'t str {
    let i = table.header.split(',').position(|h| h == name).unwrap();
    table.rows[row].split(',').nth(i).unwrap()
}

fn parsed(sentence: &AnnotatedSentence) -> ParseOutcome {
    ParseOutcome::Parsed(SentenceParse {
        words: vec![WordParse::default(); sentence.words.len()],
        ..Default::default()
    })
}

#[test]
fn test_repeated_lemma_overlaps_with_previous_sentence() {
    let lex = LexiconStore::default();
    let doc = build_annotated("doc", &three_sentences(), &lex, &AnalysisConfig::default()).unwrap();
    let s = sentences(&doc);

    assert_eq!(s[0].totals.counts.lemma_overlap, 0);
    assert_eq!(s[1].totals.counts.lemma_overlap, 1);
    // "katten" differs from "kat" as a word form
    assert_eq!(s[1].totals.counts.word_overlap, 0);
    assert_eq!(s[2].totals.counts.lemma_overlap, 0);

    let summed: u32 = s.iter().map(|n| n.totals.counts.lemma_overlap).sum();
    assert_eq!(doc.totals.counts.lemma_overlap, summed);
    assert_eq!(doc.totals.counts.words, 9);
    assert_eq!(doc.totals.counts.sentences, 3);
    assert_eq!(doc.totals.counts.paragraphs, 1);
}

#[test]
fn test_document_window_counts_beyond_window_size() {
    let lex = LexiconStore::default();
    let config = AnalysisConfig::default().with_overlap_size(1);
    let doc = build_annotated("doc", &three_sentences(), &lex, &config).unwrap();
    match &doc.kind {
        tscan_core::NodeKind::Document {
            word_overlap,
            lemma_overlap,
            ..
        } => {
            // kat -> katten repeats the lemma once the one-slot window is full
            assert_eq!(*word_overlap, 0);
            assert_eq!(*lemma_overlap, 1);
        }
        other => panic!("unexpected root {other:?}"),
    }

    let default = build_annotated("doc", &three_sentences(), &lex, &AnalysisConfig::default()).unwrap();
    assert!(matches!(
        default.kind,
        tscan_core::NodeKind::Document { lemma_overlap: 0, .. }
    ));
}

#[test]
fn test_unparsed_document_reports_na_for_parse_columns() {
    let lex = LexiconStore::default();
    let doc = build_annotated("doc", &three_sentences(), &lex, &AnalysisConfig::default()).unwrap();
    let table = document_table(&doc);
    let header: Vec<&str> = table.header.split(',').collect();
    let row: Vec<&str> = table.rows[0].split(',').collect();
    let column = |name: &str| {
        let i = header.iter().position(|h| *h == name).unwrap();
        row[i]
    };
    assert_eq!(column("Alpino_status"), "-1");
    assert_eq!(column("Wrd_per_zin"), "NA");
    assert_eq!(column("AL_gem"), "NA");
    assert_eq!(column("Zin_per_wrd"), "0.333333");
    assert_eq!(column("Wrd_per_nwg"), "NA");
}

#[test]
fn test_zero_clause_sentence_divides_by_one() {
    let lex = LexiconStore::default();
    let mut input = three_sentences();
    for s in &mut input.paragraphs[0].sentences {
        s.parse = Some(SentenceParse {
            words: vec![WordParse::default(); s.words.len()],
            ..Default::default()
        });
    }
    let doc = build_annotated("doc", &input, &lex, &AnalysisConfig::default()).unwrap();
    let s = sentences(&doc);
    assert_eq!(s[0].totals.counts.clauses, 0);
    assert_eq!(s[0].totals.counts.corrected_clauses(), 1);

    let table = sentence_table(&doc);
    let header: Vec<&str> = table.header.split(',').collect();
    let row: Vec<&str> = table.rows[0].split(',').collect();
    let i = header.iter().position(|h| *h == "Wrd_per_dz").unwrap();
    assert_eq!(row[i], "3");
    assert_eq!(Cell::Num(3.0).to_string(), row[i]);
}

#[test]
fn test_unknown_words_get_finite_frequency() {
    let lex = LexiconBuilder::default()
        .read(
            LexiconKind::WordFreq,
            "freq.tsv",
            "hond\t999\t1\t50.0\nboom\t1\t2\t0.01\n".as_bytes(),
        )
        .unwrap()
        .build();
    let input = AnnotatedDocument {
        paragraphs: vec![AnnotatedParagraph {
            sentences: vec![sentence(vec![word("kat", "N", &["soort", "ev"], "kat")])],
        }],
    };
    let doc = build_annotated("doc", &input, &lex, &AnalysisConfig::default()).unwrap();
    let leaf = sentences(&doc)[0].children[0].fact().unwrap().clone();
    assert!(leaf.word_freq_log.is_some_and(f64::is_finite));
}

#[test]
fn test_metric_tree_mirrors_structure() {
    let lex = LexiconStore::default();
    let doc = build_annotated("doc", &three_sentences(), &lex, &AnalysisConfig::default()).unwrap();
    let tree = metric_tree(&doc);
    assert_eq!(tree.level, "document");
    assert_eq!(tree.get("sentence_count"), Some("3"));
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].children.len(), 3);
    assert_eq!(tree.children[0].children[1].get("lemma_overlap_count"), Some("1"));
    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.contains("\"level\":\"word\""));
}

#[test]
fn test_pronoun_refers_back_to_same_class() {
    let lex = LexiconStore::default();
    let config = AnalysisConfig::default();
    let first = sentence(vec![
        word("Hij", "VNW", &["pers", "pron", "nomin", "vol", "3", "ev", "masc"], "hij"),
        word("slaapt", "WW", &["pv", "tgw", "met-t"], "slapen"),
        word(".", "LET", &[], "."),
    ]);
    let second = sentence(vec![
        word("Ik", "VNW", &["pers", "pron", "nomin", "vol", "1", "ev"], "ik"),
        word("zie", "WW", &["pv", "tgw", "ev"], "zien"),
        word("hem", "VNW", &["pers", "pron", "obl", "vol", "3", "ev", "masc"], "hem"),
        word(".", "LET", &[], "."),
    ]);

    let mut builder = TreeBuilder::new("doc", &lex, &config);
    builder.push_sentence(&first, &ParseOutcome::NotRequested, None).unwrap();
    builder.push_sentence(&second, &ParseOutcome::NotRequested, None).unwrap();
    let doc = builder.finish();

    let s = sentences(&doc);
    assert_eq!(s[0].totals.counts.word_overlap, 0);
    assert_eq!(s[1].totals.counts.word_overlap, 1);
    let hem = s[1].children[2].fact().unwrap();
    assert_eq!(hem.l_word, "hem");
    assert_eq!(hem.word_overlap, 1);
    assert_eq!(s[1].children[0].fact().unwrap().word_overlap, 0);
}

#[test]
fn test_failed_parse_makes_parse_columns_na() {
    let lex = LexiconStore::default();
    let config = AnalysisConfig::default();
    let input = three_sentences();
    let [first, second, _] = &input.paragraphs[0].sentences[..] else {
        panic!("three sentences expected");
    };

    let mut builder = TreeBuilder::new("doc", &lex, &config);
    builder.push_sentence(first, &parsed(first), None).unwrap();
    builder
        .push_sentence(second, &ParseOutcome::Failed("timeout".to_string()), None)
        .unwrap();
    let doc = builder.finish();

    let table = sentence_table(&doc);
    assert_eq!(cell(&table, 0, "Alpino_status"), "0");
    assert_eq!(cell(&table, 0, "Wrd_per_dz"), "3");
    assert_eq!(cell(&table, 1, "Alpino_status"), "1");
    assert_eq!(cell(&table, 1, "Wrd_per_dz"), "NA");

    let table = document_table(&doc);
    assert_eq!(cell(&table, 0, "Alpino_status"), "1");
    assert_eq!(cell(&table, 0, "Wrd_per_dz"), "NA");
    // counts that need no parse are still reported
    assert_eq!(cell(&table, 0, "Word_per_doc"), "6");
}
