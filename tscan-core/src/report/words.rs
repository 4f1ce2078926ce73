//! Word-level CSV table

use super::csv::CsvTable;
use super::Cell;
use crate::classify::WordFact;
use crate::domain::{Adverb, Afk, Conn, General, Intensify, SemType, Situation};
use crate::stats::{NodeKind, StatsNode};

const HEADER: &str = "Inputfile,Segment,Woord,Lemma,Voll_lemma,Wrd_soort,Wrd_prop,Wrd_positie,\
Ww_vorm,Morfemen,Let_per_wrd,Morf_per_wrd,Samenst,Samenst_delen,Inhwrd,NER,\
Sem_type,Conn_type,Multi_conn,Sit_type,Intens_type,Alg_nw_type,Alg_ww_type,Bijw_type,Afk_type,\
Pers_ref,Vnw_ref,Arch,Ontk_zin,Ontk_morf,Nom,Imp,\
Wrd_freq_log,Lem_freq_log,Top_freq,Staph50,Staph65,Staph77,Staph80,\
Wrd_over_vzin,Lem_over_vzin,Log_prob,";

fn flag(on: bool) -> Cell {
    Cell::Int(i64::from(on))
}

/// Empty cell for "no class"
fn label(s: &str) -> Cell {
    if s == "none" {
        Cell::Raw(String::new())
    } else {
        Cell::Raw(s.to_string())
    }
}

fn cells(w: &WordFact) -> Vec<Cell> {
    let sem = match w.sem {
        SemType::NoSemType => String::new(),
        other => other.as_str().to_string(),
    };
    let general = |g: General| match g {
        General::None => Cell::Raw(String::new()),
        g => Cell::Raw(g.label()),
    };
    vec![
        Cell::Text(w.text.clone()),
        Cell::Text(w.lemma.clone()),
        Cell::Text(w.full_lemma.clone().unwrap_or_default()),
        Cell::Raw(w.tag.as_str().to_string()),
        Cell::Raw(w.prop.as_str().to_string()),
        Cell::Raw(w.position.as_str().to_string()),
        Cell::Raw(w.verb_form.as_str().to_string()),
        Cell::Text(w.morphemes.join("+")),
        Cell::count(w.char_cnt),
        Cell::count(w.morph_cnt),
        Cell::Text(w.compound_label.clone().unwrap_or_default()),
        w.compound.as_ref().map_or(Cell::Int(0), |c| Cell::count(c.parts)),
        flag(w.content),
        Cell::Raw(w.ner.as_str().to_string()),
        Cell::Raw(sem),
        label(Conn::as_str(w.conn)),
        flag(w.multi_conn),
        label(Situation::as_str(w.sit)),
        label(Intensify::as_str(w.intensify)),
        general(w.general_noun),
        general(w.general_verb),
        label(Adverb::as_str(w.adverb)),
        label(Afk::as_str(w.afk)),
        flag(w.pers_ref),
        flag(w.pron_ref),
        flag(w.archaic),
        flag(w.prop_neg),
        flag(w.morph_neg),
        flag(w.nominal),
        flag(w.imperative),
        Cell::opt(w.word_freq_log),
        Cell::opt(w.lemma_freq_log),
        w.top_tier.size().map_or(Cell::Na, Cell::count),
        flag(w.staph[0]),
        flag(w.staph[1]),
        flag(w.staph[2]),
        flag(w.staph[3]),
        Cell::count(w.word_overlap),
        Cell::count(w.lemma_overlap),
        Cell::opt(w.logprob10),
    ]
}

/// One row per word, punctuation included, segments `p.N.s.M.w.K`
pub fn word_table(doc: &StatsNode) -> CsvTable {
    let name = match &doc.kind {
        NodeKind::Document { name, .. } => name.as_str(),
        _ => "",
    };
    let mut rows = Vec::new();
    for par in &doc.children {
        for sentence in &par.children {
            for leaf in &sentence.children {
                let Some(fact) = leaf.fact() else { continue };
                let segment = format!(
                    "p.{}.s.{}.w.{}",
                    par.index + 1,
                    sentence.index + 1,
                    leaf.index + 1
                );
                let mut line = format!("{name},{segment},");
                for cell in cells(fact) {
                    line.push_str(&cell.to_string());
                    line.push(',');
                }
                rows.push(line);
            }
        }
    }
    CsvTable {
        header: HEADER.to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotatedWord, PosTag};
    use crate::classify::classify_word;
    use crate::lexicon::LexiconStore;

    fn fact(text: &str, head: &str, lemma: &str) -> WordFact {
        let word = AnnotatedWord {
            text: text.to_string(),
            pos: Some(PosTag {
                head: head.to_string(),
                features: Vec::new(),
            }),
            lemma: lemma.to_string(),
            ..Default::default()
        };
        classify_word(&word, 0, None, None, &LexiconStore::default()).unwrap()
    }

    #[test]
    fn test_row_matches_header() {
        let mut sentence = StatsNode::new(0, NodeKind::Sentence { text: "kat .".into() });
        sentence.merge(StatsNode::word(0, fact("kat", "N", "kat")));
        sentence.merge(StatsNode::word(1, fact(".", "LET", ".")));
        let mut par = StatsNode::new(0, NodeKind::Paragraph);
        par.merge(sentence);
        let mut doc = StatsNode::new(
            0,
            NodeKind::Document {
                name: "d".into(),
                word_overlap: 0,
                lemma_overlap: 0,
                window: 50,
            },
        );
        doc.merge(par);

        let table = word_table(&doc);
        assert_eq!(table.len(), 2);
        assert!(table.rows[0].starts_with("d,p.1.s.1.w.1,\"kat\",\"kat\",\"\",N,"));
        assert!(table.rows[1].starts_with("d,p.1.s.1.w.2,"));
        let columns = HEADER.matches(',').count();
        for row in &table.rows {
            assert_eq!(row.matches(',').count(), columns);
        }
    }
}
