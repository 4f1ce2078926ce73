//! Structural CSV tables

use super::blocks::{Level, View, BLOCKS};
use super::Cell;
use crate::stats::{NodeKind, StatsNode};
use serde::Serialize;
use std::io::{self, Write};

/// A rendered CSV table; every line ends with a comma
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvTable {
    /// Header line
    pub header: String,
    /// Data lines
    pub rows: Vec<String>,
}

impl CsvTable {
    /// Write header and rows, one per line
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.header)?;
        for row in &self.rows {
            writeln!(out, "{row}")?;
        }
        out.flush()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True without data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn header(intro: &str, level: Level) -> String {
    let mut line = format!("{intro},Alpino_status,");
    for block in &BLOCKS {
        line.push_str(&(block.header)(level));
    }
    line
}

fn row(intro: Vec<Cell>, view: &View<'_>) -> String {
    let mut cells = intro;
    cells.push(Cell::Int(view.t.parse.code()));
    for block in &BLOCKS {
        (block.row)(view, &mut cells);
    }
    let mut line = String::new();
    for cell in cells {
        line.push_str(&cell.to_string());
        line.push(',');
    }
    line
}

fn document_name(doc: &StatsNode) -> &str {
    match &doc.kind {
        NodeKind::Document { name, .. } => name,
        _ => "",
    }
}

/// One row for the whole document
pub fn document_table(doc: &StatsNode) -> CsvTable {
    let mut table = CsvTable {
        header: header(
            "Inputfile,Par_per_doc,Zin_per_doc,Word_per_doc",
            Level::Document,
        ),
        rows: Vec::new(),
    };
    if let Some(view) = View::new(doc) {
        let c = view.c;
        table.rows.push(row(
            vec![
                Cell::Raw(document_name(doc).to_string()),
                Cell::count(c.paragraphs),
                Cell::count(c.sentences),
                Cell::count(c.words),
            ],
            &view,
        ));
    }
    table
}

/// One row per paragraph, segments `p.N`
pub fn paragraph_table(doc: &StatsNode) -> CsvTable {
    let name = document_name(doc);
    let rows = doc
        .children
        .iter()
        .filter_map(|par| {
            let view = View::new(par)?;
            let intro = vec![
                Cell::Raw(name.to_string()),
                Cell::Raw(format!("p.{}", par.index + 1)),
                Cell::count(view.c.sentences),
                Cell::count(view.c.words),
            ];
            Some(row(intro, &view))
        })
        .collect();
    CsvTable {
        header: header("Inputfile,Segment,Zin_per_par,Wrd_per_par", Level::Paragraph),
        rows,
    }
}

/// One row per sentence, segments `p.N.s.M`
pub fn sentence_table(doc: &StatsNode) -> CsvTable {
    let name = document_name(doc);
    let mut rows = Vec::new();
    for par in &doc.children {
        for sentence in &par.children {
            let (Some(view), NodeKind::Sentence { text }) = (View::new(sentence), &sentence.kind)
            else {
                continue;
            };
            let intro = vec![
                Cell::Raw(name.to_string()),
                Cell::Raw(format!("p.{}.s.{}", par.index + 1, sentence.index + 1)),
                Cell::Text(text.clone()),
            ];
            rows.push(row(intro, &view));
        }
    }
    CsvTable {
        header: header("Inputfile,Segment,Getokeniseerde_zin", Level::Sentence),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> StatsNode {
        let mut sentence = StatsNode::new(0, NodeKind::Sentence { text: "Hij zei \"ja\" .".into() });
        sentence.totals.counts.words = 3;
        sentence.totals.counts.sentences = 1;
        let mut par = StatsNode::new(0, NodeKind::Paragraph);
        par.merge(sentence);
        par.totals.counts.paragraphs = 1;
        let mut doc = StatsNode::new(
            0,
            NodeKind::Document {
                name: "in.json".into(),
                word_overlap: 0,
                lemma_overlap: 0,
                window: 50,
            },
        );
        doc.merge(par);
        doc
    }

    fn fields(line: &str) -> usize {
        line.matches(',').count()
    }

    #[test]
    fn test_document_row_matches_header() {
        let table = document_table(&doc());
        assert!(table.header.starts_with("Inputfile,Par_per_doc,Zin_per_doc,Word_per_doc,Alpino_status,Let_per_wrd,"));
        assert_eq!(table.len(), 1);
        assert!(table.rows[0].starts_with("in.json,1,1,3,0,"));
        assert_eq!(fields(&table.header), fields(&table.rows[0]));
    }

    #[test]
    fn test_paragraph_segments() {
        let table = paragraph_table(&doc());
        assert!(table.rows[0].starts_with("in.json,p.1,1,3,0,"));
        assert_eq!(fields(&table.header), fields(&table.rows[0]));
    }

    #[test]
    fn test_sentence_text_is_quoted() {
        let table = sentence_table(&doc());
        assert!(table.rows[0].starts_with("in.json,p.1.s.1,\"Hij zei \"\"ja\"\" .\",0,"));
        // the quoted text holds no commas, so comma counts still line up
        assert_eq!(fields(&table.header), fields(&table.rows[0]));
    }

    #[test]
    fn test_write_to() {
        let table = CsvTable {
            header: "a,".into(),
            rows: vec!["1,".into(), "2,".into()],
        };
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\n1,\n2,\n");
    }
}
