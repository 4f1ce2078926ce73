//! Aggregation Tree
//!
//! One [`StatsNode`] per word, sentence, paragraph and document. Each node
//! owns its children and the [`Totals`] merged from them; what differs per
//! level lives in [`NodeKind`].

pub mod build;
pub mod tally;
pub mod totals;

pub use build::{build_sentence, TreeBuilder};
pub use tally::{Additive, Tally};
pub use totals::{conn_form, sit_form, Counts, ParseStatus, Sums, Tallies, TierCounts, Totals, Uniques};

use crate::classify::WordFact;
use crate::config::AnalysisConfig;
use crate::domain::{Conn, Monoid, Situation};
use crate::mtld::average_mtld;
use std::collections::BTreeMap;

/// Level-specific part of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A word leaf
    Word(Box<WordFact>),
    /// A sentence with its tokenised text
    Sentence {
        /// Words joined by single spaces
        text: String,
    },
    /// A paragraph
    Paragraph,
    /// A whole document
    Document {
        /// Input name
        name: String,
        /// Word overlap within the document window
        word_overlap: u32,
        /// Lemma overlap within the document window
        lemma_overlap: u32,
        /// Size of the document window
        window: usize,
    },
}

impl NodeKind {
    /// Level name used in metrics and file names
    pub fn level(&self) -> &'static str {
        match self {
            NodeKind::Word(_) => "word",
            NodeKind::Sentence { .. } => "sentence",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Document { .. } => "document",
        }
    }
}

/// MTLD scores of one node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diversity {
    /// Lowercase words
    pub words: f64,
    /// Lemmas
    pub lemmas: f64,
    /// Names
    pub names: f64,
    /// Content words
    pub contents: f64,
    /// Per connective class
    pub conns: BTreeMap<Conn, f64>,
    /// Per situation class
    pub sits: BTreeMap<Situation, f64>,
}

/// Values computed from the merged totals and the word leaves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derived {
    /// Mean dependency length
    pub mean_dep_len: Option<f64>,
    /// Maximum dependency length
    pub max_dep_len: u32,
    /// MTLD scores; absent for words and sentences
    pub diversity: Option<Diversity>,
    /// Share of distinct lemmas seen at most `rarity_level` times
    pub rarity: Option<f64>,
}

/// A node of the statistics tree
#[derive(Debug, Clone, PartialEq)]
pub struct StatsNode {
    /// Position among its siblings
    pub index: usize,
    /// Level and level-specific data
    pub kind: NodeKind,
    /// Merged totals
    pub totals: Totals,
    /// Derived summaries
    pub derived: Derived,
    /// Owned children in document order
    pub children: Vec<StatsNode>,
}

impl StatsNode {
    /// An empty node
    pub fn new(index: usize, kind: NodeKind) -> Self {
        Self {
            index,
            kind,
            totals: Totals::identity(),
            derived: Derived::default(),
            children: Vec::new(),
        }
    }

    /// A word leaf
    pub fn word(index: usize, fact: WordFact) -> Self {
        let totals = Totals::from_word(&fact);
        let mut node = Self {
            index,
            kind: NodeKind::Word(Box::new(fact)),
            totals,
            derived: Derived::default(),
            children: Vec::new(),
        };
        node.refresh_distances();
        node
    }

    /// The word of a leaf
    pub fn fact(&self) -> Option<&WordFact> {
        match &self.kind {
            NodeKind::Word(fact) => Some(fact),
            _ => None,
        }
    }

    /// Fold a child into this node and take ownership of it
    pub fn merge(&mut self, child: StatsNode) {
        self.totals.absorb(&child.totals);
        self.children.push(child);
        self.refresh_distances();
    }

    fn refresh_distances(&mut self) {
        self.derived.mean_dep_len = self.totals.mean_distance();
        self.derived.max_dep_len = self.totals.max_distance();
    }

    /// Word leaves below this node, in document order
    pub fn words(&self) -> Vec<&WordFact> {
        let mut out = Vec::new();
        self.collect_words(&mut out);
        out
    }

    fn collect_words<'a>(&'a self, out: &mut Vec<&'a WordFact>) {
        match &self.kind {
            NodeKind::Word(fact) => out.push(fact),
            _ => {
                for child in &self.children {
                    child.collect_words(out);
                }
            }
        }
    }

    /// Compute rarity, and MTLD for paragraphs and documents
    pub fn finish(&mut self, config: &AnalysisConfig) {
        let lemmas = &self.totals.uniques.lemmas;
        self.derived.rarity = (lemmas.distinct() > 0).then(|| {
            let rare = lemmas
                .iter()
                .filter(|(_, n)| *n <= config.rarity_level)
                .count();
            rare as f64 / lemmas.distinct() as f64
        });

        if matches!(self.kind, NodeKind::Paragraph | NodeKind::Document { .. }) {
            self.derived.diversity = Some(self.diversity(config.mtld_threshold));
        }
    }

    fn diversity(&self, threshold: f64) -> Diversity {
        let words: Vec<&WordFact> = self
            .words()
            .into_iter()
            .filter(|w| !w.is_punctuation())
            .collect();
        let mtld = |forms: Vec<&str>| average_mtld(&forms, threshold);
        Diversity {
            words: mtld(words.iter().map(|w| w.l_word.as_str()).collect()),
            lemmas: mtld(words.iter().map(|w| w.lemma.as_str()).collect()),
            names: mtld(
                words
                    .iter()
                    .filter(|w| w.is_name())
                    .map(|w| w.l_word.as_str())
                    .collect(),
            ),
            contents: mtld(
                words
                    .iter()
                    .filter(|w| w.content)
                    .map(|w| w.l_word.as_str())
                    .collect(),
            ),
            conns: Conn::CLASSES
                .iter()
                .map(|&class| {
                    let forms = words
                        .iter()
                        .filter(|w| w.conn == class)
                        .map(|w| conn_form(w))
                        .collect();
                    (class, mtld(forms))
                })
                .collect(),
            sits: Situation::CLASSES
                .iter()
                .map(|&class| {
                    let forms = words
                        .iter()
                        .filter(|w| w.sit == class)
                        .map(|w| sit_form(w))
                        .collect();
                    (class, mtld(forms))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_has_identity_totals() {
        let node = StatsNode::new(0, NodeKind::Paragraph);
        assert_eq!(node.totals, Totals::identity());
        assert!(node.words().is_empty());
        assert_eq!(node.kind.level(), "paragraph");
    }

    #[test]
    fn test_merge_keeps_child_order_and_distances() {
        use crate::domain::DistKind;
        let mut a = StatsNode::new(0, NodeKind::Sentence { text: "a".into() });
        a.totals.distances.insert(DistKind::SubVerb, vec![2]);
        let mut b = StatsNode::new(1, NodeKind::Sentence { text: "b".into() });
        b.totals.distances.insert(DistKind::SubVerb, vec![4]);

        let mut par = StatsNode::new(0, NodeKind::Paragraph);
        par.merge(a);
        par.merge(b);
        assert_eq!(par.children[0].index, 0);
        assert_eq!(par.children[1].index, 1);
        assert_eq!(par.derived.mean_dep_len, Some(3.0));
        assert_eq!(par.derived.max_dep_len, 4);
    }
}
