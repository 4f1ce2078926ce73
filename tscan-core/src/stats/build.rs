//! Top-down tree construction
//!
//! Sentences are built one at a time in document order: each sentence's
//! overlap depends on the finished buffer of the one before it, and the
//! document window runs across sentence and paragraph boundaries.

use super::{NodeKind, StatsNode, Totals};
use crate::annotation::{AnnotatedDocument, AnnotatedSentence, LmScores, ParseOutcome};
use crate::classify::{classify_word, WordFact};
use crate::config::AnalysisConfig;
use crate::domain::{Monoid, MonoidReduce};
use crate::error::{CoreError, Result};
use crate::lexicon::LexiconStore;
use crate::overlap::{sentence_overlap, DocumentWindow, OverlapBuffer};
use crate::resolve::resolve_sentence;
use crate::stats::ParseStatus;
use tracing::{debug, warn};

/// Build a sentence node with its word leaves
///
/// `previous` holds the overlap candidates of the preceding sentence in the
/// same paragraph. A failed or misaligned parse degrades the sentence; a
/// word without POS annotation is an error.
pub fn build_sentence(
    index: usize,
    sentence: &AnnotatedSentence,
    outcome: &ParseOutcome,
    lm: Option<&LmScores>,
    previous: &OverlapBuffer,
    lex: &LexiconStore,
) -> Result<StatsNode> {
    let (parse, status) = match outcome {
        ParseOutcome::NotRequested => (None, ParseStatus::NotRequested),
        ParseOutcome::Failed(reason) => {
            warn!(sentence = index, %reason, "parse failed, parse-dependent values become NA");
            (None, ParseStatus::Parsed { failures: 1 })
        }
        ParseOutcome::Parsed(p) if p.words.len() != sentence.words.len() => {
            let err = CoreError::ParseMismatch {
                parsed: p.words.len(),
                words: sentence.words.len(),
            };
            warn!(sentence = index, error = %err, "discarding parse");
            (None, ParseStatus::Parsed { failures: 1 })
        }
        ParseOutcome::Parsed(p) => (Some(p), ParseStatus::Parsed { failures: 0 }),
    };

    let mut facts = sentence
        .words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            classify_word(
                word,
                i,
                parse.and_then(|p| p.words.get(i)),
                lm.and_then(|scores| scores.word_logprob(i)),
                lex,
            )
        })
        .collect::<Result<Vec<WordFact>>>()?;

    let hits = resolve_sentence(&mut facts, lex);
    sentence_overlap(&mut facts, previous);
    let extras = Totals::sentence_extras(&facts, &sentence.chunks, &hits, parse, status, lm);

    let leaves: Vec<StatsNode> = facts
        .into_iter()
        .enumerate()
        .map(|(i, fact)| StatsNode::word(i, fact))
        .collect();
    let mut totals = Totals::reduce(leaves.iter().map(|leaf| leaf.totals.clone()));
    totals.absorb(&extras);
    let counts = &mut totals.counts;
    counts.sentences = u32::from(counts.words > 0);
    counts.multi_neg = u32::from(counts.prop_neg + counts.morph_neg > 1);

    let mut node = StatsNode::new(
        index,
        NodeKind::Sentence {
            text: sentence.text(),
        },
    );
    node.totals = totals;
    node.children = leaves;
    node.refresh_distances();
    Ok(node)
}

/// Incremental document builder
///
/// Feed sentences in document order with [`TreeBuilder::push_sentence`],
/// close paragraphs with [`TreeBuilder::end_paragraph`] and collect the
/// finished tree with [`TreeBuilder::finish`].
pub struct TreeBuilder<'a> {
    lex: &'a LexiconStore,
    config: &'a AnalysisConfig,
    window: DocumentWindow,
    previous: OverlapBuffer,
    paragraph: StatsNode,
    document: StatsNode,
}

impl<'a> TreeBuilder<'a> {
    /// Start a document called `name`
    pub fn new(name: impl Into<String>, lex: &'a LexiconStore, config: &'a AnalysisConfig) -> Self {
        Self {
            lex,
            config,
            window: DocumentWindow::new(config.overlap_size),
            previous: OverlapBuffer::default(),
            paragraph: StatsNode::new(0, NodeKind::Paragraph),
            document: StatsNode::new(
                0,
                NodeKind::Document {
                    name: name.into(),
                    word_overlap: 0,
                    lemma_overlap: 0,
                    window: config.overlap_size,
                },
            ),
        }
    }

    /// Add the next sentence of the current paragraph
    pub fn push_sentence(
        &mut self,
        sentence: &AnnotatedSentence,
        outcome: &ParseOutcome,
        lm: Option<&LmScores>,
    ) -> Result<()> {
        let index = self.paragraph.children.len();
        let mut node = build_sentence(index, sentence, outcome, lm, &self.previous, self.lex)?;
        node.finish(self.config);
        let words = node.words();
        for word in &words {
            self.window.push(word);
        }
        self.previous = OverlapBuffer::from_words(words);
        self.paragraph.merge(node);
        Ok(())
    }

    /// Close the current paragraph
    pub fn end_paragraph(&mut self) {
        let index = self.document.children.len() + 1;
        let mut paragraph =
            std::mem::replace(&mut self.paragraph, StatsNode::new(index, NodeKind::Paragraph));
        paragraph.totals.counts.paragraphs = 1;
        paragraph.finish(self.config);
        debug!(
            paragraph = paragraph.index,
            sentences = paragraph.children.len(),
            "paragraph done"
        );
        self.previous = OverlapBuffer::default();
        self.document.merge(paragraph);
    }

    /// Finish the document; an open paragraph with sentences is closed first
    pub fn finish(mut self) -> StatsNode {
        if !self.paragraph.children.is_empty() {
            self.end_paragraph();
        }
        let (words, lemmas) = self.window.counts();
        if let NodeKind::Document {
            word_overlap,
            lemma_overlap,
            ..
        } = &mut self.document.kind
        {
            *word_overlap = words;
            *lemma_overlap = lemmas;
        }
        self.document.finish(self.config);
        self.document
    }
}

/// Build a tree from a document whose parser and language model replies
/// are stored on the sentences
pub fn build_annotated(
    name: &str,
    document: &AnnotatedDocument,
    lex: &LexiconStore,
    config: &AnalysisConfig,
) -> Result<StatsNode> {
    let mut builder = TreeBuilder::new(name, lex, config);
    for paragraph in &document.paragraphs {
        for sentence in &paragraph.sentences {
            let outcome = sentence
                .parse
                .clone()
                .map_or(ParseOutcome::NotRequested, ParseOutcome::Parsed);
            builder.push_sentence(sentence, &outcome, sentence.lm.as_ref())?;
        }
        builder.end_paragraph();
    }
    Ok(builder.finish())
}
