//! Referential Overlap Engine
//!
//! Argument overlap counts repeated references between a word and a buffer
//! of earlier overlap candidates. Two forms match when they are equal or
//! when both are personal pronouns of the same class.

use crate::classify::WordFact;
use std::collections::VecDeque;

/// Personal and possessive pronoun classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PronounClass {
    FirstSingular,
    SecondSingular,
    ThirdSingularMasc,
    ThirdSingularFem,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

const PRONOUNS: &[(PronounClass, &[&str])] = &[
    (PronounClass::FirstSingular, &["ik", "mij", "me", "mijn"]),
    (PronounClass::SecondSingular, &["jij", "je", "jou", "jouw"]),
    (PronounClass::ThirdSingularMasc, &["hij", "hem", "zijn"]),
    (PronounClass::ThirdSingularFem, &["zij", "ze", "haar"]),
    (PronounClass::FirstPlural, &["wij", "we", "ons", "onze"]),
    (PronounClass::SecondPlural, &["jullie"]),
    (PronounClass::ThirdPlural, &["zij", "ze", "hen", "hun"]),
];

fn classes(form: &str) -> impl Iterator<Item = PronounClass> + '_ {
    PRONOUNS
        .iter()
        .filter(move |(_, forms)| forms.contains(&form))
        .map(|(class, _)| *class)
}

fn same_referent(a: &str, b: &str) -> bool {
    a == b || classes(a).any(|ca| classes(b).any(|cb| ca == cb))
}

/// True when `form` refers back to anything in `buffer`
pub fn argument_overlap<'a>(form: &str, buffer: impl IntoIterator<Item = &'a str>) -> bool {
    buffer.into_iter().any(|other| same_referent(form, other))
}

/// Word and lemma forms of the overlap candidates of one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapBuffer {
    words: Vec<String>,
    lemmas: Vec<String>,
}

impl OverlapBuffer {
    /// Collect the candidates of a finished sentence
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a WordFact>) -> Self {
        let mut buffer = Self::default();
        for w in words.into_iter().filter(|w| w.overlap_candidate) {
            buffer.words.push(w.l_word.clone());
            buffer.lemmas.push(w.lemma.clone());
        }
        buffer
    }

    /// True when there is nothing to refer back to
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Mark overlap of every candidate in `words` with the previous sentence
pub fn sentence_overlap(words: &mut [WordFact], previous: &OverlapBuffer) {
    if previous.is_empty() {
        return;
    }
    for w in words.iter_mut().filter(|w| w.overlap_candidate) {
        if argument_overlap(&w.l_word, previous.words.iter().map(String::as_str)) {
            w.word_overlap += 1;
        }
        if argument_overlap(&w.lemma, previous.lemmas.iter().map(String::as_str)) {
            w.lemma_overlap += 1;
        }
    }
}

/// Sliding window of the most recent overlap candidates of a document
#[derive(Debug, Clone)]
pub struct DocumentWindow {
    size: usize,
    words: VecDeque<String>,
    lemmas: VecDeque<String>,
    word_overlap: u32,
    lemma_overlap: u32,
}

impl DocumentWindow {
    /// An empty window holding `size` candidates
    pub fn new(size: usize) -> Self {
        Self {
            size,
            words: VecDeque::with_capacity(size),
            lemmas: VecDeque::with_capacity(size),
            word_overlap: 0,
            lemma_overlap: 0,
        }
    }

    /// Feed the next word; only overlap candidates enter the window
    ///
    /// Matching starts once the window is full, so a document with fewer
    /// candidates than the window size has no document overlap.
    pub fn push(&mut self, word: &WordFact) {
        if !word.overlap_candidate {
            return;
        }
        if self.words.len() >= self.size {
            if argument_overlap(&word.l_word, self.words.iter().map(String::as_str)) {
                self.word_overlap += 1;
            }
            if argument_overlap(&word.lemma, self.lemmas.iter().map(String::as_str)) {
                self.lemma_overlap += 1;
            }
            self.words.pop_front();
            self.lemmas.pop_front();
        }
        self.words.push_back(word.l_word.clone());
        self.lemmas.push_back(word.lemma.clone());
    }

    /// Word and lemma overlap counts so far
    pub fn counts(&self) -> (u32, u32) {
        (self.word_overlap, self.lemma_overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronoun_class_match() {
        assert!(argument_overlap("hem", ["hij"]));
        assert!(argument_overlap("ze", ["haar"]));
        assert!(argument_overlap("ze", ["hun"]));
        assert!(!argument_overlap("hem", ["haar", "jullie"]));
    }

    #[test]
    fn test_exact_match() {
        assert!(argument_overlap("fiets", ["auto", "fiets"]));
        assert!(!argument_overlap("fiets", Vec::<&str>::new()));
    }

    #[test]
    fn test_same_referent_is_symmetric() {
        for (a, b) in [("ik", "mij"), ("jou", "je"), ("onze", "wij"), ("hen", "zij")] {
            assert!(same_referent(a, b));
            assert!(same_referent(b, a));
        }
        assert!(!same_referent("ik", "jij"));
    }
}
