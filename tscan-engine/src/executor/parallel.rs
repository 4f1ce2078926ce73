//! Parallel execution strategy

use crate::executor::{ExecutionMode, Executor, Replies};
use crate::services::{LanguageModel, SyntaxParser};
use rayon::prelude::*;
use tscan_core::annotation::AnnotatedSentence;

/// Multi-threaded executor
///
/// Sentences are spread over the rayon pool; within a sentence the parser
/// and the language model run as a fork-join pair.
#[derive(Debug, Clone)]
pub struct ParallelExecutor;

impl Executor for ParallelExecutor {
    fn annotate(
        &self,
        sentences: &[&AnnotatedSentence],
        parser: &dyn SyntaxParser,
        lm: &dyn LanguageModel,
    ) -> Vec<Replies> {
        sentences
            .par_iter()
            .map(|sentence| rayon::join(|| parser.parse(sentence), || lm.score(sentence)))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
