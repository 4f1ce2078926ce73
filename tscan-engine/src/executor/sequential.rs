//! Sequential execution strategy

use crate::executor::{ExecutionMode, Executor, Replies};
use crate::services::{LanguageModel, SyntaxParser};
use tscan_core::annotation::AnnotatedSentence;

/// Single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn annotate(
        &self,
        sentences: &[&AnnotatedSentence],
        parser: &dyn SyntaxParser,
        lm: &dyn LanguageModel,
    ) -> Vec<Replies> {
        sentences
            .iter()
            .map(|sentence| (parser.parse(sentence), lm.score(sentence)))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
