//! Scheduling of per-sentence service calls
//!
//! The parser and the language model are independent of each other and of
//! every other sentence, so their replies can be gathered up front. Tree
//! construction afterwards stays in document order.

use crate::services::{LanguageModel, SyntaxParser};
use serde::{Deserialize, Serialize};
use tscan_core::annotation::{AnnotatedSentence, LmScores, ParseOutcome};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Parser and language model replies for one sentence
pub type Replies = (ParseOutcome, Option<LmScores>);

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One sentence after the other, parser before language model
    Sequential,
    /// Sentences across the thread pool, parser and language model forked
    Parallel,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        if cfg!(feature = "parallel") {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Strategy for asking the services about a batch of sentences
pub trait Executor: Send + Sync {
    /// Replies for every sentence, in input order
    fn annotate(
        &self,
        sentences: &[&AnnotatedSentence],
        parser: &dyn SyntaxParser,
        lm: &dyn LanguageModel,
    ) -> Vec<Replies>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Executor for `mode`; parallel falls back to sequential when the
/// `parallel` feature is off
pub fn executor_for(mode: ExecutionMode) -> Box<dyn Executor> {
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Box::new(ParallelExecutor),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            tracing::warn!("built without the parallel feature, running sequentially");
            Box::new(SequentialExecutor)
        }
        ExecutionMode::Sequential => Box::new(SequentialExecutor),
    }
}
