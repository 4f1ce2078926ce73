//! Document analysis pipeline and its builder

use crate::error::Result;
use crate::executor::{executor_for, ExecutionMode, Executor};
use crate::input::Input;
use crate::services::{
    DisabledLanguageModel, DisabledParser, EmbeddedLanguageModel, EmbeddedParser, LanguageModel,
    SyntaxParser,
};
use crate::settings::Settings;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use tscan_core::annotation::{AnnotatedDocument, AnnotatedSentence};
use tscan_core::{AnalysisConfig, LexiconMiss, LexiconStore, StatsNode, TreeBuilder};

/// Runs documents through the services and builds their statistics trees
pub struct Analyzer {
    lexicons: Arc<LexiconStore>,
    config: AnalysisConfig,
    parser: Arc<dyn SyntaxParser>,
    language_model: Arc<dyn LanguageModel>,
    executor: Box<dyn Executor>,
}

/// Result of analysing one document
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Statistics tree rooted at the document
    pub tree: StatsNode,
    /// Lexicon misses in document order; empty when problem logging is off
    pub problems: Vec<LexiconMiss>,
    /// Run information
    pub metadata: AnalysisMetadata,
}

/// Run information for one document
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Execution mode that was used for the service calls
    pub execution_mode: ExecutionMode,
    /// Wall time in milliseconds
    pub processing_time_ms: f64,
    /// Paragraphs analysed
    pub paragraphs: usize,
    /// Sentences analysed
    pub sentences: usize,
    /// Value of the document's `Alpino_status`
    pub parse_status: i64,
}

impl Analyzer {
    /// Start a builder
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Load lexicons and pick services as the settings say
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let lexicons = settings.load_lexicons()?;
        Ok(Self::builder()
            .lexicons(Arc::new(lexicons))
            .config(settings.analysis.clone())
            .use_parser(settings.services.use_parser)
            .use_language_model(settings.services.use_language_model)
            .execution_mode(settings.services.execution)
            .build())
    }

    /// The analysis thresholds in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The loaded lexicons
    pub fn lexicons(&self) -> &LexiconStore {
        &self.lexicons
    }

    /// Read and analyse one input
    pub fn analyze(&self, name: &str, input: Input) -> Result<Analysis> {
        let document = input.to_document()?;
        self.analyze_document(name, &document)
    }

    /// Analyse a document that is already in memory
    ///
    /// Service replies are gathered first; the tree is then built in
    /// document order because overlap windows run across sentences.
    pub fn analyze_document(&self, name: &str, document: &AnnotatedDocument) -> Result<Analysis> {
        let start = Instant::now();
        let sentences: Vec<&AnnotatedSentence> = document
            .paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .collect();
        debug!(
            document = name,
            sentences = sentences.len(),
            parser = self.parser.name(),
            language_model = self.language_model.name(),
            mode = %self.executor.mode(),
            "asking services"
        );
        let replies =
            self.executor
                .annotate(&sentences, self.parser.as_ref(), self.language_model.as_ref());

        let mut builder = TreeBuilder::new(name, &self.lexicons, &self.config);
        let mut replies = replies.into_iter();
        for paragraph in &document.paragraphs {
            for (sentence, (outcome, lm)) in paragraph.sentences.iter().zip(replies.by_ref()) {
                builder.push_sentence(sentence, &outcome, lm.as_ref())?;
            }
            builder.end_paragraph();
        }
        let tree = builder.finish();

        let problems = if self.config.log_problems {
            tree.words()
                .into_iter()
                .filter_map(|w| w.miss.clone())
                .collect()
        } else {
            Vec::new()
        };

        let metadata = AnalysisMetadata {
            execution_mode: self.executor.mode(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            paragraphs: document.paragraphs.len(),
            sentences: sentences.len(),
            parse_status: tree.totals.parse.code(),
        };
        info!(
            document = name,
            words = tree.totals.counts.words,
            problems = problems.len(),
            ms = metadata.processing_time_ms,
            "document analysed"
        );
        Ok(Analysis {
            tree,
            problems,
            metadata,
        })
    }
}

/// Builder for [`Analyzer`]
pub struct AnalyzerBuilder {
    lexicons: Arc<LexiconStore>,
    config: AnalysisConfig,
    parser: Arc<dyn SyntaxParser>,
    language_model: Arc<dyn LanguageModel>,
    mode: ExecutionMode,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            lexicons: Arc::new(LexiconStore::default()),
            config: AnalysisConfig::default(),
            parser: Arc::new(EmbeddedParser),
            language_model: Arc::new(EmbeddedLanguageModel),
            mode: ExecutionMode::default(),
        }
    }
}

impl AnalyzerBuilder {
    /// Set the lexicons
    pub fn lexicons(mut self, lexicons: Arc<LexiconStore>) -> Self {
        self.lexicons = lexicons;
        self
    }

    /// Set the analysis thresholds
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom parser
    pub fn parser(mut self, parser: Arc<dyn SyntaxParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Use a custom language model
    pub fn language_model(mut self, lm: Arc<dyn LanguageModel>) -> Self {
        self.language_model = lm;
        self
    }

    /// Switch between the stored parse and no parser at all
    pub fn use_parser(self, enabled: bool) -> Self {
        if enabled {
            self.parser(Arc::new(EmbeddedParser))
        } else {
            self.parser(Arc::new(DisabledParser))
        }
    }

    /// Switch between the stored scores and no language model at all
    pub fn use_language_model(self, enabled: bool) -> Self {
        if enabled {
            self.language_model(Arc::new(EmbeddedLanguageModel))
        } else {
            self.language_model(Arc::new(DisabledLanguageModel))
        }
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Analyzer {
        Analyzer {
            lexicons: self.lexicons,
            config: self.config,
            parser: self.parser,
            language_model: self.language_model,
            executor: executor_for(self.mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscan_core::annotation::{AnnotatedParagraph, AnnotatedWord, PosTag, SentenceParse, WordParse};

    fn word(text: &str, head: &str, lemma: &str) -> AnnotatedWord {
        AnnotatedWord {
            text: text.to_string(),
            pos: Some(PosTag {
                head: head.to_string(),
                features: vec!["soort".to_string(), "ev".to_string()],
            }),
            lemma: lemma.to_string(),
            ..Default::default()
        }
    }

    fn document(parsed: bool) -> AnnotatedDocument {
        let sentence = |words: Vec<AnnotatedWord>| AnnotatedSentence {
            parse: parsed.then(|| SentenceParse {
                words: vec![WordParse::default(); words.len()],
                clause: 1,
                ..Default::default()
            }),
            words,
            ..Default::default()
        };
        AnnotatedDocument {
            paragraphs: vec![
                AnnotatedParagraph {
                    sentences: vec![
                        sentence(vec![word("fiets", "N", "fiets")]),
                        sentence(vec![word("fiets", "N", "fiets")]),
                    ],
                },
                AnnotatedParagraph {
                    sentences: vec![sentence(vec![word("boom", "N", "boom")])],
                },
            ],
        }
    }

    #[test]
    fn test_structure_and_metadata() {
        let analyzer = Analyzer::builder().build();
        let analysis = analyzer.analyze_document("doc", &document(true)).unwrap();
        assert_eq!(analysis.tree.children.len(), 2);
        assert_eq!(analysis.tree.children[0].children.len(), 2);
        assert_eq!(analysis.metadata.sentences, 3);
        assert_eq!(analysis.metadata.parse_status, 0);
    }

    #[test]
    fn test_missing_stored_parse_counts_as_failure() {
        let analyzer = Analyzer::builder().build();
        let analysis = analyzer.analyze_document("doc", &document(false)).unwrap();
        assert_eq!(analysis.metadata.parse_status, 3);
    }

    #[test]
    fn test_disabled_parser_is_not_requested() {
        let analyzer = Analyzer::builder()
            .use_parser(false)
            .execution_mode(ExecutionMode::Sequential)
            .build();
        let analysis = analyzer.analyze_document("doc", &document(true)).unwrap();
        assert_eq!(analysis.metadata.parse_status, -1);
        assert_eq!(analysis.metadata.execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_unknown_nouns_are_logged_unless_disabled() {
        let analyzer = Analyzer::builder().build();
        let analysis = analyzer.analyze_document("doc", &document(true)).unwrap();
        assert_eq!(analysis.problems.len(), 3);
        assert_eq!(analysis.problems[0].axis, "noun");

        let quiet = Analyzer::builder()
            .config(AnalysisConfig {
                log_problems: false,
                ..Default::default()
            })
            .build();
        let analysis = quiet.analyze_document("doc", &document(true)).unwrap();
        assert!(analysis.problems.is_empty());
    }

    #[test]
    fn test_word_without_pos_is_fatal() {
        let mut doc = document(true);
        doc.paragraphs[0].sentences[0].words[0].pos = None;
        assert!(Analyzer::builder().build().analyze_document("doc", &doc).is_err());
    }
}
