//! Settings file: analysis thresholds, services and lexicon paths
//!
//! Read from TOML once at startup. Lexicon paths are resolved against the
//! directory that holds the settings file.

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tscan_core::domain::{Conn, Situation};
use tscan_core::{AnalysisConfig, LexiconKind, LexiconStore};

/// External service toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Ask the syntax parser
    #[serde(default = "default_true")]
    pub use_parser: bool,
    /// Ask the language model
    #[serde(default = "default_true")]
    pub use_language_model: bool,
    /// Latent semantic analysis; not supported
    pub use_lsa: bool,
    /// How per-sentence service calls are scheduled
    pub execution: ExecutionMode,
}

fn default_true() -> bool {
    true
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            use_parser: true,
            use_language_model: true,
            use_lsa: false,
            execution: ExecutionMode::default(),
        }
    }
}

/// Lexicon file locations; unset lexicons stay empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconPaths {
    /// Adjective semantic types
    pub adj_semtypes: Option<PathBuf>,
    /// Noun semantic types and compounds
    pub noun_semtypes: Option<PathBuf>,
    /// Verb semantic types
    pub verb_semtypes: Option<PathBuf>,
    /// Intensifiers
    pub intensify: Option<PathBuf>,
    /// General nouns
    pub general_nouns: Option<PathBuf>,
    /// General verbs
    pub general_verbs: Option<PathBuf>,
    /// General and specific adverbs
    pub adverbs: Option<PathBuf>,
    /// Staphorst word percentiles
    pub staph_word_freq_lex: Option<PathBuf>,
    /// Word frequencies
    pub word_freq_lex: Option<PathBuf>,
    /// Lemma frequencies
    pub lemma_freq_lex: Option<PathBuf>,
    /// Top-20000 word list
    pub top_freq_lex: Option<PathBuf>,
    /// Temporal connectives
    pub temporals: Option<PathBuf>,
    /// Enumerating connectives within a phrase
    pub opsom_connectors_wg: Option<PathBuf>,
    /// Enumerating connectives between clauses
    pub opsom_connectors_zin: Option<PathBuf>,
    /// Contrastive connectives
    pub contrast: Option<PathBuf>,
    /// Comparative connectives
    pub compars: Option<PathBuf>,
    /// Causal connectives
    pub causals: Option<PathBuf>,
    /// Causal situation words
    pub causal_situation: Option<PathBuf>,
    /// Space situation words
    pub space_situation: Option<PathBuf>,
    /// Time situation words
    pub time_situation: Option<PathBuf>,
    /// Emotion situation words
    pub emotion_situation: Option<PathBuf>,
    /// Preposition expressions
    pub voorzetselexpr: Option<PathBuf>,
    /// Abbreviations
    pub afkortingen: Option<PathBuf>,
}

impl LexiconPaths {
    /// Every lexicon with its settings key and configured path
    pub fn entries(&self) -> [(&'static str, LexiconKind, Option<&Path>); 23] {
        use LexiconKind as K;
        [
            ("adj_semtypes", K::AdjSemtypes, self.adj_semtypes.as_deref()),
            ("noun_semtypes", K::NounSemtypes, self.noun_semtypes.as_deref()),
            ("verb_semtypes", K::VerbSemtypes, self.verb_semtypes.as_deref()),
            ("intensify", K::Intensify, self.intensify.as_deref()),
            ("general_nouns", K::GeneralNouns, self.general_nouns.as_deref()),
            ("general_verbs", K::GeneralVerbs, self.general_verbs.as_deref()),
            ("adverbs", K::Adverbs, self.adverbs.as_deref()),
            ("staph_word_freq_lex", K::StaphWordFreq, self.staph_word_freq_lex.as_deref()),
            ("word_freq_lex", K::WordFreq, self.word_freq_lex.as_deref()),
            ("lemma_freq_lex", K::LemmaFreq, self.lemma_freq_lex.as_deref()),
            ("top_freq_lex", K::TopFreq, self.top_freq_lex.as_deref()),
            ("temporals", K::Connectives(Conn::Temporal), self.temporals.as_deref()),
            ("opsom_connectors_wg", K::Connectives(Conn::EnumPhrase), self.opsom_connectors_wg.as_deref()),
            ("opsom_connectors_zin", K::Connectives(Conn::EnumClause), self.opsom_connectors_zin.as_deref()),
            ("contrast", K::Connectives(Conn::Contrastive), self.contrast.as_deref()),
            ("compars", K::Connectives(Conn::Comparative), self.compars.as_deref()),
            ("causals", K::Connectives(Conn::Causal), self.causals.as_deref()),
            ("causal_situation", K::Situations(Situation::Causal), self.causal_situation.as_deref()),
            ("space_situation", K::Situations(Situation::Space), self.space_situation.as_deref()),
            ("time_situation", K::Situations(Situation::Time), self.time_situation.as_deref()),
            ("emotion_situation", K::Situations(Situation::Emotion), self.emotion_situation.as_deref()),
            ("voorzetselexpr", K::PrepExpressions, self.voorzetselexpr.as_deref()),
            ("afkortingen", K::Abbreviations, self.afkortingen.as_deref()),
        ]
    }
}

/// Complete settings for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Analysis thresholds
    pub analysis: AnalysisConfig,
    /// External services
    pub services: ServiceSettings,
    /// Lexicon files
    pub lexicons: LexiconPaths,
    /// Directory relative lexicon paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        settings.base_dir = base_dir.into();
        settings.validate()?;
        Ok(settings)
    }

    /// Read a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_toml_str(&content, base)
    }

    /// Check option ranges and unsupported features
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        if self.services.use_lsa {
            return Err(EngineError::ConfigError(
                "LSA is not supported, set services.use_lsa = false".to_string(),
            ));
        }
        Ok(())
    }

    /// A configured lexicon path resolved against the settings directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Load every configured lexicon
    ///
    /// An unset lexicon stays empty; a configured file that cannot be read
    /// is an error.
    pub fn load_lexicons(&self) -> Result<LexiconStore> {
        let mut builder = LexiconStore::builder().frequency_clip(self.analysis.frequency_clip);
        for (key, kind, path) in self.lexicons.entries() {
            match path {
                Some(path) => builder = builder.load(kind, &self.resolve(path))?,
                None => warn!(lexicon = key, "no lexicon configured, table stays empty"),
            }
        }
        let store = builder.build();
        info!(tables = store.summary().len(), "lexicons loaded");
        Ok(store)
    }

    /// Commented settings file with the default values
    pub fn default_toml() -> &'static str {
        DEFAULT_SETTINGS
    }
}

const DEFAULT_SETTINGS: &str = r#"# tscan settings
#
# Relative lexicon paths are resolved against the directory of this file.

[analysis]
# type-token ratio at which an MTLD factor closes
mtld_threshold = 0.72
# overlap candidates in the document window
overlap_size = 50
# lemmas seen at most this often count as rare
rarity_level = 10
# stop reading frequency lexicons beyond this relative frequency (0 disables)
frequency_clip = 90.0
# write <name>.problems.csv with lexicon misses
log_problems = true

[services]
use_parser = true
use_language_model = true
# LSA is not supported
use_lsa = false
# sequential or parallel
execution = "parallel"

[lexicons]
# adj_semtypes = "data/adjs_semtype.data"
# noun_semtypes = "data/nouns_semtype.data"
# verb_semtypes = "data/verbs_semtype.data"
# intensify = "data/intensivering.data"
# general_nouns = "data/algemene_nomina.data"
# general_verbs = "data/algemene_verba.data"
# adverbs = "data/bijwoorden.data"
# staph_word_freq_lex = "data/staphorsius.freq"
# word_freq_lex = "data/sonar_word.freq"
# lemma_freq_lex = "data/sonar_lemma.freq"
# top_freq_lex = "data/top20000.freq"
# temporals = "data/temporele_connectieven.data"
# opsom_connectors_wg = "data/opsommende_connectieven_wg.data"
# opsom_connectors_zin = "data/opsommende_connectieven_zin.data"
# contrast = "data/contrastieve_connectieven.data"
# compars = "data/comparatieve_connectieven.data"
# causals = "data/causale_connectieven.data"
# causal_situation = "data/causale_situatie.data"
# space_situation = "data/ruimte_situatie.data"
# time_situation = "data/tijd_situatie.data"
# emotion_situation = "data/emotie_situatie.data"
# voorzetselexpr = "data/voorzetselexpressies.data"
# afkortingen = "data/afkortingen.data"
"#;
