//! Closed vocabularies and small value types shared by every component

pub mod axes;
pub mod measure;
pub mod monoid;
pub mod semantic;
pub mod tags;
pub mod tier;

pub use axes::{Adverb, Afk, Conn, General, GeneralAspects, Intensify, Situation};
pub use measure::Measure;
pub use monoid::{Monoid, MonoidReduce};
pub use semantic::{SemAxis, SemType};
pub use tags::{Cgn, DistKind, Ner, Position, VerbForm, WordProp};
pub use tier::TopTier;
