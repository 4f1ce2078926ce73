//! Line readers for the tab-separated lexicon formats
//!
//! Every reader trims lines and skips blank lines and `#` comments.
//! Classification codes that do not parse make the whole file invalid:
//! a broken lexicon must stop the run before any document is touched.

use super::{Compound, ConnectorTable, FreqEntry, FreqTable, NounEntry, PrepExprTable};
use crate::domain::{Adverb, Afk, Cgn, General, Intensify, SemType, TopTier};
use crate::error::LexiconError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

type LoadResult<T> = std::result::Result<T, LexiconError>;

/// Open a lexicon file for reading
pub fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Non-empty, non-comment lines with their one-based line numbers
fn content_lines<'a, R: BufRead + 'a>(
    name: &'a str,
    reader: R,
) -> impl Iterator<Item = LoadResult<(usize, String)>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Err(source) => Some(Err(LexiconError::Read {
                lexicon: name.to_string(),
                source,
            })),
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((i + 1, trimmed.to_string())))
                }
            }
        })
}

fn malformed(name: &str, line: usize, expected: &'static str, content: &str) -> LexiconError {
    LexiconError::MalformedLine {
        lexicon: name.to_string(),
        line,
        expected,
        content: content.to_string(),
    }
}

fn number<T: std::str::FromStr>(name: &str, line: usize, value: &str) -> LoadResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LexiconError::InvalidNumber {
            lexicon: name.to_string(),
            line,
            value: value.to_string(),
        })
}

/// Insert `key`, replacing an earlier entry; every table keeps the last one
fn insert_last<T>(table: &mut HashMap<String, T>, name: &str, key: String, value: T) {
    if table.contains_key(&key) {
        debug!(lexicon = name, entry = %key, "multiple entry, last one wins");
    }
    table.insert(key, value);
}

/// Noun lexicon: `lemma \t code \t compound [\t head \t sat \t sat_clean \t parts]`
pub fn read_nouns<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, NounEntry>> {
    const SHAPE: &str = "3 or 7 tab separated fields with a known noun code";
    let mut nouns = HashMap::new();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 && fields.len() != 7 {
            return Err(malformed(name, no, SHAPE, &line));
        }
        let sem = SemType::noun_from_code(fields[1]).ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        let compound = if fields[2].trim() == "1" {
            if fields.len() != 7 {
                return Err(malformed(name, no, SHAPE, &line));
            }
            Some(Compound {
                head: fields[3].trim().to_lowercase(),
                satellite: fields[4].trim().to_lowercase(),
                satellite_clean: fields[5].trim().to_lowercase(),
                parts: number(name, no, fields[6])?,
            })
        } else {
            None
        };
        insert_last(&mut nouns, name, fields[0].trim().to_lowercase(), NounEntry { sem, compound });
    }
    info!(lexicon = name, entries = nouns.len(), "read noun lexicon");
    Ok(nouns)
}

/// Adjective lexicon: `lemma \t code [\t code]`; the second code applies
/// when the first one is `undefined`
pub fn read_adjectives<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, SemType>> {
    const SHAPE: &str = "2 or 3 tab separated fields with a known adjective code";
    let mut adjectives = HashMap::new();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(malformed(name, no, SHAPE, &line));
        }
        let mut sem =
            SemType::adjective_from_code(fields[1]).ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        if sem == SemType::UndefinedAdj && fields.len() == 3 {
            sem = SemType::adjective_from_code(fields[2])
                .ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        }
        insert_last(&mut adjectives, name, fields[0].trim().to_lowercase(), sem);
    }
    info!(lexicon = name, entries = adjectives.len(), "read adjective lexicon");
    Ok(adjectives)
}

/// Verb lexicon: `lemma \t concreteness \t aktionsart`
pub fn read_verbs<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, SemType>> {
    const SHAPE: &str = "3 tab separated fields with known verb codes";
    let mut verbs = HashMap::new();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(malformed(name, no, SHAPE, &line));
        }
        let sem = SemType::verb_from_codes(fields[1], fields[2])
            .ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        insert_last(&mut verbs, name, fields[0].trim().to_lowercase(), sem);
    }
    info!(lexicon = name, entries = verbs.len(), "read verb lexicon");
    Ok(verbs)
}

/// Two-field lexicon `term \t code`
fn read_single_axis<R, T, F>(
    name: &str,
    reader: R,
    shape: &'static str,
    parse: F,
) -> LoadResult<HashMap<String, T>>
where
    R: BufRead,
    F: Fn(&str) -> Option<T>,
{
    let mut table = HashMap::new();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(malformed(name, no, shape, &line));
        }
        let value = parse(fields[1]).ok_or_else(|| malformed(name, no, shape, &line))?;
        insert_last(&mut table, name, fields[0].trim().to_lowercase(), value);
    }
    info!(lexicon = name, entries = table.len(), "read lexicon");
    Ok(table)
}

/// Intensifier lexicon
pub fn read_intensifiers<R: BufRead>(
    name: &str,
    reader: R,
) -> LoadResult<HashMap<String, Intensify>> {
    read_single_axis(name, reader, "2 tab separated fields with an intensify code", Intensify::from_code)
}

/// General noun or general verb lexicon
pub fn read_general<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, General>> {
    read_single_axis(name, reader, "2 tab separated fields with general aspects", General::from_code)
}

/// Adverb lexicon
pub fn read_adverbs<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, Adverb>> {
    read_single_axis(name, reader, "2 tab separated fields with an adverb code", Adverb::from_code)
}

/// Frequency lexicon: `word \t count \t rank \t relative_freq`
///
/// Reading stops at the first singleton row, or once the relative
/// frequency passes `clip` when `clip > 0`.
pub fn read_frequencies<R: BufRead>(name: &str, reader: R, clip: f64) -> LoadResult<FreqTable> {
    const SHAPE: &str = "4 tab separated fields";
    let mut table = FreqTable::default();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            return Err(malformed(name, no, SHAPE, &line));
        }
        let count: u64 = number(name, no, fields[1])?;
        if count == 1 {
            // singletons are noise
            break;
        }
        let freq: f64 = number(name, no, fields[3])?;
        if clip > 0.0 && freq > clip {
            break;
        }
        table.insert(fields[0].trim().to_lowercase(), FreqEntry { count, freq });
    }
    info!(
        lexicon = name,
        entries = table.len(),
        total = table.total(),
        "read frequency lexicon"
    );
    Ok(table)
}

/// Top-20000 lexicon: rank is the position among non-empty lines
pub fn read_top_frequencies<R: BufRead>(
    name: &str,
    reader: R,
) -> LoadResult<HashMap<String, TopTier>> {
    const SHAPE: &str = "4 tab separated fields";
    let mut table = HashMap::new();
    for (rank, item) in content_lines(name, reader).enumerate() {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            return Err(malformed(name, no, SHAPE, &line));
        }
        table
            .entry(fields[0].trim().to_lowercase())
            .or_insert_with(|| TopTier::from_rank(rank + 1));
    }
    info!(lexicon = name, entries = table.len(), "read top frequency lexicon");
    Ok(table)
}

/// Connector or situation lexicon: `term` or `term \t TAG`
///
/// A tag restricts a single word to one POS category. Tagged multi-word
/// entries are not supported and are skipped.
pub fn read_connectors<R: BufRead>(name: &str, reader: R) -> LoadResult<ConnectorTable> {
    const SHAPE: &str = "1 or 2 tab separated fields of at most 4 words";
    let mut table = ConnectorTable::default();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() > 2 {
            return Err(malformed(name, no, SHAPE, &line));
        }
        let tag = fields.get(1).map_or(Cgn::Unass, |t| Cgn::from_head(t));
        let words: Vec<String> = fields[0].split_whitespace().map(str::to_lowercase).collect();
        match words.len() {
            0 => continue,
            1 => table.insert_single(tag, &words[0]),
            2..=4 if tag != Cgn::Unass => {
                warn!(lexicon = name, line = no, "tagged multi-word entry skipped: {line}");
            }
            2..=4 => table.insert_multi(words.join(" ")),
            _ => return Err(malformed(name, no, SHAPE, &line)),
        }
    }
    info!(
        lexicon = name,
        single = table.single_len(),
        multi = table.multi_len(),
        "read connector lexicon"
    );
    Ok(table)
}

/// Preposition-expression lexicon: 2 to 4 whitespace separated tokens
pub fn read_prep_expressions<R: BufRead>(name: &str, reader: R) -> LoadResult<PrepExprTable> {
    let mut table = PrepExprTable::default();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
        if !table.insert(&words) {
            debug!(lexicon = name, line = no, "expression of unsupported length skipped");
        }
    }
    info!(lexicon = name, entries = table.len(), "read preposition expressions");
    Ok(table)
}

/// Abbreviation lexicon: 1 to 3 abbreviation tokens followed by a domain code
///
/// Keys keep their case, abbreviations are case sensitive.
pub fn read_abbreviations<R: BufRead>(name: &str, reader: R) -> LoadResult<HashMap<String, Afk>> {
    const SHAPE: &str = "1 to 3 tokens followed by an abbreviation code";
    let mut table = HashMap::new();
    for item in content_lines(name, reader) {
        let (no, line) = item?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&tokens.len()) {
            debug!(lexicon = name, line = no, "abbreviation line skipped: {line}");
            continue;
        }
        let (code, words) = tokens.split_last().ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        let afk = Afk::from_code(code).ok_or_else(|| malformed(name, no, SHAPE, &line))?;
        insert_last(&mut table, name, words.join(" "), afk);
    }
    info!(lexicon = name, entries = table.len(), "read abbreviations");
    Ok(table)
}
