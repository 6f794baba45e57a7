//! Single-pass tokenizer and stem-grouped frequency counting.

use std::collections::HashMap;

use ruslex_stem::{clean, stem};
use ruslex_utf8::lowercase;

/// Append-ordered stem counts.
///
/// Entries keep the order in which each stem was first seen; the side map
/// only resolves a stem to its slot. Neither sorted nor hash order ever
/// leaks into iteration.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(Vec<u8>, usize)>,
    slots: HashMap<Vec<u8>, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `stem`, inserting on first sight.
    pub fn record(&mut self, stem: &[u8]) {
        match self.slots.get(stem) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(stem.to_vec(), self.entries.len());
                self.entries.push((stem.to_vec(), 1));
            }
        }
    }

    /// Stems with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.entries
            .iter()
            .map(|(stem, count)| (stem.as_slice(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of one pass over an input: the display tokens and the stem counts.
#[derive(Debug, Default)]
pub struct Analysis {
    pub tokens: Vec<Vec<u8>>,
    pub stems: FrequencyTable,
}

/// Split `input` on runs of ASCII whitespace and build both outputs in one
/// pass.
///
/// Each raw token is punctuation-trimmed, then lowercased; empty results and
/// the bare `-` are dropped. Survivors land in the display sequence as-is and
/// are counted under their stemmed key.
pub fn analyze(input: &[u8]) -> Analysis {
    let mut analysis = Analysis::default();
    for raw in input.split(|b| b.is_ascii_whitespace()) {
        if raw.is_empty() {
            continue;
        }
        let token = lowercase(clean(raw));
        if token.is_empty() || token == b"-" {
            continue;
        }
        analysis.stems.record(&stem(&token));
        analysis.tokens.push(token);
    }
    analysis
}
