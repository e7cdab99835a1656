use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fxhash::FxHashMap;

use crate::consts::AUDIT_HEADER;

///
/// Running tally of family-list tokens that were not valid family identifiers.
///
/// Tokens are kept verbatim and in first-seen order; [UnknownTokenLedger::most_common]
/// reports them by descending count with ties left in first-seen order.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownTokenLedger {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl UnknownTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded occurrences over all tokens.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    ///
    /// Tokens with their counts, most frequent first.
    ///
    pub fn most_common(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        // stable, so equal counts stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    ///
    /// Write the audit table: a `# token<TAB>count` header then one line per token.
    ///
    pub fn write_audit<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", AUDIT_HEADER)?;
        for (token, count) in self.most_common() {
            writeln!(writer, "{}\t{}", token, count)?;
        }
        writer.flush()
    }

    ///
    /// Write the audit table to a plain text file.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn write_audit_file<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_audit(BufWriter::new(file))
    }
}

impl Extend<String> for UnknownTokenLedger {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.record(&token);
        }
    }
}
