use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

use crate::scan::Match;

/// One rendered match line: 9-wide zero-padded uppercase hex offset,
/// a TAB, then the matched motif text.
pub fn format_match(m: &Match) -> String {
    format!("{:09X}\t{}", m.start, String::from_utf8_lossy(&m.text))
}

/// Per-sequence report block: the source identifier on its own line,
/// followed by one TAB-indented match line per hit, then a blank line.
pub fn write_sequence_report<W: Write>(out: &mut W, source: &str, matches: &[Match]) -> Result<()> {
    writeln!(out, "{}", source)?;
    for m in matches {
        writeln!(out, "\t{}", format_match(m))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Aggregate index across all scanned sequences: motif text -> occurrences.
/// Populated single-threaded after the parallel scans finish (reduce after
/// map); keys are kept sorted so the report is deterministic.
#[derive(Debug, Default)]
pub struct AggregateIndex {
    by_pattern: BTreeMap<String, Vec<(String, String)>>,
}

impl AggregateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_matches(&mut self, source: &str, matches: &[Match]) {
        for m in matches {
            let text = String::from_utf8_lossy(&m.text).into_owned();
            self.by_pattern
                .entry(text)
                .or_default()
                .push((format!("{:09X}", m.start), source.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_pattern.is_empty()
    }

    pub fn n_patterns(&self) -> usize {
        self.by_pattern.len()
    }

    /// One block per motif: the motif line, then a TAB-indented
    /// `offset TAB source` line per occurrence, then a blank line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for (pattern, occurrences) in &self.by_pattern {
            writeln!(out, "{}", pattern)?;
            for (offset, source) in occurrences {
                writeln!(out, "\t{}\t{}", offset, source)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
