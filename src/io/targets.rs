use anyhow::Result;
use std::io::BufRead;

use crate::util::dna;

/// Load the motif list: one motif per line, trimmed and uppercased.
/// Blank lines are skipped; duplicates are kept (insertion is idempotent
/// downstream, so they are harmless).
pub fn load_targets(path: &str) -> Result<Vec<Vec<u8>>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open targets file '{}': {}", path, e))?;
    let reader = std::io::BufReader::new(fh);

    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let motif = line.trim();
        if motif.is_empty() {
            continue;
        }
        targets.push(dna::normalize_seq(motif.as_bytes()));
    }
    Ok(targets)
}
