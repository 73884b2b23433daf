use anyhow::Result;
use std::io::BufRead;
use std::path::Path;

use crate::util::dna;

/// One independent scan target: a source identifier plus its
/// normalized (uppercased, whitespace-free) symbol buffer.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Streaming FASTA reader; each record becomes one scan target.
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<ScanTarget>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    let h = self.buf[1..].trim().to_string();
                    break h;
                }
            }
        };

        // Record id is the first whitespace-delimited word of the header
        let id = header
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();

        // Sequence lines until the next header or EOF
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                let h = self.buf[1..].trim().to_string();
                self.peek_header = Some(h);
                break;
            }
            seq.extend(dna::normalize_stripped(self.buf.as_bytes()));
        }

        Ok(Some(ScanTarget { id, seq }))
    }
}

/// Load every scan target from one input file.
///
/// The format is sniffed from the first byte: a '>' means FASTA (one target
/// per record, id `basename:record-id` when the file holds more than one
/// record), anything else is a raw single-sequence file (the whole file,
/// whitespace stripped, id = basename).
pub fn read_scan_targets(path: &str) -> Result<Vec<ScanTarget>> {
    let raw = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("cannot read sequence file '{}': {}", path, e))?;
    let basename = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let is_fasta = raw
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .map_or(false, |&b| b == b'>');

    if !is_fasta {
        return Ok(vec![ScanTarget {
            id: basename,
            seq: dna::normalize_stripped(&raw),
        }]);
    }

    let mut reader = FastaReader::new(std::io::Cursor::new(raw));
    let mut targets = Vec::new();
    while let Some(rec) = reader.next_record()? {
        targets.push(rec);
    }
    if targets.len() == 1 {
        targets[0].id = basename;
    } else {
        for t in &mut targets {
            t.id = format!("{}:{}", basename, t.id);
        }
    }
    Ok(targets)
}
