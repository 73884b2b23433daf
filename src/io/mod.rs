pub mod fasta;
pub mod targets;

use anyhow::Result;
use std::cmp::Ordering;
use std::path::PathBuf;

/// 把命令行给出的输入展开成扫描文件列表。
/// 显式给出的文件保持原有顺序；目录展开为其中的普通文件，
/// 并按自然序排序（数字按数值比较，数字排在字母之前），
/// 这样 chr1, chr2, ..., chr10, ..., chr22, chrX, chrY 的顺序符合预期。
pub fn discover_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = PathBuf::from(input);
        let meta = std::fs::metadata(&path)
            .map_err(|e| anyhow::anyhow!("cannot access input '{}': {}", input, e))?;
        if meta.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(&path)
                .map_err(|e| anyhow::anyhow!("cannot list directory '{}': {}", input, e))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect();
            entries.sort_by(|a, b| {
                natural_cmp(
                    &a.file_name().unwrap_or_default().to_string_lossy(),
                    &b.file_name().unwrap_or_default().to_string_lossy(),
                )
            });
            files.extend(entries);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk {
    Num(u128),
    Text(String),
}

fn chunks(s: &str) -> Vec<Chunk> {
    let mut out = Vec::new();
    let mut digits = String::new();
    let mut text = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            if !text.is_empty() {
                out.push(Chunk::Text(std::mem::take(&mut text)));
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                out.push(Chunk::Num(digits.parse().unwrap_or(u128::MAX)));
                digits.clear();
            }
            text.push(ch);
        }
    }
    if !digits.is_empty() {
        out.push(Chunk::Num(digits.parse().unwrap_or(u128::MAX)));
    }
    if !text.is_empty() {
        out.push(Chunk::Text(text));
    }
    out
}

/// 数字感知的文件名比较。
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunks(a).cmp(&chunks(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(natural_cmp("chr2", "chr10"), Ordering::Less);
        assert_eq!(natural_cmp("chr10", "chr10"), Ordering::Equal);
        assert_eq!(natural_cmp("chr22", "chr3"), Ordering::Greater);
    }

    #[test]
    fn numbers_sort_before_letters() {
        assert_eq!(natural_cmp("chr22", "chrX"), Ordering::Less);
        assert_eq!(natural_cmp("chrX", "chrY"), Ordering::Less);
    }

    #[test]
    fn chromosome_order_end_to_end() {
        let mut names = vec!["chrX", "chr10", "chr1", "chr2", "chrY", "chr21"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["chr1", "chr2", "chr10", "chr21", "chrX", "chrY"]);
    }

    #[test]
    fn explicit_files_keep_argument_order() {
        let dir = std::env::temp_dir();
        let p1 = dir.join("motif_scan_in_b.txt");
        let p2 = dir.join("motif_scan_in_a.txt");
        std::fs::write(&p1, "ACGT").unwrap();
        std::fs::write(&p2, "ACGT").unwrap();

        let inputs = vec![
            p1.to_string_lossy().into_owned(),
            p2.to_string_lossy().into_owned(),
        ];
        let files = discover_inputs(&inputs).unwrap();
        std::fs::remove_file(&p1).ok();
        std::fs::remove_file(&p2).ok();

        assert_eq!(files, vec![p1, p2]);
    }

    #[test]
    fn directory_expands_in_natural_order() {
        let dir = std::env::temp_dir().join("motif_scan_dirscan");
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["chr10", "chr2", "chrX", "chr1"] {
            std::fs::write(dir.join(name), "ACGT").unwrap();
        }

        let files = discover_inputs(&[dir.to_string_lossy().into_owned()]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(names, vec!["chr1", "chr2", "chr10", "chrX"]);
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(discover_inputs(&["/nonexistent/motif_scan_dir".to_string()]).is_err());
    }
}
