use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::index::links::link_suffixes;
use crate::index::trie::{PatternTrie, NONE, ROOT};
use crate::util::dna;

/// 构建信息（来源文件、命令行、时间戳），随自动机一起落盘。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexMeta {
    pub targets_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// motif 自动机：带 failure 链的前缀树，构建完成后只读。
/// 不含任何内部可变性，可被任意多个并发扫描共享。
#[derive(Debug, Serialize, Deserialize)]
pub struct Automaton {
    trie: PatternTrie,
    /// 插入的非空 motif 数量（重复计入，与输入列表对应）。
    pub n_patterns: usize,
    pub meta: IndexMeta,
}

impl Automaton {
    /// 从 motif 列表构建：先大写归一并全部插入，再统一建 failure 链。
    /// 空列表合法，得到只有根节点、永不命中的自动机。
    pub fn build<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut trie = PatternTrie::new();
        let mut n_patterns = 0usize;
        for pat in patterns {
            let norm = dna::normalize_seq(pat.as_ref());
            if norm.is_empty() {
                continue;
            }
            trie.insert(&norm);
            n_patterns += 1;
        }
        link_suffixes(&mut trie);
        Self { trie, n_patterns, meta: IndexMeta::default() }
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = meta;
    }

    /// 扫描起始状态（根）。
    #[inline]
    pub fn start(&self) -> u32 {
        ROOT
    }

    /// 状态推进：当前状态有 `sym` 边则返回新状态，否则 None。
    #[inline]
    pub fn advance(&self, state: u32, sym: u8) -> Option<u32> {
        self.trie.child(state, sym)
    }

    /// 失配回退一步：返回当前状态的 failure 目标。根没有 failure 链，
    /// 调用方必须先区分根状态（见 scan 模块的三分支步进）。
    #[inline]
    pub fn fall_back(&self, state: u32) -> u32 {
        let f = self.trie.failure(state);
        if f == NONE { ROOT } else { f }
    }

    #[inline]
    pub fn is_match(&self, state: u32) -> bool {
        self.trie.is_terminal(state)
    }

    /// 命中 terminal 状态后，重建对应的 motif 文本。
    pub fn pattern_at(&self, state: u32) -> Vec<u8> {
        self.trie.path(state)
    }

    pub fn n_nodes(&self) -> usize {
        self.trie.len()
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, self)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let ac: Self = bincode::deserialize_from(f)?;
        Ok(ac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_normalizes_case() {
        let ac = Automaton::build([b"acgt".as_ref()]);
        let mut state = ac.start();
        for &sym in b"ACGT" {
            state = ac.advance(state, sym).unwrap();
        }
        assert!(ac.is_match(state));
        assert_eq!(ac.pattern_at(state), b"ACGT");
    }

    #[test]
    fn empty_pattern_set_never_advances() {
        let ac = Automaton::build(std::iter::empty::<&[u8]>());
        assert_eq!(ac.n_patterns, 0);
        assert_eq!(ac.n_nodes(), 1);
        for &sym in b"ACGTN" {
            assert!(ac.advance(ac.start(), sym).is_none());
        }
    }

    #[test]
    fn duplicates_are_counted_but_share_nodes() {
        let ac = Automaton::build([b"TATA".as_ref(), b"tata", b"TATA"]);
        assert_eq!(ac.n_patterns, 3);
        // 根 + T A T A
        assert_eq!(ac.n_nodes(), 5);
    }

    #[test]
    fn save_load_round_trip() {
        let mut ac = Automaton::build([b"ACG".as_ref(), b"GATTACA"]);
        ac.set_meta(IndexMeta {
            targets_file: Some("targets".to_string()),
            build_args: None,
            build_timestamp: Some("2025-01-01T00:00:00Z".to_string()),
        });

        let dir = std::env::temp_dir();
        let path = dir.join("motif_scan_ac_round_trip.mtx");
        let path = path.to_string_lossy().to_string();
        ac.save_to_file(&path).unwrap();
        let back = Automaton::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back.n_patterns, ac.n_patterns);
        assert_eq!(back.n_nodes(), ac.n_nodes());
        assert_eq!(back.meta.targets_file.as_deref(), Some("targets"));
        let mut state = back.start();
        for &sym in b"GATTACA" {
            state = back.advance(state, sym).unwrap();
        }
        assert!(back.is_match(state));
    }
}
