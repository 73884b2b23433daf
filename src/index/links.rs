use crate::index::trie::{PatternTrie, NONE, ROOT};
use std::collections::VecDeque;

/// 为 trie 中所有非根节点计算 failure（后缀）链。
///
/// 广度优先：队列以根的直接子节点为种子，保证处理任一节点时其父节点的
/// failure 链已经最终确定。对经由符号 `c` 从父节点 `p` 到达的节点 `n`：
///
/// 1. 候选节点取 `failure(p)`；
/// 2. 候选为空（即父节点是根）则 `failure(n) = root`；
/// 3. 候选有 `c` 边且目标不是 `n` 自身，则指向该子节点；
/// 4. 否则沿候选自己的 failure 链继续回退。
///
/// 结果满足：`failure(n)` 的路径是 `path(n)` 的最长真后缀且存在于 trie 中
/// （不存在时退到根）。本实现只建立单一 failure 指针，不建立指向其他
/// terminal 节点的 output 链，见 scan 模块测试中对该行为的固定。
pub fn link_suffixes(trie: &mut PatternTrie) {
    let mut queue: VecDeque<u32> = trie.nodes[ROOT as usize].children.values().copied().collect();

    while let Some(id) = queue.pop_front() {
        queue.extend(trie.nodes[id as usize].children.values().copied());

        let sym = trie.nodes[id as usize].symbol;
        let parent = trie.nodes[id as usize].parent;

        let mut candidate = trie.nodes[parent as usize].failure;
        let target = loop {
            if candidate == NONE {
                break ROOT;
            }
            match trie.child(candidate, sym) {
                Some(child) if child != id => break child,
                _ => candidate = trie.nodes[candidate as usize].failure,
            }
        };
        trie.nodes[id as usize].failure = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(patterns: &[&[u8]]) -> PatternTrie {
        let mut t = PatternTrie::new();
        for p in patterns {
            t.insert(p);
        }
        link_suffixes(&mut t);
        t
    }

    fn failure_path(t: &PatternTrie, pattern: &[u8]) -> Vec<u8> {
        let id = t.walk(pattern).unwrap();
        t.path(t.failure(id))
    }

    #[test]
    fn depth_one_nodes_link_to_root() {
        let t = built(&[b"A", b"C"]);
        assert_eq!(t.failure(t.walk(b"A").unwrap()), ROOT);
        assert_eq!(t.failure(t.walk(b"C").unwrap()), ROOT);
    }

    #[test]
    fn link_is_longest_proper_suffix_in_trie() {
        let t = built(&[b"ACGAC", b"C"]);
        assert_eq!(failure_path(&t, b"AC"), b"C");
        assert_eq!(failure_path(&t, b"ACG"), b"");
        assert_eq!(failure_path(&t, b"ACGA"), b"A");
        // "AC" 与 "C" 都是 "ACGAC" 的真后缀，取更长的 "AC"
        assert_eq!(failure_path(&t, b"ACGAC"), b"AC");
    }

    #[test]
    fn link_follows_parent_failure_chain() {
        let t = built(&[b"ACGT", b"CGT", b"GT", b"T"]);
        assert_eq!(failure_path(&t, b"ACGT"), b"CGT");
        assert_eq!(failure_path(&t, b"CGT"), b"GT");
        assert_eq!(failure_path(&t, b"GT"), b"T");
        assert_eq!(failure_path(&t, b"T"), b"");
    }

    #[test]
    fn no_node_links_to_itself() {
        let t = built(&[b"A", b"AA", b"AAA"]);
        for id in 1..t.len() as u32 {
            assert_ne!(t.failure(id), id);
        }
        // "AA" 的最长真后缀是 "A"
        assert_eq!(failure_path(&t, b"AA"), b"A");
        assert_eq!(failure_path(&t, b"AAA"), b"AA");
    }

    #[test]
    fn failure_is_proper_suffix_for_every_node() {
        let t = built(&[b"GATTACA", b"TACA", b"ATT", b"CA"]);
        for id in 1..t.len() as u32 {
            let p = t.path(id);
            let f = t.path(t.failure(id));
            assert!(f.len() < p.len());
            assert!(p.ends_with(&f));
            // failure 目标必须真实存在于 trie 中
            assert!(t.walk(&f).is_some());
        }
    }

    #[test]
    fn rebuild_is_deterministic() {
        let patterns: &[&[u8]] = &[b"ACGT", b"CGT", b"GATTACA", b"TT", b"ACG"];
        let a = built(patterns);
        let b = built(patterns);
        assert_eq!(a.len(), b.len());
        for id in 0..a.len() as u32 {
            assert_eq!(a.path(id), b.path(id));
            assert_eq!(a.is_terminal(id), b.is_terminal(id));
            if id != ROOT {
                assert_eq!(a.path(a.failure(id)), b.path(b.failure(id)));
            }
        }
    }
}
