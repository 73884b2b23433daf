use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 根节点在 arena 中的固定下标。
pub const ROOT: u32 = 0;
/// parent / failure 的空哨兵（仅根节点使用）。
pub const NONE: u32 = u32::MAX;

/// trie 节点。所有节点由 [`PatternTrie`] 的 arena 统一持有，
/// `children` / `parent` / `failure` 一律存下标而不是引用，
/// 这样父指针和 suffix link 不会形成所有权环。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 从父节点进入本节点的边上的符号（根节点为 0，无意义）。
    pub symbol: u8,
    /// 符号 -> 子节点下标。BTreeMap 保证遍历与序列化顺序确定。
    pub children: BTreeMap<u8, u32>,
    /// 根到本节点的路径恰好等于某个完整 motif。
    pub terminal: bool,
    pub parent: u32,
    pub failure: u32,
}

/// motif 集合的前缀树。节点以 `Vec<Node>` arena 存放，下标即节点 id。
/// 插入全部完成后由 [`crate::index::links::link_suffixes`] 补上 failure 链。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternTrie {
    pub nodes: Vec<Node>,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                symbol: 0,
                children: BTreeMap::new(),
                terminal: false,
                parent: NONE,
                failure: NONE,
            }],
        }
    }

    /// 把一个 motif 作为一条根出发的路径插入，末端节点标记为 terminal。
    /// 重复插入同一 motif 是幂等的；空 motif 被忽略（根节点永远不是 terminal）。
    pub fn insert(&mut self, pattern: &[u8]) {
        if pattern.is_empty() {
            return;
        }
        let mut node = ROOT;
        for &sym in pattern {
            node = match self.nodes[node as usize].children.get(&sym).copied() {
                Some(child) => child,
                None => {
                    let id = self.nodes.len() as u32;
                    self.nodes.push(Node {
                        symbol: sym,
                        children: BTreeMap::new(),
                        terminal: false,
                        parent: node,
                        failure: NONE,
                    });
                    self.nodes[node as usize].children.insert(sym, id);
                    id
                }
            };
        }
        self.nodes[node as usize].terminal = true;
    }

    #[inline]
    pub fn child(&self, id: u32, sym: u8) -> Option<u32> {
        self.nodes[id as usize].children.get(&sym).copied()
    }

    #[inline]
    pub fn is_terminal(&self, id: u32) -> bool {
        self.nodes[id as usize].terminal
    }

    #[inline]
    pub fn failure(&self, id: u32) -> u32 {
        self.nodes[id as usize].failure
    }

    /// 沿 parent 链回溯到根，重建该节点对应的路径字符串（根到节点顺序）。
    /// 只在命中 terminal 节点时调用一次，不在热循环里使用。
    pub fn path(&self, id: u32) -> Vec<u8> {
        let mut out = Vec::new();
        let mut cur = id;
        while cur != ROOT {
            let n = &self.nodes[cur as usize];
            out.push(n.symbol);
            cur = n.parent;
        }
        out.reverse();
        out
    }

    /// 沿 `pattern` 从根走到对应节点（若该路径存在）。
    pub fn walk(&self, pattern: &[u8]) -> Option<u32> {
        let mut node = ROOT;
        for &sym in pattern {
            node = self.child(node, sym)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}
