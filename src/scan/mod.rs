pub mod report;

use crate::index::ac::Automaton;

/// 一次命中：`start` 是 motif 首字符在整条序列中的 0 基偏移。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub text: Vec<u8>,
}

/// 驱动自动机扫描一条序列。自动机只读，Scanner 本身无状态，
/// 每个输入序列可以各持有一个 Scanner 独立并行跑。
pub struct Scanner<'a> {
    ac: &'a Automaton,
}

impl<'a> Scanner<'a> {
    pub fn new(ac: &'a Automaton) -> Self {
        Self { ac }
    }

    /// 一个扫描段：从根状态出发走 `seq`，返回 (counter, 命中文本)。
    ///
    /// counter 统计本段内已消费的符号数。每个符号走三分支之一：
    /// - 有边：推进状态，消费符号。进入新状态后立刻查 terminal，
    ///   经 failure 回退进入的状态同样如此——failure 可能正好落在
    ///   一个较短 motif 的 terminal 节点上。
    /// - 无边且在根：根没有 failure 链，跳过该符号（消费，状态不变），
    ///   放弃当前起点的部分匹配。
    /// - 无边且不在根：沿 failure 链回退一步重试同一符号，不消费。
    ///
    /// 输入耗尽仍无命中则返回 (counter, None)。
    fn next_match(&self, seq: &[u8]) -> (usize, Option<Vec<u8>>) {
        let mut state = self.ac.start();
        let mut counter = 0usize;
        let mut pos = 0usize;

        while pos < seq.len() {
            let sym = seq[pos];
            if let Some(next) = self.ac.advance(state, sym) {
                state = next;
                if self.ac.is_match(state) {
                    return (counter, Some(self.ac.pattern_at(state)));
                }
                counter += 1;
                pos += 1;
            } else if state == self.ac.start() {
                counter += 1;
                pos += 1;
            } else {
                state = self.ac.fall_back(state);
                if self.ac.is_match(state) {
                    return (counter, Some(self.ac.pattern_at(state)));
                }
            }
        }
        (counter, None)
    }

    /// 全序列扫描：从偏移 i 起反复跑扫描段，段内命中 (counter, text) 时
    /// 绝对起点为 `i + counter + 1 - len`，下一段从命中起点的后一个位置
    /// 开始（`i + counter + 2 - len`），因此与上一条重叠的命中也能被发现。
    /// 段内无命中则整条序列扫描结束。
    ///
    /// 每次重启最多重走一个 motif 长度的符号，换来重叠正确性和实现的
    /// 简单性；motif 远短于序列时代价可以忽略。
    pub fn scan(&self, seq: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0usize;
        loop {
            let (counter, hit) = self.next_match(&seq[i..]);
            match hit {
                Some(text) => {
                    let start = i + counter + 1 - text.len();
                    i = i + counter + 2 - text.len();
                    matches.push(Match { start, text });
                }
                None => break,
            }
        }
        matches
    }
}
