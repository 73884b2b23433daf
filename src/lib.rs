//! # motif-scan
//!
//! 多模式 DNA motif 扫描器。
//!
//! 本 crate 在一组长序列中查找一组短 motif 的所有出现位置，包括：
//!
//! - **自动机构建**：motif 集合的前缀树，广度优先补全 failure（后缀）链
//! - **线性扫描**：每个扫描段报告最先完成的命中，重启点取命中起点的
//!   后一个位置，因此相互重叠的命中也会被发现
//! - **索引落盘**：自动机构建一次后序列化保存，可跨多次扫描复用
//! - **结果汇总**：按输入顺序输出逐文件报告，并汇总 motif -> 出现位置索引
//!
//! ## 快速示例
//!
//! ```rust
//! use motif_scan::index::ac::Automaton;
//! use motif_scan::scan::Scanner;
//!
//! let ac = Automaton::build([b"GATTACA".as_ref(), b"TACA"]);
//! let scanner = Scanner::new(&ac);
//!
//! let matches = scanner.scan(b"CGATTACAT");
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].start, 1);
//! assert_eq!(matches[0].text, b"GATTACA");
//! assert_eq!(matches[1].start, 4);
//! assert_eq!(matches[1].text, b"TACA");
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — motif 列表 / 序列文件读取与输入目录展开
//! - [`index`] — trie、failure 链与自动机（构建后只读，可并发共享）
//! - [`scan`] — 扫描循环、命中记录与报告输出
//! - [`util`] — 序列大小写归一等工具函数

pub mod index;
pub mod io;
pub mod scan;
pub mod util;
