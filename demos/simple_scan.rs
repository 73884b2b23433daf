//! 演示如何在 library 模式下使用 motif-scan 扫描序列。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_scan
//! ```

use motif_scan::index::ac::Automaton;
use motif_scan::scan::report::{format_match, AggregateIndex};
use motif_scan::scan::Scanner;
use motif_scan::util::dna;

fn main() {
    // 1. 构建 motif 自动机
    let motifs: &[&[u8]] = &[b"gattaca", b"TATA", b"acg"];
    let ac = Automaton::build(motifs.iter().copied());
    println!("motif 数: {}", ac.n_patterns);
    println!("节点数: {}", ac.n_nodes());

    // 2. 扫描一条序列（大小写无关）
    let raw = b"ttGATTACAtataTATAcacgACG";
    let seq = dna::normalize_seq(raw);
    println!("\n序列: {}", std::str::from_utf8(raw).unwrap());

    let scanner = Scanner::new(&ac);
    let matches = scanner.scan(&seq);
    println!("命中 {} 处:", matches.len());
    for m in &matches {
        println!("  {}", format_match(m));
    }

    // 3. 汇总为 motif -> 出现位置索引
    let mut agg = AggregateIndex::new();
    agg.add_matches("demo", &matches);
    let mut buf = Vec::new();
    agg.write_to(&mut buf).unwrap();
    println!("\n聚合索引:\n{}", String::from_utf8(buf).unwrap());
}
