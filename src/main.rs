use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

mod index;
mod io;
mod scan;
mod util;

use index::ac::{Automaton, IndexMeta};
use scan::report::{self, AggregateIndex};
use scan::{Match, Scanner};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "motif-scan", author, version, about = "Multi-pattern DNA motif scanner", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the motif automaton from a targets file and save it
    Index {
        /// Targets file, one motif per line
        targets: String,
        /// Output prefix for the automaton file
        #[arg(short, long, default_value = "motifs")]
        output: String,
    },
    /// Scan sequence files (raw or FASTA) against a saved automaton
    Scan {
        /// Path to the automaton (.mtx)
        #[arg(short = 'i', long = "index")]
        index: String,
        /// Sequence files or directories to scan
        inputs: Vec<String>,
        /// Per-file report output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        /// Write the motif -> occurrences aggregate index to this path
        #[arg(short = 'a', long = "aggregate")]
        aggregate: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 0)]
        threads: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Index { targets, output } => run_index(&targets, &output),
        Commands::Scan {
            index,
            inputs,
            out,
            aggregate,
            threads,
        } => run_scan(&index, &inputs, out.as_deref(), aggregate.as_deref(), threads),
    }
}

fn run_index(targets_path: &str, output: &str) -> Result<()> {
    let targets = io::targets::load_targets(targets_path)?;
    if targets.is_empty() {
        eprintln!("warning: targets file '{}' contains no motifs", targets_path);
    }

    let mut ac = Automaton::build(&targets);
    ac.set_meta(IndexMeta {
        targets_file: Some(targets_path.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });

    println!("targets: {}", targets_path);
    println!("motifs: {}", ac.n_patterns);
    println!("nodes: {}", ac.n_nodes());

    let out_path = format!("{}.mtx", output);
    ac.save_to_file(&out_path)
        .map_err(|e| anyhow::anyhow!("cannot write automaton to '{}': {}", out_path, e))?;
    println!("automaton saved: {}", out_path);
    Ok(())
}

/// 单个文件的扫描结果：文件内每个序列一组命中。
type FileMatches = Vec<(String, Vec<Match>)>;

fn scan_file(ac: &Automaton, path: &Path) -> Result<FileMatches> {
    let targets = io::fasta::read_scan_targets(&path.to_string_lossy())?;
    let scanner = Scanner::new(ac);
    Ok(targets
        .into_iter()
        .map(|t| {
            let matches = scanner.scan(&t.seq);
            (t.id, matches)
        })
        .collect())
}

fn run_scan(
    index_path: &str,
    inputs: &[String],
    out_path: Option<&str>,
    aggregate_path: Option<&str>,
    threads: usize,
) -> Result<()> {
    let ac = Automaton::load_from_file(index_path)
        .map_err(|e| anyhow::anyhow!("cannot load automaton from '{}': {}", index_path, e))?;

    let files = io::discover_inputs(inputs)?;
    if files.is_empty() {
        anyhow::bail!("no input files to scan");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("cannot build thread pool: {}", e))?;

    // map：每个文件一个独立扫描任务；collect 保持输入顺序，
    // 单个文件读取失败作为该文件的结果携带，不影响其他文件。
    let results: Vec<Result<FileMatches>> =
        pool.install(|| files.par_iter().map(|f| scan_file(&ac, f)).collect());

    let mut out_box: Box<dyn Write> = if let Some(p) = out_path {
        Box::new(std::io::BufWriter::new(std::fs::File::create(p)?))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    // reduce：按输入顺序写逐文件报告，同时填充聚合索引
    let mut agg = AggregateIndex::new();
    let mut n_failed = 0usize;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(file_matches) => {
                for (source, matches) in &file_matches {
                    report::write_sequence_report(&mut out_box, source, matches)?;
                    agg.add_matches(source, matches);
                }
            }
            Err(e) => {
                n_failed += 1;
                eprintln!("error: {}: {}", file.display(), e);
            }
        }
    }
    out_box.flush()?;

    if let Some(p) = aggregate_path {
        let mut f = std::io::BufWriter::new(std::fs::File::create(p)?);
        agg.write_to(&mut f)?;
        f.flush()?;
        eprintln!("aggregate index written: {} ({} motifs)", p, agg.n_patterns());
    }

    if n_failed == files.len() {
        anyhow::bail!("all {} input files failed to scan", n_failed);
    }
    Ok(())
}
