//! Command-line interface for fuzzscout.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::language::Language;
use crate::report;
use crate::walk::{self, ScanOptions};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Find functions worth fuzzing.
///
/// Fuzzscout scans source trees for function and method declarations,
/// builds a control flow graph per declaration, and ranks the results by
/// cyclomatic complexity, size, and naming heuristics.
#[derive(Parser)]
#[command(name = "fuzzscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a file or directory for fuzz target candidates
    Scan(ScanArgs),
    /// List supported languages and file extensions
    Languages,
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Keep only the top N candidates (0 = all)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Restrict to these file extensions (comma separated, e.g. go,java)
    #[arg(short, long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Dump each candidate's control flow graph as a Graphviz file into
    /// this directory
    #[arg(long)]
    pub dot_dir: Option<PathBuf>,
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    if fs::metadata(&args.path).is_err() {
        eprintln!("Error: cannot access path {:?}", args.path);
        return Ok(EXIT_ERROR);
    }

    let extensions = if args.ext.is_empty() {
        None
    } else {
        Some(
            args.ext
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
        )
    };
    let options = ScanOptions {
        extensions,
        limit: args.limit,
    };

    let outcome = walk::scan(&args.path, &options);

    if let Some(dir) = &args.dot_dir {
        write_dot_files(dir, &outcome)?;
    }

    match args.format.as_str() {
        "json" => report::write_json(io::stdout().lock(), &outcome.candidates)?,
        _ => report::write_pretty(&mut io::stdout().lock(), &outcome)?,
    }

    Ok(EXIT_SUCCESS)
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    for (ext, language) in Language::EXTENSIONS {
        println!("{:<12} .{}", language.as_str(), ext);
    }
    Ok(EXIT_SUCCESS)
}

/// One `.gv` file per candidate that has a graph.
fn write_dot_files(dir: &PathBuf, outcome: &walk::ScanOutcome) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    for candidate in &outcome.candidates {
        let Some(cfg) = &candidate.cfg else {
            continue;
        };
        let name = format!(
            "{}_{}_{}.gv",
            candidate.package.as_deref().unwrap_or(""),
            candidate.class.as_ref().map(|c| c.name.as_str()).unwrap_or(""),
            candidate.function.name
        );
        let path = dir.join(name);
        fs::write(&path, cfg.to_dot())?;
        log::info!("saved cfg for {} to {}", candidate, path.display());
    }
    Ok(())
}
