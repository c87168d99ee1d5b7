//! Directory scanning: collect supported source files, extract candidates
//! from each, score the batch, and rank it.
//!
//! Files are parsed in parallel - extraction is shared-nothing per file -
//! but the file list is sorted first and the parallel map preserves that
//! order, so candidate ordering (and therefore output) is deterministic.
//! A file that cannot be read or parsed is recorded and skipped; it never
//! aborts the batch.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::candidate::Candidate;
use crate::extract::Extractor;
use crate::language::Language;
use crate::score;

/// Scan configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Restrict the scan to these extensions (without dots); `None` scans
    /// every supported extension.
    pub extensions: Option<Vec<String>>,
    /// Keep only the top N candidates after ranking; 0 keeps all.
    pub limit: usize,
}

/// A file the scan had to skip.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a scan: ranked candidates plus the files that were skipped.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub candidates: Vec<Candidate>,
    pub failures: Vec<FileFailure>,
}

/// Walk `root`, parse every supported file, and return the scored, ranked
/// candidate list.
pub fn scan(root: &Path, options: &ScanOptions) -> ScanOutcome {
    let mut failures = Vec::new();
    let files = collect_files(root, options.extensions.as_deref(), &mut failures);

    let results: Vec<Result<Vec<Candidate>, FileFailure>> =
        files.par_iter().map(|path| parse_file(path)).collect();

    let mut candidates = Vec::new();
    for result in results {
        match result {
            Ok(mut found) => candidates.append(&mut found),
            Err(failure) => {
                log::error!("skipping {}: {}", failure.path.display(), failure.error);
                failures.push(failure);
            }
        }
    }

    score::calculate(&mut candidates);

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.function.name.cmp(&b.function.name))
    });
    if options.limit > 0 {
        candidates.truncate(options.limit);
    }

    ScanOutcome {
        candidates,
        failures,
    }
}

/// Collect supported files under `root`, sorted by path. Hidden
/// directories and Go test files are skipped.
fn collect_files(
    root: &Path,
    extensions: Option<&[String]>,
    failures: &mut Vec<FileFailure>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).follow_links(true).into_iter();
    for entry in walker.filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        !(e.depth() > 0 && e.file_type().is_dir() && name.starts_with('.'))
    }) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                failures.push(FileFailure {
                    path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                    error: err.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !supported(path, extensions) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    files
}

fn supported(path: &Path, extensions: Option<&[String]>) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if let Some(allowed) = extensions {
        if !allowed.iter().any(|a| a == ext) {
            return false;
        }
    }
    if Language::from_extension(ext).is_none() {
        return false;
    }
    // Go test files are not fuzz targets.
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| !name.ends_with("_test.go"))
        .unwrap_or(false)
}

fn parse_file(path: &Path) -> Result<Vec<Candidate>, FileFailure> {
    let failure = |error: String| FileFailure {
        path: path.to_path_buf(),
        error,
    };
    let language = Language::from_path(path)
        .ok_or_else(|| failure("unsupported file extension".to_string()))?;
    let source = fs::read(path).map_err(|err| failure(err.to_string()))?;
    log::info!("parsing {} ({})", path.display(), language);
    Extractor::new(path.to_string_lossy(), language, &source)
        .extract()
        .map_err(|err| failure(err.to_string()))
}
