//! End-to-end scan over the whole fixture tree.

use std::path::Path;

use fuzzscout::walk::{self, ScanOptions};

fn fixture_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

#[test]
fn scan_ranks_the_fixture_tree() {
    let outcome = walk::scan(&fixture_root(), &ScanOptions::default());
    assert!(outcome.failures.is_empty());
    assert!(outcome.candidates.len() > 50);

    // Scores descend, and scoring attached metrics everywhere.
    for pair in outcome.candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for c in &outcome.candidates {
        assert!(c.metrics.is_some(), "{} has no metrics", c);
        assert!(c.score >= 0.0);
    }

    // The keyword bonus dominates: the winner must look fuzz-friendly.
    let top = &outcome.candidates[0];
    assert!(top.metrics.unwrap().fuzz_friendly_name, "top was {}", top);
}

#[test]
fn scan_twice_yields_the_same_ranking() {
    let first = walk::scan(&fixture_root(), &ScanOptions::default());
    let second = walk::scan(&fixture_root(), &ScanOptions::default());
    let key = |o: &walk::ScanOutcome| -> Vec<(String, String)> {
        o.candidates
            .iter()
            .map(|c| (c.path.clone(), c.function.name.clone()))
            .collect()
    };
    assert_eq!(key(&first), key(&second));
}

#[test]
fn limit_and_extension_filter() {
    let outcome = walk::scan(
        &fixture_root(),
        &ScanOptions {
            extensions: Some(vec!["ts".to_string()]),
            limit: 1,
        },
    );
    assert_eq!(outcome.candidates.len(), 1);
    assert!(outcome.candidates[0].path.ends_with(".ts"));
}
