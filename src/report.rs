//! Output formatting for scan results.
//!
//! Two formats: a machine-readable JSON array of candidates (the stable
//! wire shape downstream tooling consumes) and a colored ranked table for
//! terminals.

use std::io;

use colored::Colorize;

use crate::candidate::Candidate;
use crate::walk::ScanOutcome;

/// Write the candidates as a JSON array.
pub fn write_json<W: io::Write>(out: W, candidates: &[Candidate]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(out, candidates)?;
    Ok(())
}

/// Write a human-readable ranked listing.
pub fn write_pretty<W: io::Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    if outcome.candidates.is_empty() {
        writeln!(out, "{}", "no candidates found".yellow())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("{} candidates", outcome.candidates.len()).bold()
        )?;
        writeln!(out)?;
    }

    for (rank, candidate) in outcome.candidates.iter().enumerate() {
        let mut qualified = candidate.function.name.clone();
        if let Some(class) = &candidate.class {
            qualified = format!("{}.{}", class.name, qualified);
        }
        if let Some(package) = &candidate.package {
            qualified = format!("{}.{}", package, qualified);
        }
        writeln!(
            out,
            "{:>4}. {} {}",
            rank + 1,
            format!("[{:6.2}]", candidate.score).cyan(),
            qualified.bold()
        )?;
        writeln!(
            out,
            "      {} {}",
            candidate.language.to_string().dimmed(),
            candidate.path.dimmed()
        )?;
        if let Some(metrics) = &candidate.metrics {
            let mut line = format!(
                "      complexity {}  lines {}",
                metrics.cyclomatic_complexity, metrics.lines_of_code
            );
            if metrics.fuzz_friendly_name {
                line.push_str("  fuzz-friendly");
            }
            if metrics.primitive_parameters_only {
                line.push_str("  primitive-params");
            }
            writeln!(out, "{}", line.dimmed())?;
        }
    }

    if !outcome.failures.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!("{} files skipped:", outcome.failures.len()).yellow()
        )?;
        for failure in &outcome.failures {
            writeln!(out, "  {}: {}", failure.path.display(), failure.error)?;
        }
    }

    Ok(())
}
