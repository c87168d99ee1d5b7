//! Structural metrics derived from a candidate's graph, source slice, and
//! signature.

use serde::Serialize;
use thiserror::Error;

use crate::cfg::ControlFlowGraph;
use crate::language::Language;

/// Complexity value reported when no graph could be built.
pub const COMPLEXITY_UNAVAILABLE: i64 = -1;

/// Name fragments suggesting a function processes external input.
pub const FUZZ_FRIENDLY_KEYWORDS: &[&str] = &[
    "encode", "decode", "parse", "encrypt", "decrypt", "open", "load",
];

/// Metrics record of one candidate. Computed once, immutable thereafter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub lines_of_code: i64,
    pub cyclomatic_complexity: i64,
    pub fuzz_friendly_name: bool,
    pub primitive_parameters_only: bool,
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("no control flow graph")]
    NoGraph,
}

/// McCabe complexity, `edges - nodes + 2`, valid because every graph the
/// builder produces is single-entry/single-exit.
pub fn cyclomatic_complexity(cfg: Option<&ControlFlowGraph>) -> Result<i64, MetricsError> {
    let cfg = cfg.ok_or(MetricsError::NoGraph)?;
    Ok(cfg.edge_count() as i64 - cfg.node_count() as i64 + 2)
}

/// Naive line count over the raw source slice: blank lines and comments
/// included, by design.
pub fn count_lines(code: &str) -> i64 {
    code.replace("\r\n", "\n").split('\n').count() as i64
}

/// Case-insensitive substring match against the fuzz-friendly keyword set.
pub fn has_fuzz_friendly_name(name: &str) -> bool {
    let name = name.to_lowercase();
    FUZZ_FRIENDLY_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}

/// Whether every parameter type looks primitive for the given language.
/// Languages without a primitive table report `false` with a warning.
pub fn has_primitive_parameters_only(param_types: &[&str], language: Language) -> bool {
    let Some(primitives) = language.adapter().primitive_types() else {
        log::warn!("no primitive parameter table for language {}", language);
        return false;
    };
    param_types.iter().all(|ty| primitives.is_match(ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzz_friendly_names_match_case_insensitively() {
        for name in [
            "encode", "EnCode", "ENCODE", "enCODE", "decode", "parse", "encrypt", "decrypt",
            "open", "load", "ParseConfig", "jsonDecode",
        ] {
            assert!(has_fuzz_friendly_name(name), "{name} should match");
        }
        for name in ["store", "Close", "render", ""] {
            assert!(!has_fuzz_friendly_name(name), "{name} should not match");
        }
    }

    #[test]
    fn line_count_normalizes_crlf() {
        assert_eq!(count_lines("a\nb\nc"), 3);
        assert_eq!(count_lines("a\r\nb\r\nc"), 3);
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("one line"), 1);
    }

    #[test]
    fn complexity_without_graph_is_an_error() {
        assert!(matches!(
            cyclomatic_complexity(None),
            Err(MetricsError::NoGraph)
        ));
    }

    #[test]
    fn primitive_parameters_java() {
        assert!(has_primitive_parameters_only(
            &["int", "String", "long[]"],
            Language::Java
        ));
        assert!(!has_primitive_parameters_only(
            &["int", "MyClass"],
            Language::Java
        ));
        // Vacuously true for a parameterless function.
        assert!(has_primitive_parameters_only(&[], Language::Java));
    }

    #[test]
    fn primitive_parameters_unsupported_language() {
        assert!(!has_primitive_parameters_only(&["int"], Language::Go));
        assert!(!has_primitive_parameters_only(&[], Language::C));
    }
}
