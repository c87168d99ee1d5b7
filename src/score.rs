//! Batch-relative candidate scoring.
//!
//! Each metric is normalized against the maximum value in the batch, then
//! combined with fixed weights. Scores are therefore relative rankings:
//! the same candidate can score differently depending on what else is in
//! its batch, which is deliberate.

use crate::candidate::Candidate;

/// Weights applied to the normalized metrics.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub complexity: f64,
    pub lines: f64,
    pub fuzz_friendly_name: f64,
    /// Tracked but currently a filter signal, not a scoring signal.
    pub primitive_parameters: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            complexity: 4.0,
            lines: 1.0,
            fuzz_friendly_name: 5.0,
            primitive_parameters: 0.0,
        }
    }
}

/// Score a batch with the default weights.
pub fn calculate(candidates: &mut [Candidate]) {
    calculate_weighted(candidates, &Weights::default());
}

/// Score a batch. Two strict passes: the first ensures every candidate's
/// metrics exist and finds the batch maxima, the second normalizes and
/// combines. Re-running on an unchanged batch reproduces the same scores.
pub fn calculate_weighted(candidates: &mut [Candidate], weights: &Weights) {
    log::info!("calculating score for {} candidates", candidates.len());

    let mut max_complexity = 0i64;
    let mut max_lines = 0i64;
    for candidate in candidates.iter_mut() {
        let metrics = candidate.ensure_metrics();
        max_complexity = max_complexity.max(metrics.cyclomatic_complexity);
        max_lines = max_lines.max(metrics.lines_of_code);
    }

    for candidate in candidates.iter_mut() {
        let Some(metrics) = candidate.metrics else {
            continue;
        };
        candidate.score = normalize(metrics.cyclomatic_complexity, max_complexity)
            * weights.complexity
            + normalize(metrics.lines_of_code, max_lines) * weights.lines
            + normalize_bool(metrics.fuzz_friendly_name) * weights.fuzz_friendly_name
            + normalize_bool(metrics.primitive_parameters_only) * weights.primitive_parameters;
    }
}

/// Normalized metric in [0, 1]. A batch maximum of 0 (all-empty batch) and
/// the unavailable-complexity sentinel both normalize to 0.
fn normalize(value: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    value.max(0) as f64 / max as f64
}

fn normalize_bool(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Function;
    use crate::language::Language;
    use crate::metrics::Metrics;

    fn candidate(name: &str, complexity: i64, lines: i64, fuzzy: bool) -> Candidate {
        let mut c = Candidate::new(
            "test.java",
            Language::Java,
            Function {
                name: name.to_string(),
                ..Function::default()
            },
            "",
        );
        c.metrics = Some(Metrics {
            lines_of_code: lines,
            cyclomatic_complexity: complexity,
            fuzz_friendly_name: fuzzy,
            primitive_parameters_only: false,
        });
        c
    }

    #[test]
    fn single_candidate_is_its_own_maximum() {
        let mut batch = vec![candidate("parse", 3, 10, true)];
        calculate(&mut batch);
        // normalized complexity and lines are both 1.0
        assert_eq!(batch[0].score, 4.0 + 1.0 + 5.0);
    }

    #[test]
    fn batch_membership_changes_the_score() {
        let mut alone = vec![candidate("a", 2, 5, false)];
        calculate(&mut alone);

        let mut batch = vec![candidate("a", 2, 5, false), candidate("b", 4, 10, false)];
        calculate(&mut batch);

        assert!(batch[0].score < alone[0].score);
        assert_eq!(batch[0].score, 0.5 * 4.0 + 0.5 * 1.0);
        assert_eq!(batch[1].score, 4.0 + 1.0);
    }

    #[test]
    fn rescoring_is_idempotent() {
        let mut batch = vec![candidate("a", 2, 5, true), candidate("b", 4, 10, false)];
        calculate(&mut batch);
        let first: Vec<f64> = batch.iter().map(|c| c.score).collect();
        calculate(&mut batch);
        let second: Vec<f64> = batch.iter().map(|c| c.score).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_maximum_normalizes_to_zero() {
        let mut batch = vec![candidate("a", 0, 0, false), candidate("b", 0, 0, false)];
        calculate(&mut batch);
        assert_eq!(batch[0].score, 0.0);
        assert_eq!(batch[1].score, 0.0);
    }

    #[test]
    fn unavailable_complexity_does_not_go_negative() {
        let mut batch = vec![candidate("a", -1, 4, false), candidate("b", 3, 8, false)];
        calculate(&mut batch);
        assert!(batch[0].score >= 0.0);
        assert_eq!(batch[0].score, 0.5 * 1.0);
    }

    #[test]
    fn primitive_parameters_carry_no_weight_by_default() {
        let mut with = vec![candidate("a", 1, 1, false)];
        with[0].metrics = Some(Metrics {
            primitive_parameters_only: true,
            ..with[0].metrics.unwrap()
        });
        let mut without = vec![candidate("a", 1, 1, false)];
        calculate(&mut with);
        calculate(&mut without);
        assert_eq!(with[0].score, without[0].score);
    }
}
