//! Fuzzscout - find functions worth fuzzing.
//!
//! Fuzzscout statically scans source files in Go, Java, JavaScript,
//! TypeScript and C, locates function- and method-like declarations,
//! builds a control flow graph per declaration, and ranks the results as
//! candidates for automatically generated fuzz tests.
//!
//! # Architecture
//!
//! The pipeline flows strictly downward:
//!
//! - `language`: per-language adapters mapping grammar node kinds to
//!   abstract declaration/statement roles (the only place raw kind
//!   strings are compared)
//! - `extract`: walks a parsed tree and produces [`Candidate`]s
//! - `cfg`: recursive control flow graph construction per function body
//! - `metrics`: cyclomatic complexity, line counts, naming and signature
//!   heuristics
//! - `score`: batch-relative weighted ranking
//! - `walk`: directory scanning and the parallel per-file driver
//! - `report`: JSON and console output
//!
//! Scoring is batch-relative: metrics are normalized against the maxima
//! of the batch being scored, so a candidate's score depends on what it
//! is ranked against.

pub mod candidate;
pub mod cfg;
pub mod cli;
pub mod extract;
pub mod language;
pub mod metrics;
pub mod report;
pub mod score;
pub mod tree;
pub mod walk;

pub use candidate::{Candidate, Class, Function, Parameter, Visibility, NO_NAME};
pub use cfg::ControlFlowGraph;
pub use extract::Extractor;
pub use language::{Language, LanguageAdapter};
pub use metrics::{Metrics, COMPLEXITY_UNAVAILABLE};
pub use score::Weights;
pub use walk::{ScanOptions, ScanOutcome};
