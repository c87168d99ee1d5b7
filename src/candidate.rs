//! Candidate data model.
//!
//! A [`Candidate`] is one discovered function or method together with its
//! control flow graph, metrics, and score. Candidates are created by the
//! extractor, get their graph attached at extraction time (the syntax tree
//! does not outlive the parse), and are mutated in place by the metrics
//! engine and the batch scorer.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::cfg::ControlFlowGraph;
use crate::language::Language;
use crate::metrics::{self, Metrics, COMPLEXITY_UNAVAILABLE};

/// Sentinel for anonymous parameter names and unknown types.
pub const NO_NAME: &str = "?";

/// Declaration visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter or return value, with its type as literally spelled
/// in source. No semantic resolution is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Parameter with the anonymous-name sentinel.
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self::new(NO_NAME, ty)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

/// A function or method signature as extracted from source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_values: Vec<Parameter>,
    pub visibility: Visibility,
    #[serde(rename = "static")]
    pub is_static: bool,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        let returns: Vec<String> = self.return_values.iter().map(|p| p.to_string()).collect();
        let mut mods = String::new();
        if self.is_static {
            mods.push_str("static ");
        }
        mods.push_str(self.visibility.as_str());
        write!(
            f,
            "{}({})({}) [{}]",
            self.name,
            params.join(", "),
            returns.join(", "),
            mods
        )
    }
}

/// The owning class of a method, with any constructors collected from the
/// same class body (used downstream to construct receiver objects in
/// generated tests).
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub constructors: Vec<Function>,
}

impl Class {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
        }
    }
}

/// One discovered function/method plus everything derived from it.
///
/// The serialized shape is fixed for downstream consumers: `class`
/// serializes as the bare class name and the graph is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub path: String,
    pub function: Function,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "class_name")]
    pub class: Option<Class>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    pub code: String,
    pub language: Language,
    #[serde(skip)]
    pub cfg: Option<ControlFlowGraph>,
}

fn class_name<S: Serializer>(class: &Option<Class>, serializer: S) -> Result<S::Ok, S::Error> {
    match class {
        Some(c) => serializer.serialize_str(&c.name),
        None => serializer.serialize_none(),
    }
}

impl Candidate {
    pub fn new(
        path: impl Into<String>,
        language: Language,
        function: Function,
        code: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            function,
            class: None,
            package: None,
            score: 0.0,
            metrics: None,
            code: code.into(),
            language,
            cfg: None,
        }
    }

    /// Compute the metrics record once; later calls reuse it.
    ///
    /// A candidate without a graph (declaration without a parsable body)
    /// reports the explicit unavailable sentinel for complexity, never a
    /// silent zero.
    pub fn ensure_metrics(&mut self) -> Metrics {
        if let Some(m) = self.metrics {
            return m;
        }
        log::debug!("calculating metrics for {}", self.function.name);
        let cyclomatic_complexity = match metrics::cyclomatic_complexity(self.cfg.as_ref()) {
            Ok(cc) => cc,
            Err(err) => {
                log::warn!(
                    "unable to calculate cyclomatic complexity for {}: {}",
                    self.function.name,
                    err
                );
                COMPLEXITY_UNAVAILABLE
            }
        };
        let param_types: Vec<&str> = self
            .function
            .parameters
            .iter()
            .map(|p| p.ty.as_str())
            .collect();
        let m = Metrics {
            lines_of_code: metrics::count_lines(&self.code),
            cyclomatic_complexity,
            fuzz_friendly_name: metrics::has_fuzz_friendly_name(&self.function.name),
            primitive_parameters_only: metrics::has_primitive_parameters_only(
                &param_types,
                self.language,
            ),
        };
        self.metrics = Some(m);
        m
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.function.to_string();
        if let Some(class) = &self.class {
            out = format!("{}:{}", class.name, out);
        }
        if let Some(package) = &self.package {
            out = format!("{}.{}", package, out);
        }
        write!(f, "{} ({})", out, self.path)
    }
}
