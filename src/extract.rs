//! Declaration extraction: walk a parsed source file and produce one
//! [`Candidate`] per function- or method-like declaration.
//!
//! Source bytes are injected rather than read here, so extraction is
//! testable without a filesystem. The control flow graph is built while
//! the syntax tree is still alive and attached to the candidate; nothing
//! downstream needs the tree again.

use thiserror::Error;
use tree_sitter::Node;

use crate::candidate::{Candidate, Class};
use crate::cfg;
use crate::language::{DeclarationRole, Language, LanguageAdapter};
use crate::tree::{named_children, node_text};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("incompatible tree-sitter grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("tree-sitter produced no tree for {0}")]
    Parse(String),
}

/// Extracts candidates from one source buffer.
pub struct Extractor<'s> {
    path: String,
    language: Language,
    adapter: &'static dyn LanguageAdapter,
    source: &'s [u8],
}

impl<'s> Extractor<'s> {
    pub fn new(path: impl Into<String>, language: Language, source: &'s [u8]) -> Self {
        Self {
            path: path.into(),
            language,
            adapter: language.adapter(),
            source,
        }
    }

    /// Parse the buffer and collect all candidates, in source order.
    pub fn extract(&self) -> Result<Vec<Candidate>, ExtractError> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.adapter.grammar())?;
        let tree = parser
            .parse(self.source, None)
            .ok_or_else(|| ExtractError::Parse(self.path.clone()))?;

        let mut candidates = Vec::new();
        let mut package = None;
        self.walk(tree.root_node(), &mut candidates, &mut package);

        // The package declaration applies to every candidate in the file.
        if package.is_some() {
            for candidate in &mut candidates {
                candidate.package = package.clone();
            }
        }
        Ok(candidates)
    }

    fn walk(&self, node: Node, out: &mut Vec<Candidate>, package: &mut Option<String>) {
        for child in named_children(node) {
            match self.adapter.declaration_role(child.kind()) {
                DeclarationRole::Function => self.push_function(child, None, out),
                DeclarationRole::Method => {
                    // Receiver-style method at top level (Go).
                    let class = self
                        .adapter
                        .method_class(child, self.source)
                        .map(Class::named);
                    self.push_function(child, class, out);
                }
                DeclarationRole::VariableBinding => {
                    if let Some((function, literal)) =
                        self.adapter.variable_function(child, self.source)
                    {
                        if function.name.is_empty() {
                            continue;
                        }
                        let mut candidate = Candidate::new(
                            self.path.clone(),
                            self.language,
                            function,
                            node_text(child, self.source),
                        );
                        candidate.cfg = literal
                            .child_by_field_name("body")
                            .map(|body| cfg::build(body, self.adapter, self.source));
                        log::debug!("found candidate: {}", candidate);
                        out.push(candidate);
                    }
                }
                DeclarationRole::Class => self.walk_class(child, out),
                DeclarationRole::Package => {
                    if package.is_some() {
                        log::warn!("multiple package declarations in {}", self.path);
                        continue;
                    }
                    *package = named_children(child)
                        .next()
                        .map(|n| node_text(n, self.source).to_string());
                }
                DeclarationRole::Constructor => {
                    // Constructors outside a class body have no receiver to
                    // attach to; nothing to extract.
                }
                DeclarationRole::Ignored => {}
                DeclarationRole::Unknown => {
                    log::debug!("unhandled node kind: {}", child.kind());
                }
            }
        }
    }

    /// Recurse into a class body, then backfill the class (with its
    /// collected constructors) onto every candidate found inside that does
    /// not already have one from a nested class.
    fn walk_class(&self, node: Node, out: &mut Vec<Candidate>) {
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(n, self.source).to_string())
            .unwrap_or_default();
        let Some(body) = node.child_by_field_name("body") else {
            return;
        };

        let mut members = Vec::new();
        let mut constructors = Vec::new();
        for child in named_children(body) {
            match self.adapter.declaration_role(child.kind()) {
                DeclarationRole::Constructor => {
                    constructors.push(self.adapter.function(child, self.source));
                }
                DeclarationRole::Method | DeclarationRole::Function => {
                    if self.adapter.is_constructor(child, self.source) {
                        constructors.push(self.adapter.function(child, self.source));
                    } else {
                        self.push_function(child, None, &mut members);
                    }
                }
                DeclarationRole::Class => self.walk_class(child, &mut members),
                DeclarationRole::Ignored => {}
                _ => log::debug!("unhandled class member kind: {}", child.kind()),
            }
        }

        let class = Class { name, constructors };
        for candidate in &mut members {
            if candidate.class.is_none() {
                candidate.class = Some(class.clone());
            }
        }
        out.append(&mut members);
    }

    fn push_function(&self, node: Node, class: Option<Class>, out: &mut Vec<Candidate>) {
        let function = self.adapter.function(node, self.source);
        if function.name.is_empty() {
            log::debug!("skipping unnamed declaration ({})", node.kind());
            return;
        }
        let mut candidate = Candidate::new(
            self.path.clone(),
            self.language,
            function,
            node_text(node, self.source),
        );
        candidate.class = class;
        candidate.cfg = node
            .child_by_field_name("body")
            .map(|body| cfg::build(body, self.adapter, self.source));
        log::debug!("found candidate: {}", candidate);
        out.push(candidate);
    }
}
