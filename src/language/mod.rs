//! Language support: the closed [`Language`] enum and the per-language
//! [`LanguageAdapter`] implementations.
//!
//! The adapter is the only place in the crate where raw grammar kind
//! strings are compared. The extractor and the CFG builder operate on the
//! abstract [`DeclarationRole`] and [`StatementRole`] enums, so one
//! unrecognized construct never aborts a scan - unknown kinds degrade to
//! `Unknown`/`Opaque`.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use tree_sitter::Node;

use crate::candidate::Function;

mod c;
mod go;
mod java;
mod javascript;
mod typescript;

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Go,
    Java,
    JavaScript,
    TypeScript,
    C,
}

impl Language {
    /// All supported file extensions (without the dot).
    pub const EXTENSIONS: &'static [(&'static str, Language)] = &[
        ("go", Language::Go),
        ("java", Language::Java),
        ("js", Language::JavaScript),
        ("ts", Language::TypeScript),
        ("c", Language::C),
    ];

    /// Resolve a language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        Self::EXTENSIONS
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, l)| *l)
    }

    /// Resolve a language from a file path.
    pub fn from_path(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::C => "C",
        }
    }

    /// The adapter handling this language.
    pub fn adapter(&self) -> &'static dyn LanguageAdapter {
        match self {
            Language::Go => &go::GoAdapter,
            Language::Java => &java::JavaAdapter,
            Language::JavaScript => &javascript::JavaScriptAdapter,
            Language::TypeScript => &typescript::TypeScriptAdapter,
            Language::C => &c::CAdapter,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract role of a declaration-level syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationRole {
    /// A free function declaration.
    Function,
    /// A method declaration (receiver-style or inside a class body).
    Method,
    /// A class/type declaration whose body may contain methods.
    Class,
    /// A variable binding whose value may be a function literal.
    VariableBinding,
    /// A constructor declaration inside a class body.
    Constructor,
    /// A package/namespace declaration.
    Package,
    /// Known non-semantic node (imports, comments); skipped silently.
    Ignored,
    /// Anything else; logged and skipped.
    Unknown,
}

/// Abstract role of a statement-level syntax node inside a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementRole {
    Conditional,
    Switch,
    For,
    While,
    DoWhile,
    Block,
    Return,
    /// Non-flow node (labels, breaks, case expression lists); the frontier
    /// passes through unchanged.
    Ignored,
    /// Unrecognized statement; becomes a single opaque pass-through node.
    Opaque,
}

/// Classification of one case clause inside a switch body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchCase {
    pub is_default: bool,
}

/// Per-language mapping from grammar nodes to abstract roles, plus the
/// language-specific pieces of signature extraction.
pub trait LanguageAdapter: Send + Sync {
    fn language(&self) -> Language;

    /// The tree-sitter grammar for this language.
    fn grammar(&self) -> tree_sitter::Language;

    fn declaration_role(&self, kind: &str) -> DeclarationRole;

    fn statement_role(&self, kind: &str) -> StatementRole;

    /// Build the function signature for a node whose declaration role is
    /// `Function`, `Method`, or `Constructor`. An empty name means the
    /// candidate will be discarded.
    fn function(&self, node: Node, source: &[u8]) -> Function;

    /// For receiver-style methods: the owning type name, stripped of
    /// pointer/reference markup.
    fn method_class(&self, _node: Node, _source: &[u8]) -> Option<String> {
        None
    }

    /// The node whose named children are the case clauses of a switch.
    /// Java wraps them in a `switch_block`; the default covers grammars
    /// where the clauses hang off the `body` field or the switch itself.
    fn switch_container<'t>(&self, node: Node<'t>) -> Node<'t> {
        node.child_by_field_name("body").unwrap_or(node)
    }

    /// Classify a child of the switch container; `None` for nodes that are
    /// not case clauses (e.g. the scrutinee expression).
    fn switch_case(&self, node: Node, source: &[u8]) -> Option<SwitchCase>;

    /// Whether a `Method`-role node is actually a constructor (languages
    /// that spell constructors as ordinary members, e.g. JavaScript).
    fn is_constructor(&self, _node: Node, _source: &[u8]) -> bool {
        false
    }

    /// For variable bindings: the bound function signature and the function
    /// literal node, when the bound value is one.
    fn variable_function<'t>(
        &self,
        _node: Node<'t>,
        _source: &[u8],
    ) -> Option<(Function, Node<'t>)> {
        None
    }

    /// Regex matching primitive-like parameter types, when this language
    /// has a table.
    fn primitive_types(&self) -> Option<&'static Regex> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup() {
        assert_eq!(Language::from_extension("go"), Some(Language::Go));
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("py"), None);
        assert_eq!(
            Language::from_path(Path::new("src/codec/parse.java")),
            Some(Language::Java)
        );
    }

    #[test]
    fn language_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&Language::JavaScript).unwrap(),
            "\"JavaScript\""
        );
    }

    #[test]
    fn unknown_kinds_degrade() {
        for language in [
            Language::Go,
            Language::Java,
            Language::JavaScript,
            Language::TypeScript,
            Language::C,
        ] {
            let adapter = language.adapter();
            assert_eq!(
                adapter.declaration_role("no_such_kind"),
                DeclarationRole::Unknown
            );
            assert_eq!(adapter.statement_role("no_such_kind"), StatementRole::Opaque);
        }
    }
}
