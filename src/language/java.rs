//! Java language adapter.
//!
//! Methods live inside class bodies; the extractor recurses into
//! `class_declaration` nodes and backfills the class on every candidate
//! found inside, collecting `constructor_declaration`s along the way.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::candidate::{Function, Parameter, Visibility, NO_NAME};
use crate::language::{DeclarationRole, Language, LanguageAdapter, StatementRole, SwitchCase};
use crate::tree::{first_child_of_kind, named_children, node_text};

/// Primitive-like parameter types, including wrapper classes and the
/// array/varargs suffixes. Generic containers (List<String>, ...) do not
/// match.
static PRIMITIVE_TYPES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(int|Integer|[Bb]yte|[Ss]hort|[Ll]ong|[Ff]loat|[Dd]ouble|char|Character|[Bb]oolean|String|AtomicBoolean|AtomicLong|AtomicInteger)(\[\]|\.\.\.)?$",
    )
    .unwrap()
});

pub struct JavaAdapter;

impl LanguageAdapter for JavaAdapter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn declaration_role(&self, kind: &str) -> DeclarationRole {
        match kind {
            "method_declaration" => DeclarationRole::Method,
            "class_declaration" => DeclarationRole::Class,
            "constructor_declaration" => DeclarationRole::Constructor,
            "package_declaration" => DeclarationRole::Package,
            "import_declaration" | "field_declaration" | "line_comment" | "block_comment" => {
                DeclarationRole::Ignored
            }
            _ => DeclarationRole::Unknown,
        }
    }

    fn statement_role(&self, kind: &str) -> StatementRole {
        match kind {
            "if_statement" => StatementRole::Conditional,
            "switch_expression" => StatementRole::Switch,
            "while_statement" => StatementRole::While,
            "do_statement" => StatementRole::DoWhile,
            "for_statement" | "enhanced_for_statement" => StatementRole::For,
            "block" => StatementRole::Block,
            "return_statement" => StatementRole::Return,
            "switch_label" | "break_statement" | "line_comment" | "block_comment" => {
                StatementRole::Ignored
            }
            _ => StatementRole::Opaque,
        }
    }

    fn function(&self, node: Node, source: &[u8]) -> Function {
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .unwrap_or_default();
        let (visibility, is_static) = modifiers(node);
        let parameters = node
            .child_by_field_name("parameters")
            .map(|list| formal_parameters(list, source))
            .unwrap_or_default();
        // `void` means no return values; constructors have no type field.
        let return_values = node
            .child_by_field_name("type")
            .filter(|ty| ty.kind() != "void_type")
            .map(|ty| vec![Parameter::unnamed(node_text(ty, source))])
            .unwrap_or_default();
        Function {
            name,
            parameters,
            return_values,
            visibility,
            is_static,
        }
    }

    fn switch_case(&self, node: Node, _source: &[u8]) -> Option<SwitchCase> {
        match node.kind() {
            // Colon-style group or arrow-style rule: the default clause is
            // the one whose label carries no expression.
            "switch_block_statement_group" | "switch_rule" => {
                let is_default = first_child_of_kind(node, "switch_label")
                    .map(|label| label.named_child_count() == 0)
                    .unwrap_or(false);
                Some(SwitchCase { is_default })
            }
            _ => None,
        }
    }

    fn primitive_types(&self) -> Option<&'static Regex> {
        Some(&PRIMITIVE_TYPES)
    }
}

/// Scan the `modifiers` child for visibility keywords and `static`.
/// No visibility keyword defaults to public.
fn modifiers(node: Node) -> (Visibility, bool) {
    let mut visibility = Visibility::Public;
    let mut is_static = false;
    if let Some(modifiers) = first_child_of_kind(node, "modifiers") {
        for i in 0..modifiers.child_count() {
            let Some(token) = modifiers.child(i) else {
                continue;
            };
            match token.kind() {
                "public" => visibility = Visibility::Public,
                "private" => visibility = Visibility::Private,
                "protected" => visibility = Visibility::Protected,
                "static" => is_static = true,
                _ => {}
            }
        }
    }
    (visibility, is_static)
}

fn formal_parameters(list: Node, source: &[u8]) -> Vec<Parameter> {
    named_children(list)
        .filter(|child| matches!(child.kind(), "formal_parameter" | "spread_parameter"))
        .map(|parameter| {
            let name = parameter
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            let ty = parameter
                .child_by_field_name("type")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            Parameter::new(name, ty)
        })
        .collect()
}
