//! JavaScript language adapter.
//!
//! Functions also appear as variable bindings (`const f = () => {}`) and
//! as class methods. `#`-prefixed members follow the private naming
//! convention: they are reported as private with the marker stripped.

use tree_sitter::Node;

use crate::candidate::{Function, Parameter, Visibility, NO_NAME};
use crate::language::{DeclarationRole, Language, LanguageAdapter, StatementRole, SwitchCase};
use crate::tree::{has_token, named_children, node_text};

pub struct JavaScriptAdapter;

impl LanguageAdapter for JavaScriptAdapter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn declaration_role(&self, kind: &str) -> DeclarationRole {
        declaration_role(kind)
    }

    fn statement_role(&self, kind: &str) -> StatementRole {
        statement_role(kind)
    }

    fn function(&self, node: Node, source: &[u8]) -> Function {
        build_function(node, source)
    }

    fn switch_case(&self, node: Node, _source: &[u8]) -> Option<SwitchCase> {
        switch_case(node)
    }

    fn is_constructor(&self, node: Node, source: &[u8]) -> bool {
        is_constructor(node, source)
    }

    fn variable_function<'t>(&self, node: Node<'t>, source: &[u8]) -> Option<(Function, Node<'t>)> {
        variable_function(node, source)
    }
}

/// Shared with the TypeScript adapter, whose grammar is a superset.
pub(super) fn declaration_role(kind: &str) -> DeclarationRole {
    match kind {
        "function_declaration" | "generator_function_declaration" => DeclarationRole::Function,
        "method_definition" => DeclarationRole::Method,
        "class_declaration" => DeclarationRole::Class,
        "lexical_declaration" | "variable_declaration" => DeclarationRole::VariableBinding,
        "import_statement" | "comment" => DeclarationRole::Ignored,
        _ => DeclarationRole::Unknown,
    }
}

pub(super) fn statement_role(kind: &str) -> StatementRole {
    match kind {
        "if_statement" => StatementRole::Conditional,
        "switch_statement" => StatementRole::Switch,
        "while_statement" => StatementRole::While,
        "do_statement" => StatementRole::DoWhile,
        "for_statement" | "for_in_statement" => StatementRole::For,
        // else_clause wraps the alternative statement; treating it as a
        // block makes `else if` chains nest the same way in every language.
        "statement_block" | "else_clause" => StatementRole::Block,
        "return_statement" => StatementRole::Return,
        "break_statement" | "comment" => StatementRole::Ignored,
        _ => StatementRole::Opaque,
    }
}

pub(super) fn switch_case(node: Node) -> Option<SwitchCase> {
    match node.kind() {
        "switch_case" => Some(SwitchCase { is_default: false }),
        "switch_default" => Some(SwitchCase { is_default: true }),
        _ => None,
    }
}

pub(super) fn is_constructor(node: Node, source: &[u8]) -> bool {
    node.kind() == "method_definition"
        && node
            .child_by_field_name("name")
            .is_some_and(|n| node_text(n, source) == "constructor")
}

pub(super) fn variable_function<'t>(
    node: Node<'t>,
    source: &[u8],
) -> Option<(Function, Node<'t>)> {
    let declarator = named_children(node).find(|c| c.kind() == "variable_declarator")?;
    let value = declarator.child_by_field_name("value")?;
    if !matches!(
        value.kind(),
        "arrow_function" | "function_expression" | "function" | "generator_function"
    ) {
        return None;
    }
    let name = declarator
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    let function = Function {
        name,
        parameters: value
            .child_by_field_name("parameters")
            .map(|list| parameters(list, source))
            .unwrap_or_default(),
        ..Function::default()
    };
    Some((function, value))
}

pub(super) fn build_function(node: Node, source: &[u8]) -> Function {
    let mut name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    // `#name` members are private by convention; report the bare name.
    let mut visibility = Visibility::Public;
    if let Some(stripped) = name.strip_prefix('#') {
        name = stripped.to_string();
        visibility = Visibility::Private;
    }
    let is_static = node.kind() == "method_definition" && has_token(node, "static");
    Function {
        name,
        parameters: node
            .child_by_field_name("parameters")
            .map(|list| parameters(list, source))
            .unwrap_or_default(),
        return_values: Vec::new(),
        visibility,
        is_static,
    }
}

/// Untyped formal parameters: names only, with the no-name sentinel for
/// destructuring patterns.
fn parameters(list: Node, source: &[u8]) -> Vec<Parameter> {
    named_children(list)
        .filter(|child| child.kind() != "comment")
        .map(|child| match child.kind() {
            "identifier" => Parameter::new(node_text(child, source), NO_NAME),
            _ => Parameter::new(NO_NAME, NO_NAME),
        })
        .collect()
}
