//! Go language adapter.
//!
//! Quirks handled here:
//! - Visibility is encoded by name casing (exported = uppercase first rune).
//! - Methods carry their receiver type as the owning class, with pointer
//!   markup stripped.
//! - Result lists can be a bare type, named, or unnamed parameter lists.

use tree_sitter::Node;

use crate::candidate::{Function, Parameter, Visibility, NO_NAME};
use crate::language::{DeclarationRole, Language, LanguageAdapter, StatementRole, SwitchCase};
use crate::tree::{named_children, node_text};

pub struct GoAdapter;

impl LanguageAdapter for GoAdapter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn declaration_role(&self, kind: &str) -> DeclarationRole {
        match kind {
            "function_declaration" => DeclarationRole::Function,
            "method_declaration" => DeclarationRole::Method,
            "package_clause" => DeclarationRole::Package,
            "import_declaration" | "comment" => DeclarationRole::Ignored,
            _ => DeclarationRole::Unknown,
        }
    }

    fn statement_role(&self, kind: &str) -> StatementRole {
        match kind {
            "if_statement" => StatementRole::Conditional,
            "expression_switch_statement" => StatementRole::Switch,
            "for_statement" => StatementRole::For,
            "block" => StatementRole::Block,
            "return_statement" => StatementRole::Return,
            // Case guard expressions and loop exits are not flow nodes.
            "expression_list" | "break_statement" | "comment" => StatementRole::Ignored,
            _ => StatementRole::Opaque,
        }
    }

    fn function(&self, node: Node, source: &[u8]) -> Function {
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .unwrap_or_default();
        let visibility = if name.chars().next().is_some_and(char::is_uppercase) {
            Visibility::Public
        } else {
            Visibility::Private
        };
        let parameters = node
            .child_by_field_name("parameters")
            .map(|list| parameter_list(list, source))
            .unwrap_or_default();
        let return_values = node
            .child_by_field_name("result")
            .map(|result| {
                if result.kind() == "parameter_list" {
                    parameter_list(result, source)
                } else {
                    // Bare result type, e.g. `func A() int8`.
                    vec![Parameter::unnamed(node_text(result, source))]
                }
            })
            .unwrap_or_default();
        Function {
            name,
            parameters,
            return_values,
            visibility,
            is_static: false,
        }
    }

    fn method_class(&self, node: Node, source: &[u8]) -> Option<String> {
        let receiver = node.child_by_field_name("receiver")?;
        let declaration = named_children(receiver).next()?;
        let ty = declaration.child_by_field_name("type")?;
        Some(
            node_text(ty, source)
                .trim_start_matches(['*', '&'])
                .to_string(),
        )
    }

    fn switch_case(&self, node: Node, _source: &[u8]) -> Option<SwitchCase> {
        match node.kind() {
            "expression_case" => Some(SwitchCase { is_default: false }),
            "default_case" => Some(SwitchCase { is_default: true }),
            _ => None,
        }
    }
}

fn parameter_list(list: Node, source: &[u8]) -> Vec<Parameter> {
    named_children(list)
        .filter(|child| {
            matches!(
                child.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            )
        })
        .map(|declaration| {
            let name = declaration
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            let ty = declaration
                .child_by_field_name("type")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            Parameter::new(name, ty)
        })
        .collect()
}
