//! C language adapter.
//!
//! Function names hide inside declarator chains (`*name(...)`), and the
//! case clauses of a switch nest their statements directly. Everything is
//! public; C has no visibility modifiers.

use tree_sitter::Node;

use crate::candidate::{Function, Parameter, NO_NAME};
use crate::language::{DeclarationRole, Language, LanguageAdapter, StatementRole, SwitchCase};
use crate::tree::{named_children, node_text};

pub struct CAdapter;

impl LanguageAdapter for CAdapter {
    fn language(&self) -> Language {
        Language::C
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_c::LANGUAGE.into()
    }

    fn declaration_role(&self, kind: &str) -> DeclarationRole {
        match kind {
            "function_definition" => DeclarationRole::Function,
            // Prototypes, globals, and preprocessor lines carry no body.
            "declaration" | "preproc_include" | "preproc_def" | "preproc_function_def"
            | "comment" => DeclarationRole::Ignored,
            _ => DeclarationRole::Unknown,
        }
    }

    fn statement_role(&self, kind: &str) -> StatementRole {
        match kind {
            "if_statement" => StatementRole::Conditional,
            "switch_statement" => StatementRole::Switch,
            "while_statement" => StatementRole::While,
            "do_statement" => StatementRole::DoWhile,
            "for_statement" => StatementRole::For,
            "compound_statement" | "else_clause" => StatementRole::Block,
            "return_statement" => StatementRole::Return,
            "break_statement" | "comment" => StatementRole::Ignored,
            _ => StatementRole::Opaque,
        }
    }

    fn function(&self, node: Node, source: &[u8]) -> Function {
        let declarator = function_declarator(node);
        let name = declarator
            .and_then(|d| d.child_by_field_name("declarator"))
            .map(|n| innermost_name(n, source).to_string())
            .unwrap_or_default();
        let parameters = declarator
            .and_then(|d| d.child_by_field_name("parameters"))
            .map(|list| parameter_list(list, source))
            .unwrap_or_default();
        let return_values = node
            .child_by_field_name("type")
            .map(|ty| node_text(ty, source))
            .filter(|ty| *ty != "void")
            .map(|ty| vec![Parameter::unnamed(ty)])
            .unwrap_or_default();
        Function {
            name,
            parameters,
            return_values,
            ..Function::default()
        }
    }

    fn switch_case(&self, node: Node, _source: &[u8]) -> Option<SwitchCase> {
        if node.kind() == "case_statement" {
            // `default:` is a case_statement without a value expression.
            Some(SwitchCase {
                is_default: node.child_by_field_name("value").is_none(),
            })
        } else {
            None
        }
    }
}

/// Descend the declarator chain (pointer/parenthesized declarators) to the
/// function_declarator, if any.
fn function_declarator(node: Node) -> Option<Node> {
    let mut current = node.child_by_field_name("declarator")?;
    loop {
        if current.kind() == "function_declarator" {
            return Some(current);
        }
        current = current.child_by_field_name("declarator")?;
    }
}

/// Innermost identifier text of a declarator.
fn innermost_name<'s>(node: Node, source: &'s [u8]) -> &'s str {
    let mut current = node;
    while let Some(inner) = current.child_by_field_name("declarator") {
        current = inner;
    }
    node_text(current, source)
}

fn parameter_list(list: Node, source: &[u8]) -> Vec<Parameter> {
    named_children(list)
        .filter(|child| child.kind() == "parameter_declaration")
        .filter_map(|parameter| {
            let ty = parameter
                .child_by_field_name("type")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            let name = parameter
                .child_by_field_name("declarator")
                .map(|d| innermost_name(d, source));
            // `(void)` parameter lists declare no parameters.
            if ty == "void" && name.is_none() {
                return None;
            }
            Some(Parameter::new(name.unwrap_or(NO_NAME), ty))
        })
        .collect()
}
