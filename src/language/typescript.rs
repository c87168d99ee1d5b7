//! TypeScript language adapter.
//!
//! Shares the JavaScript role tables (the grammar is a superset) and adds
//! the syntactic typing: parameter type annotations, return types, and
//! accessibility modifiers on class members.

use tree_sitter::Node;

use crate::candidate::{Function, Parameter, Visibility, NO_NAME};
use crate::language::{
    javascript, DeclarationRole, Language, LanguageAdapter, StatementRole, SwitchCase,
};
use crate::tree::{named_children, node_text};

pub struct TypeScriptAdapter;

impl LanguageAdapter for TypeScriptAdapter {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }

    fn declaration_role(&self, kind: &str) -> DeclarationRole {
        match kind {
            // Type-level declarations carry no executable body.
            "interface_declaration" | "type_alias_declaration" | "enum_declaration" => {
                DeclarationRole::Ignored
            }
            _ => javascript::declaration_role(kind),
        }
    }

    fn statement_role(&self, kind: &str) -> StatementRole {
        javascript::statement_role(kind)
    }

    fn function(&self, node: Node, source: &[u8]) -> Function {
        let mut function = javascript::build_function(node, source);
        function.parameters = node
            .child_by_field_name("parameters")
            .map(|list| typed_parameters(list, source))
            .unwrap_or_default();
        function.return_values = node
            .child_by_field_name("return_type")
            .and_then(|a| annotated_type(a, source))
            .filter(|ty| ty != "void")
            .map(|ty| vec![Parameter::unnamed(ty)])
            .unwrap_or_default();
        if let Some(accessibility) = accessibility(node, source) {
            function.visibility = accessibility;
        }
        function
    }

    fn switch_case(&self, node: Node, _source: &[u8]) -> Option<SwitchCase> {
        javascript::switch_case(node)
    }

    fn is_constructor(&self, node: Node, source: &[u8]) -> bool {
        javascript::is_constructor(node, source)
    }

    fn variable_function<'t>(&self, node: Node<'t>, source: &[u8]) -> Option<(Function, Node<'t>)> {
        javascript::variable_function(node, source)
    }
}

/// Text of the type inside a `type_annotation` (the annotation node also
/// carries the `:` token).
fn annotated_type(annotation: Node, source: &[u8]) -> Option<String> {
    named_children(annotation)
        .next()
        .map(|ty| node_text(ty, source).to_string())
}

fn typed_parameters(list: Node, source: &[u8]) -> Vec<Parameter> {
    named_children(list)
        .filter(|child| matches!(child.kind(), "required_parameter" | "optional_parameter"))
        .map(|parameter| {
            let name = parameter
                .child_by_field_name("pattern")
                .map(|n| node_text(n, source))
                .unwrap_or(NO_NAME);
            let ty = parameter
                .child_by_field_name("type")
                .and_then(|a| annotated_type(a, source))
                .unwrap_or_else(|| NO_NAME.to_string());
            Parameter::new(name, ty)
        })
        .collect()
}

/// Explicit accessibility modifier on a class member, when present.
fn accessibility(node: Node, source: &[u8]) -> Option<Visibility> {
    let modifier = named_children(node).find(|c| c.kind() == "accessibility_modifier")?;
    match node_text(modifier, source) {
        "private" => Some(Visibility::Private),
        "protected" => Some(Visibility::Protected),
        "public" => Some(Visibility::Public),
        _ => None,
    }
}
