//! Control flow graph construction.
//!
//! The graph is an arena of integer-handled nodes with an explicit edge
//! list - loops are real cycles (back-edges), so a tree will not do. Node 0
//! is always the `start` sentinel and node 1 the `end` sentinel; every
//! terminal path out of `start` reaches `end`, which is what makes the
//! `edges - nodes + 2` complexity formula valid.
//!
//! Construction is a recursive `(graph, frontier) -> frontier` walk over
//! the body's statements, dispatching on the abstract [`StatementRole`]
//! provided by the language adapter. Unrecognized statements degrade to a
//! single opaque pass-through node, so construction is total.

use tree_sitter::Node;

use crate::language::{LanguageAdapter, StatementRole};

/// Stable handle of a graph node.
pub type NodeId = usize;

/// Directed graph over labeled nodes. Duplicate edges are dropped, matching
/// the set semantics the metrics rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlFlowGraph {
    labels: Vec<String>,
    edges: Vec<(NodeId, NodeId)>,
    start: NodeId,
    end: NodeId,
}

impl ControlFlowGraph {
    fn new() -> Self {
        let mut graph = Self::default();
        graph.start = graph.add_node("start");
        graph.end = graph.add_node("end");
        graph
    }

    /// Add a node; labels carry the handle for readable DOT dumps.
    fn add_node(&mut self, label: &str) -> NodeId {
        let id = self.labels.len();
        self.labels.push(format!("{}: {}", id, label));
        id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if !self.edges.contains(&(from, to)) {
            self.edges.push((from, to));
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains(&(from, to))
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Render as a Graphviz digraph.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for (id, label) in self.labels.iter().enumerate() {
            out.push_str(&format!("  n{} [label=\"{}\"];\n", id, label));
        }
        for (from, to) in &self.edges {
            out.push_str(&format!("  n{} -> n{};\n", from, to));
        }
        out.push_str("}\n");
        out
    }
}

/// Build the control flow graph for a function body node.
pub fn build(body: Node, adapter: &dyn LanguageAdapter, source: &[u8]) -> ControlFlowGraph {
    let mut builder = Builder {
        graph: ControlFlowGraph::new(),
        adapter,
        source,
    };
    let start = builder.graph.start;
    let end = builder.graph.end;
    let frontier = builder.block(body, start);
    builder.graph.add_edge(frontier, end);
    builder.graph
}

struct Builder<'a> {
    graph: ControlFlowGraph,
    adapter: &'a dyn LanguageAdapter,
    source: &'a [u8],
}

impl Builder<'_> {
    /// Process one statement; returns the new frontier. A missing node
    /// (absent optional field) leaves the frontier unchanged.
    fn statement(&mut self, node: Option<Node>, frontier: NodeId) -> NodeId {
        let Some(node) = node else {
            return frontier;
        };
        match self.adapter.statement_role(node.kind()) {
            StatementRole::Conditional => self.conditional(node, frontier),
            StatementRole::Switch => self.switch(node, frontier),
            StatementRole::For => self.for_loop(node, frontier),
            StatementRole::While => self.while_loop(node, frontier),
            StatementRole::DoWhile => self.do_while(node, frontier),
            StatementRole::Block => self.block(node, frontier),
            StatementRole::Return => {
                let id = self.graph.add_node("return");
                self.graph.add_edge(frontier, id);
                id
            }
            StatementRole::Ignored => frontier,
            StatementRole::Opaque => {
                log::debug!("cfg: unhandled node kind {:?}", node.kind());
                let id = self.graph.add_node(node.kind());
                self.graph.add_edge(frontier, id);
                id
            }
        }
    }

    /// Thread the frontier through each child statement in order.
    fn block(&mut self, node: Node, mut frontier: NodeId) -> NodeId {
        for i in 0..node.named_child_count() {
            frontier = self.statement(node.named_child(i), frontier);
        }
        frontier
    }

    fn conditional(&mut self, node: Node, frontier: NodeId) -> NodeId {
        let if_start = self.graph.add_node("if_start");
        self.graph.add_edge(frontier, if_start);
        let if_end = self.graph.add_node("if_end");

        let consequence = self.statement(node.child_by_field_name("consequence"), if_start);
        self.graph.add_edge(consequence, if_end);
        // A missing alternative leaves the frontier at if_start, yielding
        // the implicit empty-else edge if_start -> if_end.
        let alternative = self.statement(node.child_by_field_name("alternative"), if_start);
        self.graph.add_edge(alternative, if_end);

        if_end
    }

    fn switch(&mut self, node: Node, frontier: NodeId) -> NodeId {
        let switch_start = self.graph.add_node("switch_start");
        self.graph.add_edge(frontier, switch_start);
        let switch_end = self.graph.add_node("switch_end");

        let container = self.adapter.switch_container(node);
        let mut has_default = false;
        for i in 0..container.named_child_count() {
            let Some(child) = container.named_child(i) else {
                continue;
            };
            let Some(case) = self.adapter.switch_case(child, self.source) else {
                continue;
            };
            has_default |= case.is_default;
            let frontier = self.case_body(child, switch_start);
            self.graph.add_edge(frontier, switch_end);
        }
        // Without a default clause there is a no-case-matched path.
        if !has_default {
            self.graph.add_edge(switch_start, switch_end);
        }

        switch_end
    }

    /// A case clause's statements, skipping the case value expression.
    fn case_body(&mut self, case: Node, mut frontier: NodeId) -> NodeId {
        let value = case.child_by_field_name("value").map(|n| n.id());
        for i in 0..case.named_child_count() {
            let Some(child) = case.named_child(i) else {
                continue;
            };
            if value == Some(child.id()) {
                continue;
            }
            frontier = self.statement(Some(child), frontier);
        }
        frontier
    }

    fn for_loop(&mut self, node: Node, frontier: NodeId) -> NodeId {
        let loop_start = self.graph.add_node("for_start");
        self.graph.add_edge(frontier, loop_start);
        let loop_end = self.graph.add_node("for_end");
        // Repeat path back to the loop head.
        self.graph.add_edge(loop_end, loop_start);

        let body = self.statement(node.child_by_field_name("body"), loop_start);
        self.graph.add_edge(body, loop_end);

        loop_end
    }

    fn while_loop(&mut self, node: Node, frontier: NodeId) -> NodeId {
        let loop_start = self.graph.add_node("while_start");
        self.graph.add_edge(frontier, loop_start);
        let loop_end = self.graph.add_node("while_end");
        // Zero-iteration path.
        self.graph.add_edge(loop_start, loop_end);

        let body = self.statement(node.child_by_field_name("body"), loop_start);
        self.graph.add_edge(body, loop_start);

        loop_end
    }

    fn do_while(&mut self, node: Node, frontier: NodeId) -> NodeId {
        let do_start = self.graph.add_node("do_start");
        self.graph.add_edge(frontier, do_start);
        let do_end = self.graph.add_node("do_end");

        // The body runs at least once, then either repeats or exits.
        let body = self.statement(node.child_by_field_name("body"), do_start);
        self.graph.add_edge(body, do_start);
        self.graph.add_edge(body, do_end);

        do_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_come_first() {
        let graph = ControlFlowGraph::new();
        assert_eq!(graph.start(), 0);
        assert_eq!(graph.end(), 1);
        assert_eq!(graph.label(0), Some("0: start"));
        assert_eq!(graph.label(1), Some("1: end"));
    }

    #[test]
    fn duplicate_edges_are_dropped() {
        let mut graph = ControlFlowGraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn dot_output_lists_nodes_and_edges() {
        let mut graph = ControlFlowGraph::new();
        graph.add_edge(0, 1);
        let dot = graph.to_dot();
        assert!(dot.contains("n0 [label=\"0: start\"]"));
        assert!(dot.contains("n0 -> n1;"));
    }
}
