//! Query entry points
//!
//! [`Graph`] mirrors the `g`/`graph` object of the Gizmo environment: it
//! creates the two seed path forms (vertex-anchored queries and reusable
//! morphisms) and the free namespace/IRI utilities.

use crate::query::path::{Arg, Call, Path, PathElement, Step};

/// Factory for seed paths and free calls.
#[derive(Debug, Clone, Copy)]
pub struct Graph;

impl Graph {
    pub fn new() -> Self {
        Graph
    }

    /// Shorthand for [`vertex`](Graph::vertex).
    pub fn v<A: Into<Arg>, I: IntoIterator<Item = A>>(&self, node_ids: I) -> Path {
        self.vertex(node_ids)
    }

    /// Shorthand for [`morphism`](Graph::morphism).
    pub fn m(&self) -> Path {
        self.morphism()
    }

    /// Start a query at the given vertices. No ids means every vertex in
    /// the graph.
    pub fn vertex<A: Into<Arg>, I: IntoIterator<Item = A>>(&self, node_ids: I) -> Path {
        let step = Step::new("Vertex", node_ids.into_iter().map(Into::into).collect());
        Path::from_elements(vec![PathElement::Step(step)])
    }

    /// Create an unanchored path template. Not executable on its own;
    /// consumed by `follow`/`follow_r`/`follow_recursive` on another path.
    pub fn morphism(&self) -> Path {
        Path::from_elements(vec![PathElement::Step(Step::new("Morphism", vec![]))])
    }

    /// Load all namespaces saved in the graph.
    pub fn load_namespaces(&self) -> Path {
        Path::from_elements(vec![PathElement::Call(Call::new("g.loadNamespaces", vec![]))])
    }

    /// Register the default namespaces for automatic IRI resolution.
    pub fn add_default_namespaces(&self) -> Path {
        Path::from_elements(vec![PathElement::Call(Call::new(
            "g.addDefaultNamespaces",
            vec![],
        ))])
    }

    /// Associate a prefix with an IRI namespace.
    pub fn add_namespace(&self, prefix: &str, namespace: &str) -> Path {
        Path::from_elements(vec![PathElement::Call(Call::new(
            "g.addNamespace",
            vec![Arg::from(prefix), Arg::from(namespace)],
        ))])
    }

    /// Add a value to the result list programmatically. Accepts any
    /// argument shape, including a nested query.
    pub fn emit(&self, value: impl Into<Arg>) -> Path {
        Path::from_elements(vec![PathElement::Step(Step::new("emit", vec![value.into()]))])
    }

    /// An IRI value, usable as an argument anywhere.
    pub fn iri(&self, iri: &str) -> Call {
        Call::new("g.IRI", vec![Arg::from(iri)])
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_seed_captures_ids() {
        let g = Graph::new();
        let path = g.vertex(["<alice>", "<bob>"]);
        match &path.elements()[0] {
            PathElement::Step(step) => {
                assert_eq!(step.name, "Vertex");
                assert_eq!(step.args, vec![Arg::from("<alice>"), Arg::from("<bob>")]);
            }
            _ => panic!("expected Vertex step"),
        }
    }

    #[test]
    fn test_vertex_without_ids_means_all() {
        let g = Graph::new();
        let path = g.v::<&str, _>([]);
        match &path.elements()[0] {
            PathElement::Step(step) => assert!(step.args.is_empty()),
            _ => panic!("expected Vertex step"),
        }
    }

    #[test]
    fn test_morphism_seed() {
        let g = Graph::new();
        let path = g.m();
        assert_eq!(path, g.morphism());
        match &path.elements()[0] {
            PathElement::Step(step) => assert_eq!(step.name, "Morphism"),
            _ => panic!("expected Morphism step"),
        }
    }

    #[test]
    fn test_namespace_utilities_are_global_calls() {
        let g = Graph::new();
        let path = g.add_namespace("ex", "http://example.com/");
        match &path.elements()[0] {
            PathElement::Call(call) => {
                assert_eq!(call.function, "g.addNamespace");
                assert_eq!(
                    call.args,
                    vec![Arg::from("ex"), Arg::from("http://example.com/")]
                );
            }
            _ => panic!("expected global call"),
        }
    }

    #[test]
    fn test_iri_is_a_bare_call() {
        let g = Graph::new();
        let call = g.iri("follows");
        assert_eq!(call.function, "g.IRI");
        assert_eq!(call.args, vec![Arg::from("follows")]);
    }
}
