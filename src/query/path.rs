//! Gizmo query path model
//!
//! A [`Path`] is an immutable, append-only sequence of traversal elements.
//! Every chain method returns a new `Path` sharing the receiver's prefix,
//! so a partially built query can be captured in a variable and extended
//! in several directions independently:
//!
//! ```
//! use cayley_client::query::Graph;
//!
//! let g = Graph::new();
//! let base = g.v::<&str, _>([]);
//! let follows = base.out("follows", &[]);
//! let followers = base.in_("follows", &[]);
//! assert_ne!(follows, followers);
//! ```
//!
//! Elements are plain data: a [`Step`] is one chained traversal operation,
//! a [`Call`] is a free function invocation (namespace utilities, IRI
//! construction). Rendering to query text lives in the compile module and
//! never mutates the path.

use crate::query::filter::Filter;

// ============================================================================
// Arguments
// ============================================================================

/// One argument of a step or call.
///
/// Closed union over everything the Gizmo grammar can receive in an
/// argument position: scalar literals, a free call (e.g. an IRI
/// constructor), a nested query path, or an arbitrarily nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Call(Call),
    Path(Path),
    List(Vec<Arg>),
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::String(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::String(v)
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<Call> for Arg {
    fn from(v: Call) -> Self {
        Arg::Call(v)
    }
}

impl From<Path> for Arg {
    fn from(v: Path) -> Self {
        Arg::Path(v)
    }
}

impl From<&Path> for Arg {
    fn from(v: &Path) -> Self {
        Arg::Path(v.clone())
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::List(v.into_iter().map(Into::into).collect())
    }
}

/// Optional leading argument of `in`/`out`/`both`/`labelContext`.
///
/// Absent means "all predicates" (or "all subgraphs") and the compiler
/// emits no position for it. Construct from `()` for the absent form, or
/// from a predicate name, an IRI call, a list of calls, or a nested path.
#[derive(Debug, Clone, PartialEq)]
pub struct Via(Option<Arg>);

impl Via {
    pub(crate) fn into_arg(self) -> Option<Arg> {
        self.0
    }
}

impl From<()> for Via {
    fn from(_: ()) -> Self {
        Via(None)
    }
}

impl From<&str> for Via {
    fn from(v: &str) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<String> for Via {
    fn from(v: String) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<Call> for Via {
    fn from(v: Call) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<Path> for Via {
    fn from(v: Path) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<&Path> for Via {
    fn from(v: &Path) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<Vec<Call>> for Via {
    fn from(v: Vec<Call>) -> Self {
        Via(Some(Arg::from(v)))
    }
}

impl From<Vec<&str>> for Via {
    fn from(v: Vec<&str>) -> Self {
        Via(Some(Arg::from(v)))
    }
}

// ============================================================================
// Steps and Calls
// ============================================================================

/// One chained traversal operation: a Gizmo method name plus its
/// arguments in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Step {
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Step {
            name: name.into(),
            args,
        }
    }
}

/// A free function invocation (no receiver in the chain), e.g.
/// `g.IRI("follows")` or `g.addNamespace("rdf", …)`. Structurally a name
/// plus ordered arguments, exactly like [`Step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: String,
    pub args: Vec<Arg>,
}

impl Call {
    pub fn new(function: impl Into<String>, args: Vec<Arg>) -> Self {
        Call {
            function: function.into(),
            args,
        }
    }
}

/// One element of a path: either a chained step or a global call.
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    Step(Step),
    Call(Call),
}

// ============================================================================
// Path
// ============================================================================

/// An immutable traversal expression under construction.
///
/// Seed paths come from the [`Graph`](crate::query::Graph) factory;
/// every chain method appends exactly one element and returns a new
/// value. The receiver is never modified and stays reusable.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Build a path from an explicit element sequence. Chain methods are
    /// the usual construction route; this exists for composing paths out
    /// of prebuilt elements (e.g. several namespace calls ahead of a
    /// vertex chain).
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    /// The element sequence, in append order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Compile this path to its canonical Gizmo query text.
    pub fn to_query(&self) -> crate::error::Result<String> {
        crate::query::compile::compile(self)
    }

    fn chain_step(&self, name: &str, args: Vec<Arg>) -> Path {
        let mut elements = self.elements.clone();
        elements.push(PathElement::Step(Step::new(name, args)));
        Path { elements }
    }

    fn via_step(&self, name: &str, via: Via, tags: &[&str]) -> Path {
        let mut args = Vec::new();
        if let Some(leading) = via.into_arg() {
            args.push(leading);
        }
        args.extend(tags.iter().map(|t| Arg::from(*t)));
        self.chain_step(name, args)
    }

    // ------------------------------------------------------------------------
    // Chain methods (Gizmo step vocabulary)
    // ------------------------------------------------------------------------

    /// Execute the query and include every reached node, with all tags,
    /// in the output set.
    pub fn all(&self) -> Path {
        self.chain_step("all", vec![])
    }

    /// Alias for [`intersect`](Path::intersect).
    pub fn and(&self, path: &Path) -> Path {
        self.intersect(path)
    }

    /// Alias for [`tag`](Path::tag).
    pub fn as_(&self, tags: &[&str]) -> Path {
        self.tag(tags)
    }

    /// Return to the nodes saved under `tag`, keeping every constraint
    /// collected since. With no tag, return to the start of the path.
    pub fn back(&self, tag: Option<&str>) -> Path {
        let args = match tag {
            Some(tag) => vec![Arg::from(tag)],
            None => vec![],
        };
        self.chain_step("back", args)
    }

    /// Follow the predicate in either direction.
    pub fn both(&self, via: impl Into<Via>, tags: &[&str]) -> Path {
        self.via_step("both", via.into(), tags)
    }

    /// Return the number of results as a value.
    pub fn count(&self) -> Path {
        self.chain_step("count", vec![])
    }

    /// Alias for [`except`](Path::except).
    pub fn difference(&self, path: &Path) -> Path {
        self.except(path)
    }

    /// Remove all paths that match `path` from the current set
    /// (set difference A - B).
    pub fn except(&self, path: &Path) -> Path {
        self.chain_step("except", vec![Arg::from(path)])
    }

    /// Constrain the current nodes with a value filter, without moving.
    pub fn filter(&self, filter: Filter) -> Path {
        self.chain_step("filter", vec![Arg::Call(filter)])
    }

    /// Apply a morphism: continue as if the morphism chain had been
    /// written here inline.
    pub fn follow(&self, path: &Path) -> Path {
        self.chain_step("follow", vec![Arg::from(path)])
    }

    /// Like [`follow`](Path::follow), but traverses the morphism
    /// backwards, flipping in/out directions.
    pub fn follow_r(&self, path: &Path) -> Path {
        self.chain_step("followR", vec![Arg::from(path)])
    }

    /// Like [`follow`](Path::follow), but applies the morphism
    /// repeatedly, returning every node encountered.
    pub fn follow_recursive(&self, path: &Path) -> Path {
        self.chain_step("followRecursive", vec![Arg::from(path)])
    }

    /// Like [`all`](Path::all), limited to the first `limit` unique
    /// nodes. A negative limit means no limit.
    pub fn get_limit(&self, limit: i64) -> Path {
        self.chain_step("getLimit", vec![Arg::from(limit)])
    }

    /// Keep only paths whose current node carries the given
    /// predicate/object pair, without following it.
    pub fn has(&self, predicate: impl Into<Arg>, object: impl Into<Arg>) -> Path {
        self.chain_step("has", vec![predicate.into(), object.into()])
    }

    /// Same as [`has`](Path::has) with the constraint applied in the
    /// reverse direction.
    pub fn has_r(&self, predicate: impl Into<Arg>, object: impl Into<Arg>) -> Path {
        self.chain_step("hasR", vec![predicate.into(), object.into()])
    }

    /// Follow predicates into the current nodes (object to subject).
    /// An absent `via` follows every inbound predicate; `tags` save the
    /// predicate used into the output set.
    pub fn in_(&self, via: impl Into<Via>, tags: &[&str]) -> Path {
        self.via_step("in", via.into(), tags)
    }

    /// The set of predicates pointing into the current nodes.
    pub fn in_predicates(&self) -> Path {
        self.chain_step("inPredicates", vec![])
    }

    /// Keep only paths that are also reachable by `path` at this point
    /// (a join on the shared node).
    pub fn intersect(&self, path: &Path) -> Path {
        self.chain_step("intersect", vec![Arg::from(path)])
    }

    /// Keep only paths currently standing on one of the given nodes.
    pub fn is<A: Into<Arg>>(&self, nodes: impl IntoIterator<Item = A>) -> Path {
        self.chain_step("is", nodes.into_iter().map(Into::into).collect())
    }

    /// Set (or with an absent `via`, clear) the subgraph context for the
    /// traversals that follow.
    pub fn label_context(&self, via: impl Into<Via>, tags: &[&str]) -> Path {
        self.via_step("labelContext", via.into(), tags)
    }

    /// The set of inbound and outbound quad labels.
    pub fn labels(&self) -> Path {
        self.chain_step("labels", vec![])
    }

    /// Truncate the current path set to `limit` nodes.
    pub fn limit(&self, limit: i64) -> Path {
        self.chain_step("limit", vec![Arg::from(limit)])
    }

    /// Alias for [`union`](Path::union).
    pub fn or(&self, path: &Path) -> Path {
        self.union(path)
    }

    /// Follow predicates out of the current nodes (subject to object).
    /// An absent `via` follows every outbound predicate; `tags` save the
    /// predicate used into the output set.
    pub fn out(&self, via: impl Into<Via>, tags: &[&str]) -> Path {
        self.via_step("out", via.into(), tags)
    }

    /// The set of predicates pointing out of the current nodes.
    pub fn out_predicates(&self) -> Path {
        self.chain_step("outPredicates", vec![])
    }

    /// Save the object of every quad with `predicate` into `tag`,
    /// without traversing.
    pub fn save(&self, predicate: impl Into<Arg>, tag: &str) -> Path {
        self.chain_step("save", vec![predicate.into(), Arg::from(tag)])
    }

    /// Same as [`save`](Path::save), but an absent predicate yields an
    /// empty tag instead of dropping the path.
    pub fn save_opt(&self, predicate: impl Into<Arg>, tag: &str) -> Path {
        self.chain_step("saveOpt", vec![predicate.into(), Arg::from(tag)])
    }

    /// Same as [`save_opt`](Path::save_opt) via the reverse predicate.
    pub fn save_opt_r(&self, predicate: impl Into<Arg>, tag: &str) -> Path {
        self.chain_step("saveOptR", vec![predicate.into(), Arg::from(tag)])
    }

    /// Same as [`save`](Path::save) via the reverse predicate.
    pub fn save_r(&self, predicate: impl Into<Arg>, tag: &str) -> Path {
        self.chain_step("saveR", vec![predicate.into(), Arg::from(tag)])
    }

    /// Tag the list of predicates pointing into the current nodes.
    pub fn save_in_predicates(&self, tag: &str) -> Path {
        self.chain_step("saveInPredicates", vec![Arg::from(tag)])
    }

    /// Tag the list of predicates pointing out of the current nodes.
    pub fn save_out_predicates(&self, tag: &str) -> Path {
        self.chain_step("saveOutPredicates", vec![Arg::from(tag)])
    }

    /// Skip `offset` nodes before emitting results.
    pub fn skip(&self, offset: i64) -> Path {
        self.chain_step("skip", vec![Arg::from(offset)])
    }

    /// Save the node reached at this point of the path under each tag.
    pub fn tag(&self, tags: &[&str]) -> Path {
        self.chain_step("tag", tags.iter().map(|t| Arg::from(*t)).collect())
    }

    /// Execute the query and return tag-to-node maps, like
    /// [`all`](Path::all) but materialized client-side.
    pub fn tag_array(&self) -> Path {
        self.chain_step("tagArray", vec![])
    }

    /// Same as [`tag_array`](Path::tag_array), limited to one result.
    pub fn tag_value(&self) -> Path {
        self.chain_step("tagValue", vec![])
    }

    /// Execute the query and return the reached nodes as an array.
    pub fn to_array(&self) -> Path {
        self.chain_step("toArray", vec![])
    }

    /// Same as [`to_array`](Path::to_array), limited to one result.
    pub fn to_value(&self) -> Path {
        self.chain_step("toValue", vec![])
    }

    /// Combine the paths of both queries, per-path rather than per-node.
    pub fn union(&self, path: &Path) -> Path {
        self.chain_step("union", vec![Arg::from(path)])
    }

    /// Remove duplicate nodes from the result set.
    pub fn unique(&self) -> Path {
        self.chain_step("unique", vec![])
    }

    /// Return results in ascending order.
    pub fn order(&self) -> Path {
        self.chain_step("order", vec![])
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Graph;

    #[test]
    fn test_chain_appends_one_element() {
        let g = Graph::new();
        let base = g.v(["<alice>"]);
        assert_eq!(base.elements().len(), 1);

        let extended = base.out("follows", &[]).all();
        assert_eq!(extended.elements().len(), 3);
        // receiver untouched
        assert_eq!(base.elements().len(), 1);
    }

    #[test]
    fn test_independent_extension_from_shared_prefix() {
        let g = Graph::new();
        let base = g.v::<&str, _>([]);
        let a = base.out("follows", &[]);
        let b = base.out("status", &[]);

        match (&a.elements()[1], &b.elements()[1]) {
            (PathElement::Step(sa), PathElement::Step(sb)) => {
                assert_eq!(sa.args, vec![Arg::from("follows")]);
                assert_eq!(sb.args, vec![Arg::from("status")]);
            }
            _ => panic!("expected chained steps"),
        }
    }

    #[test]
    fn test_via_omitted_emits_no_position() {
        let g = Graph::new();
        let path = g.v::<&str, _>([]).out((), &["pred"]);
        match path.elements().last() {
            Some(PathElement::Step(step)) => {
                assert_eq!(step.name, "out");
                assert_eq!(step.args, vec![Arg::from("pred")]);
            }
            _ => panic!("expected out step"),
        }
    }

    #[test]
    fn test_via_present_is_leading_argument() {
        let g = Graph::new();
        let path = g.v::<&str, _>([]).out(g.iri("follows"), &["pred"]);
        match path.elements().last() {
            Some(PathElement::Step(step)) => {
                assert_eq!(step.args.len(), 2);
                assert_eq!(step.args[0], Arg::Call(g.iri("follows")));
                assert_eq!(step.args[1], Arg::from("pred"));
            }
            _ => panic!("expected out step"),
        }
    }

    #[test]
    fn test_aliases_share_canonical_step_name() {
        let g = Graph::new();
        let other = g.v(["<bob>"]);
        let base = g.v(["<alice>"]);

        for (aliased, canonical) in [
            (base.and(&other), base.intersect(&other)),
            (base.or(&other), base.union(&other)),
            (base.difference(&other), base.except(&other)),
            (base.as_(&["t"]), base.tag(&["t"])),
        ] {
            assert_eq!(aliased, canonical);
        }
    }

    #[test]
    fn test_back_without_tag_has_empty_args() {
        let g = Graph::new();
        let path = g.v::<&str, _>([]).back(None);
        match path.elements().last() {
            Some(PathElement::Step(step)) => assert!(step.args.is_empty()),
            _ => panic!("expected back step"),
        }
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(Arg::from(5i64), Arg::Int(5));
        assert_eq!(Arg::from(true), Arg::Bool(true));
        assert_eq!(
            Arg::from(vec!["a", "b"]),
            Arg::List(vec![Arg::from("a"), Arg::from("b")])
        );
    }
}
