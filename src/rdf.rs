//! RDF 术语类型定义
//!
//! 提供命名节点、空白节点和字面量三种术语，以及 N-Quads 文本形式的序列化。
//! 序列化结果作为已转义的不透明记号使用（查询构建器不再做二次转义）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 命名节点 (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedNode(pub String);

impl NamedNode {
    pub fn new(iri: impl Into<String>) -> Self {
        NamedNode(iri.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// 空白节点
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlankNode(pub String);

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        BlankNode(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// 字面量
///
/// 语言标签在 N-Quads 序列化时不输出，带类型的字面量输出 `"value"^^<datatype>`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
    pub datatype: Option<NamedNode>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    pub fn typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language.is_some() {
            write!(f, "\"{}\"", self.value)
        } else if let Some(datatype) = &self.datatype {
            write!(f, "\"{}\"^^{}", self.value, datatype)
        } else {
            write!(f, "\"{}\"", self.value)
        }
    }
}

/// RDF 术语
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    /// 命名节点术语
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode(NamedNode::new(iri))
    }

    /// 空白节点术语
    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(BlankNode::new(id))
    }

    /// 无类型字面量术语
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::new(value))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => n.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Literal(l) => l.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(n: NamedNode) -> Self {
        Term::NamedNode(n)
    }
}

impl From<BlankNode> for Term {
    fn from(b: BlankNode) -> Self {
        Term::BlankNode(b)
    }
}

impl From<Literal> for Term {
    fn from(l: Literal) -> Self {
        Term::Literal(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node_serialization() {
        assert_eq!(Term::named("alice").to_string(), "<alice>");
        assert_eq!(
            NamedNode::new("http://example.com/x").to_string(),
            "<http://example.com/x>"
        );
    }

    #[test]
    fn test_blank_node_serialization() {
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
    }

    #[test]
    fn test_plain_literal_serialization() {
        assert_eq!(Term::literal("cool_person").to_string(), "\"cool_person\"");
    }

    #[test]
    fn test_language_literal_drops_tag() {
        let term = Term::Literal(Literal::with_language("bonjour", "fr"));
        assert_eq!(term.to_string(), "\"bonjour\"");
    }

    #[test]
    fn test_typed_literal_serialization() {
        let term = Term::Literal(Literal::typed(
            "42",
            NamedNode::new("http://www.w3.org/2001/XMLSchema#integer"),
        ));
        assert_eq!(
            term.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}
