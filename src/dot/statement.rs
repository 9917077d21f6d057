//! Structured DOT statements.
//!
//! Serializers push discrete [`Statement`]s into a [`GraphDescription`]; text is only
//! produced when the description is rendered, so no statement ever has to be patched
//! after the fact.

use std::fmt::{self, Write};

/// Attribute value, either a bare DOT keyword (`filled`, `invis`, `blue`) or free text
/// that gets quoted and escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Keyword(&'static str),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: &'static str,
    pub value: AttrValue,
}

impl Attr {
    pub fn keyword(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: AttrValue::Keyword(value),
        }
    }

    pub fn text(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: AttrValue::Text(value.into()),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AttrValue::Keyword(v) => write!(f, "{}={}", self.key, v),
            AttrValue::Text(v) => write!(f, "{}=\"{}\"", self.key, escape_dot_string(v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `key=value;` applying to the enclosing graph or subgraph.
    GraphAttr(Attr),
    /// `node [...]` defaults for the enclosing scope.
    NodeDefaults(Vec<Attr>),
    Node { id: String, attrs: Vec<Attr> },
    /// `"a" -> "b" -> ... [...]`; a chain of two ids is a plain edge.
    Edge { chain: Vec<String>, attrs: Vec<Attr> },
    Subgraph { id: String, body: Vec<Statement> },
}

impl Statement {
    pub fn node(id: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Statement::Node {
            id: id.into(),
            attrs,
        }
    }

    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Statement::Edge {
            chain: vec![from.into(), to.into()],
            attrs: Vec::new(),
        }
    }

    fn render<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Statement::GraphAttr(attr) => writeln!(out, "{}{};", indent, attr),
            Statement::NodeDefaults(attrs) => {
                writeln!(out, "{}node{};", indent, AttrList(attrs))
            }
            Statement::Node { id, attrs } => {
                writeln!(out, "{}{}{};", indent, quote(id), AttrList(attrs))
            }
            Statement::Edge { chain, attrs } => {
                let ids: Vec<String> = chain.iter().map(|id| quote(id)).collect();
                writeln!(out, "{}{}{};", indent, ids.join(" -> "), AttrList(attrs))
            }
            Statement::Subgraph { id, body } => {
                writeln!(out, "{}subgraph {} {{", indent, quote(id))?;
                for statement in body {
                    statement.render(out, depth + 1)?;
                }
                writeln!(out, "{}}}", indent)
            }
        }
    }
}

struct AttrList<'a>(&'a [Attr]);

impl fmt::Display for AttrList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        let attrs: Vec<String> = self.0.iter().map(Attr::to_string).collect();
        write!(f, " [{}]", attrs.join(", "))
    }
}

/// Ordered list of top-level statements making up one `digraph` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDescription {
    statements: Vec<Statement>,
}

impl GraphDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Full `digraph { ... }` document.
    pub fn to_dot(&self) -> String {
        format!("digraph {{\n{}}}\n", self)
    }
}

impl Extend<Statement> for GraphDescription {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}

/// Renders the body only, one statement per line.
impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.render(f, 1)?;
        }
        Ok(())
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", escape_dot_string(id))
}

/// Escapes characters that would end or break a quoted DOT string.
pub fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
