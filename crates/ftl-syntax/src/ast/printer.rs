//! Indented text dump of a syntax tree.

use std::fmt::Write;

use super::{Field, NodeRef};

/// Renders one line per node, children indented by two spaces.
///
/// Scalar fields are printed inline after the node kind:
///
/// ```text
/// Resource
///   Message
///     Identifier "hello"
///     Pattern
///       TextElement "Hello"
/// ```
pub struct AstPrinter<'a> {
    root: NodeRef<'a>,
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(root: impl Into<NodeRef<'a>>) -> Self {
        Self {
            root: root.into(),
            spans: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: NodeRef<'a>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}", prefix, node.kind())?;

        let mut children = Vec::new();
        for (name, field) in node.fields() {
            match field {
                Field::Node(Some(child)) => children.push(child),
                Field::Node(None) => {}
                Field::Nodes(nodes) => children.extend(nodes),
                Field::Text(text) => write!(w, " {:?}", text)?,
                Field::Texts(texts) => {
                    if !texts.is_empty() {
                        write!(w, " {:?}", texts)?;
                    }
                }
                Field::Bool(true) => write!(w, " {}", name)?,
                Field::Bool(false) => {}
                Field::Span(Some(span)) if self.spans => write!(w, " [{}]", span)?,
                Field::Span(_) => {}
            }
        }
        writeln!(w)?;

        for child in children {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }
}
