//! Uniform, explicitly enumerated view over every node kind.

use super::*;

/// Closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Resource,
    Message,
    Term,
    Comment,
    GroupComment,
    ResourceComment,
    Junk,
    Annotation,
    Whitespace,
    Attribute,
    Pattern,
    TextElement,
    Placeable,
    StringLiteral,
    NumberLiteral,
    VariableReference,
    MessageReference,
    TermReference,
    FunctionReference,
    SelectExpression,
    Variant,
    CallArguments,
    NamedArgument,
    Identifier,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Resource => "Resource",
            NodeKind::Message => "Message",
            NodeKind::Term => "Term",
            NodeKind::Comment => "Comment",
            NodeKind::GroupComment => "GroupComment",
            NodeKind::ResourceComment => "ResourceComment",
            NodeKind::Junk => "Junk",
            NodeKind::Annotation => "Annotation",
            NodeKind::Whitespace => "Whitespace",
            NodeKind::Attribute => "Attribute",
            NodeKind::Pattern => "Pattern",
            NodeKind::TextElement => "TextElement",
            NodeKind::Placeable => "Placeable",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::VariableReference => "VariableReference",
            NodeKind::MessageReference => "MessageReference",
            NodeKind::TermReference => "TermReference",
            NodeKind::FunctionReference => "FunctionReference",
            NodeKind::SelectExpression => "SelectExpression",
            NodeKind::Variant => "Variant",
            NodeKind::CallArguments => "CallArguments",
            NodeKind::NamedArgument => "NamedArgument",
            NodeKind::Identifier => "Identifier",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed reference to any node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Resource(&'a Resource),
    Message(&'a Message),
    Term(&'a Term),
    Comment(&'a Comment),
    GroupComment(&'a GroupComment),
    ResourceComment(&'a ResourceComment),
    Junk(&'a Junk),
    Annotation(&'a Annotation),
    Whitespace(&'a Whitespace),
    Attribute(&'a Attribute),
    Pattern(&'a Pattern),
    TextElement(&'a TextElement),
    Placeable(&'a Placeable),
    StringLiteral(&'a StringLiteral),
    NumberLiteral(&'a NumberLiteral),
    VariableReference(&'a VariableReference),
    MessageReference(&'a MessageReference),
    TermReference(&'a TermReference),
    FunctionReference(&'a FunctionReference),
    SelectExpression(&'a SelectExpression),
    Variant(&'a Variant),
    CallArguments(&'a CallArguments),
    NamedArgument(&'a NamedArgument),
    Identifier(&'a Identifier),
}

/// Value of one named field of a node.
#[derive(Debug, Clone)]
pub enum Field<'a> {
    /// Single child; `None` when an optional child is absent.
    Node(Option<NodeRef<'a>>),
    Nodes(Vec<NodeRef<'a>>),
    Text(&'a str),
    Texts(&'a [String]),
    Bool(bool),
    Span(Option<Span>),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Resource(_) => NodeKind::Resource,
            NodeRef::Message(_) => NodeKind::Message,
            NodeRef::Term(_) => NodeKind::Term,
            NodeRef::Comment(_) => NodeKind::Comment,
            NodeRef::GroupComment(_) => NodeKind::GroupComment,
            NodeRef::ResourceComment(_) => NodeKind::ResourceComment,
            NodeRef::Junk(_) => NodeKind::Junk,
            NodeRef::Annotation(_) => NodeKind::Annotation,
            NodeRef::Whitespace(_) => NodeKind::Whitespace,
            NodeRef::Attribute(_) => NodeKind::Attribute,
            NodeRef::Pattern(_) => NodeKind::Pattern,
            NodeRef::TextElement(_) => NodeKind::TextElement,
            NodeRef::Placeable(_) => NodeKind::Placeable,
            NodeRef::StringLiteral(_) => NodeKind::StringLiteral,
            NodeRef::NumberLiteral(_) => NodeKind::NumberLiteral,
            NodeRef::VariableReference(_) => NodeKind::VariableReference,
            NodeRef::MessageReference(_) => NodeKind::MessageReference,
            NodeRef::TermReference(_) => NodeKind::TermReference,
            NodeRef::FunctionReference(_) => NodeKind::FunctionReference,
            NodeRef::SelectExpression(_) => NodeKind::SelectExpression,
            NodeRef::Variant(_) => NodeKind::Variant,
            NodeRef::CallArguments(_) => NodeKind::CallArguments,
            NodeRef::NamedArgument(_) => NodeKind::NamedArgument,
            NodeRef::Identifier(_) => NodeKind::Identifier,
        }
    }

    /// Span recorded for the node, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            NodeRef::Resource(n) => n.span,
            NodeRef::Message(n) => n.span,
            NodeRef::Term(n) => n.span,
            NodeRef::Comment(n) => n.span,
            NodeRef::GroupComment(n) => n.span,
            NodeRef::ResourceComment(n) => n.span,
            NodeRef::Junk(n) => n.span,
            NodeRef::Annotation(n) => Some(n.span),
            NodeRef::Whitespace(n) => n.span,
            NodeRef::Attribute(n) => n.span,
            NodeRef::Pattern(n) => n.span,
            NodeRef::TextElement(n) => n.span,
            NodeRef::Placeable(n) => n.span,
            NodeRef::StringLiteral(n) => n.span,
            NodeRef::NumberLiteral(n) => n.span,
            NodeRef::VariableReference(n) => n.span,
            NodeRef::MessageReference(n) => n.span,
            NodeRef::TermReference(n) => n.span,
            NodeRef::FunctionReference(n) => n.span,
            NodeRef::SelectExpression(n) => n.span,
            NodeRef::Variant(n) => n.span,
            NodeRef::CallArguments(n) => n.span,
            NodeRef::NamedArgument(n) => n.span,
            NodeRef::Identifier(n) => n.span,
        }
    }

    /// Named fields in declaration order, span last.
    pub fn fields(&self) -> Vec<(&'static str, Field<'a>)> {
        use Field::{Bool, Nodes, Text, Texts};

        let one = |node: NodeRef<'a>| Field::Node(Some(node));
        let span = ("span", Field::Span(self.span()));

        let mut fields = match *self {
            NodeRef::Resource(n) => vec![("body", Nodes(n.body.iter().map(NodeRef::from).collect()))],
            NodeRef::Message(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("value", Field::Node(n.value.as_ref().map(NodeRef::Pattern))),
                ("attributes", Nodes(n.attributes.iter().map(NodeRef::Attribute).collect())),
                ("comment", Field::Node(n.comment.as_ref().map(NodeRef::Comment))),
            ],
            NodeRef::Term(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("value", one(NodeRef::Pattern(&n.value))),
                ("attributes", Nodes(n.attributes.iter().map(NodeRef::Attribute).collect())),
                ("comment", Field::Node(n.comment.as_ref().map(NodeRef::Comment))),
            ],
            NodeRef::Comment(n) => vec![("content", Text(&n.content))],
            NodeRef::GroupComment(n) => vec![("content", Text(&n.content))],
            NodeRef::ResourceComment(n) => vec![("content", Text(&n.content))],
            NodeRef::Junk(n) => vec![
                ("content", Text(&n.content)),
                ("annotations", Nodes(n.annotations.iter().map(NodeRef::Annotation).collect())),
            ],
            NodeRef::Annotation(n) => vec![
                ("code", Text(&n.code)),
                ("message", Text(&n.message)),
                ("arguments", Texts(&n.arguments)),
            ],
            NodeRef::Whitespace(n) => vec![("content", Text(&n.content))],
            NodeRef::Attribute(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("value", one(NodeRef::Pattern(&n.value))),
            ],
            NodeRef::Pattern(n) => vec![(
                "elements",
                Nodes(n.elements.iter().map(NodeRef::from).collect()),
            )],
            NodeRef::TextElement(n) => vec![("value", Text(&n.value))],
            NodeRef::Placeable(n) => vec![("expression", one(NodeRef::from(&n.expression)))],
            NodeRef::StringLiteral(n) => vec![("value", Text(&n.value))],
            NodeRef::NumberLiteral(n) => vec![("value", Text(&n.value))],
            NodeRef::VariableReference(n) => vec![("id", one(NodeRef::Identifier(&n.id)))],
            NodeRef::MessageReference(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("attribute", Field::Node(n.attribute.as_ref().map(NodeRef::Identifier))),
            ],
            NodeRef::TermReference(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("attribute", Field::Node(n.attribute.as_ref().map(NodeRef::Identifier))),
                ("arguments", Field::Node(n.arguments.as_ref().map(NodeRef::CallArguments))),
            ],
            NodeRef::FunctionReference(n) => vec![
                ("id", one(NodeRef::Identifier(&n.id))),
                ("arguments", one(NodeRef::CallArguments(&n.arguments))),
            ],
            NodeRef::SelectExpression(n) => vec![
                ("selector", one(NodeRef::from(&n.selector))),
                ("variants", Nodes(n.variants.iter().map(NodeRef::Variant).collect())),
            ],
            NodeRef::Variant(n) => vec![
                ("key", one(NodeRef::from(&n.key))),
                ("value", one(NodeRef::Pattern(&n.value))),
                ("default", Bool(n.default)),
            ],
            NodeRef::CallArguments(n) => vec![
                ("positional", Nodes(n.positional.iter().map(NodeRef::from).collect())),
                ("named", Nodes(n.named.iter().map(NodeRef::NamedArgument).collect())),
            ],
            NodeRef::NamedArgument(n) => vec![
                ("name", one(NodeRef::Identifier(&n.name))),
                ("value", one(NodeRef::from(&n.value))),
            ],
            NodeRef::Identifier(n) => vec![("name", Text(&n.name))],
        };
        fields.push(span);
        fields
    }

    /// Child nodes in field order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut children = Vec::new();
        for (_, field) in self.fields() {
            match field {
                Field::Node(Some(node)) => children.push(node),
                Field::Nodes(nodes) => children.extend(nodes),
                _ => {}
            }
        }
        children
    }
}

impl<'a> From<&'a TopLevel> for NodeRef<'a> {
    fn from(node: &'a TopLevel) -> Self {
        match node {
            TopLevel::Entry(entry) => NodeRef::from(entry),
            TopLevel::Junk(junk) => NodeRef::Junk(junk),
            TopLevel::Whitespace(whitespace) => NodeRef::Whitespace(whitespace),
        }
    }
}

impl<'a> From<&'a Entry> for NodeRef<'a> {
    fn from(node: &'a Entry) -> Self {
        match node {
            Entry::Message(n) => NodeRef::Message(n),
            Entry::Term(n) => NodeRef::Term(n),
            Entry::Comment(n) => NodeRef::Comment(n),
            Entry::GroupComment(n) => NodeRef::GroupComment(n),
            Entry::ResourceComment(n) => NodeRef::ResourceComment(n),
        }
    }
}

impl<'a> From<&'a PatternElement> for NodeRef<'a> {
    fn from(node: &'a PatternElement) -> Self {
        match node {
            PatternElement::TextElement(n) => NodeRef::TextElement(n),
            PatternElement::Placeable(n) => NodeRef::Placeable(n),
        }
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(node: &'a Expression) -> Self {
        match node {
            Expression::StringLiteral(n) => NodeRef::StringLiteral(n),
            Expression::NumberLiteral(n) => NodeRef::NumberLiteral(n),
            Expression::VariableReference(n) => NodeRef::VariableReference(n),
            Expression::MessageReference(n) => NodeRef::MessageReference(n),
            Expression::TermReference(n) => NodeRef::TermReference(n),
            Expression::FunctionReference(n) => NodeRef::FunctionReference(n),
            Expression::SelectExpression(n) => NodeRef::SelectExpression(n),
            Expression::Placeable(n) => NodeRef::Placeable(n),
        }
    }
}

impl<'a> From<&'a Literal> for NodeRef<'a> {
    fn from(node: &'a Literal) -> Self {
        match node {
            Literal::StringLiteral(n) => NodeRef::StringLiteral(n),
            Literal::NumberLiteral(n) => NodeRef::NumberLiteral(n),
        }
    }
}

impl<'a> From<&'a VariantKey> for NodeRef<'a> {
    fn from(node: &'a VariantKey) -> Self {
        match node {
            VariantKey::Identifier(n) => NodeRef::Identifier(n),
            VariantKey::NumberLiteral(n) => NodeRef::NumberLiteral(n),
        }
    }
}

impl<'a> From<&'a Resource> for NodeRef<'a> {
    fn from(node: &'a Resource) -> Self {
        NodeRef::Resource(node)
    }
}
