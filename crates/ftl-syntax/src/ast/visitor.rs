//! Syntax tree visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct and override the `visit_*` methods you
//! care about. Call [`walk`] within an override to continue into the node's
//! children (or omit it to stop descending).
//!
//! ```
//! use ftl_syntax::ast::{NodeRef, TextElement, Visitor};
//!
//! #[derive(Default)]
//! struct TextLength(usize);
//!
//! impl<'ast> Visitor<'ast> for TextLength {
//!     fn visit_text_element(&mut self, node: &'ast TextElement) {
//!         self.0 += node.value.len();
//!     }
//! }
//!
//! let resource = ftl_syntax::parse("a = Hello\nb = World { $x }\n");
//! let mut counter = TextLength::default();
//! counter.visit(NodeRef::Resource(&resource));
//! assert_eq!(counter.0, 11);
//! ```

use super::*;

macro_rules! visit_methods {
    ($($method:ident => $kind:ident),* $(,)?) => {
        /// One method per node kind. Each default descends into the children.
        pub trait Visitor<'ast> {
            /// Dispatches to the `visit_*` method matching the node kind.
            fn visit(&mut self, node: NodeRef<'ast>) {
                match node {
                    $(NodeRef::$kind(n) => self.$method(n),)*
                }
            }

            $(
                fn $method(&mut self, node: &'ast $kind) {
                    walk(self, NodeRef::$kind(node));
                }
            )*
        }
    };
}

visit_methods! {
    visit_resource => Resource,
    visit_message => Message,
    visit_term => Term,
    visit_comment => Comment,
    visit_group_comment => GroupComment,
    visit_resource_comment => ResourceComment,
    visit_junk => Junk,
    visit_annotation => Annotation,
    visit_whitespace => Whitespace,
    visit_attribute => Attribute,
    visit_pattern => Pattern,
    visit_text_element => TextElement,
    visit_placeable => Placeable,
    visit_string_literal => StringLiteral,
    visit_number_literal => NumberLiteral,
    visit_variable_reference => VariableReference,
    visit_message_reference => MessageReference,
    visit_term_reference => TermReference,
    visit_function_reference => FunctionReference,
    visit_select_expression => SelectExpression,
    visit_variant => Variant,
    visit_call_arguments => CallArguments,
    visit_named_argument => NamedArgument,
    visit_identifier => Identifier,
}

/// Visits every child of `node` in field order.
pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: NodeRef<'ast>) {
    for child in node.children() {
        visitor.visit(child);
    }
}
