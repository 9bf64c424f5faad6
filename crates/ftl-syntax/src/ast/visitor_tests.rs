use indoc::indoc;

use super::*;
use crate::parse;

#[derive(Default)]
struct Collector {
    variables: Vec<String>,
    messages: Vec<String>,
    terms: Vec<String>,
}

impl<'ast> Visitor<'ast> for Collector {
    fn visit_variable_reference(&mut self, node: &'ast VariableReference) {
        self.variables.push(node.id.name.clone());
    }

    fn visit_message_reference(&mut self, node: &'ast MessageReference) {
        self.messages.push(node.id.name.clone());
        walk(self, NodeRef::MessageReference(node));
    }

    fn visit_term_reference(&mut self, node: &'ast TermReference) {
        self.terms.push(node.id.name.clone());
        walk(self, NodeRef::TermReference(node));
    }
}

#[test]
fn collects_references_everywhere() {
    let resource = parse(indoc! {"
        -brand = Firefox
        welcome = Welcome to { -brand }, { $user }!
            .title = { menu.title }
        count =
            { $n ->
               *[other] { $n } items in { -brand(case: \"locative\") }
            }
    "});

    let mut collector = Collector::default();
    collector.visit(NodeRef::Resource(&resource));

    assert_eq!(collector.variables, ["user", "n", "n"]);
    assert_eq!(collector.messages, ["menu"]);
    assert_eq!(collector.terms, ["brand", "brand"]);
}

#[derive(Default)]
struct KindCounter(Vec<NodeKind>);

impl<'ast> Visitor<'ast> for KindCounter {
    fn visit(&mut self, node: NodeRef<'ast>) {
        self.0.push(node.kind());
        walk(self, node);
    }
}

#[test]
fn preorder_traversal() {
    let resource = parse("foo = A { 1 }\n");
    let mut counter = KindCounter::default();
    counter.visit(NodeRef::Resource(&resource));

    assert_eq!(
        counter.0,
        [
            NodeKind::Resource,
            NodeKind::Message,
            NodeKind::Identifier,
            NodeKind::Pattern,
            NodeKind::TextElement,
            NodeKind::Placeable,
            NodeKind::NumberLiteral,
        ]
    );
}

struct SkipAttributes(usize);

impl<'ast> Visitor<'ast> for SkipAttributes {
    fn visit_attribute(&mut self, _: &'ast Attribute) {}

    fn visit_text_element(&mut self, _: &'ast TextElement) {
        self.0 += 1;
    }
}

#[test]
fn overriding_without_walk_prunes_subtree() {
    let resource = parse(indoc! {"
        foo = Foo
            .a = A
            .b = B
        # Comment
        bar = Bar
    "});
    let mut visitor = SkipAttributes(0);
    visitor.visit(NodeRef::Resource(&resource));
    assert_eq!(visitor.0, 2);
}

#[test]
fn visits_junk_annotations() {
    #[derive(Default)]
    struct Codes(Vec<String>);

    impl<'ast> Visitor<'ast> for Codes {
        fn visit_annotation(&mut self, node: &'ast Annotation) {
            self.0.push(node.code.clone());
        }
    }

    let resource = parse("%%%\nfoo =\n");
    let mut codes = Codes::default();
    codes.visit(NodeRef::Resource(&resource));
    assert_eq!(codes.0, ["E0002", "E0005"]);
}
