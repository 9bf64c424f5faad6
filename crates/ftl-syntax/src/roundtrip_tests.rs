use indoc::indoc;

use crate::ast::EqOptions;
use crate::ast::SyntaxEq;
use crate::{Parser, Serializer, parse, serialize};

const CANONICAL: &str = indoc! {r#"
    ### Resource comment

    ## Group comment

    # Attached to the message
    hello = Hello, { $name }!
    -brand = Firefox
        .gender = masculine
    about = About { -brand }
    emails =
        { $unread ->
            [0] No new emails.
            [one] One new email.
           *[other] { $unread } new emails.
        }
    formatted = { NUMBER($ratio, minimumFractionDigits: 2) }
    gender =
        { -brand.gender ->
           *[masculine] His
            [feminine] Her
        }
    multiline =
        First line
          indented
        Last line
    escapes = { "\u00A0\\\"" }
    nested = {{ "literal" }}
    login =
        .placeholder = Email
        .aria-label = Login input
"#};

#[test]
fn canonical_source_survives() {
    assert_eq!(serialize(&parse(CANONICAL)).unwrap(), CANONICAL);
}

#[test]
fn serialized_output_parses_to_the_same_tree() {
    let sources = [
        CANONICAL,
        "foo = Foo\n    Bar\n",
        "foo = { $num ->\n    [one] One\n   *[other] Other\n}\n",
        "foo = { FUNC( 1 ,x:\"y\" ) }\n",
        "foo =\n        deep\n    shallow\n",
        "foo = a\n\n\n    b\n",
        "# only comment\n",
        "a = A\r\nb = B\r\n",
    ];

    for source in sources {
        let first = parse(source);
        let serialized = serialize(&first).unwrap();
        let second = parse(&serialized);

        assert_eq!(first, second, "tree changed for {source:?}:\n{serialized}");
        assert_eq!(serialize(&second).unwrap(), serialized);
    }
}

#[test]
fn non_canonical_layouts_settle_after_one_pass() {
    let sources = [
        "foo = Foo\n{ $x }\n",
        "foo =\n{ $x }\n  tail\n",
        "a = A\r\nb =\r\n    B\r\n    C\r\n",
        "sel = { $n ->\r\n *[a] A\r\n    { $x }\r\n}\r\n",
        "foo =\n    a\n      b\n        c\n",
        "foo =\n        deep\n  shallow\n      middle\n",
        "-t = T\n  .attr =\n      x\n    y\n",
    ];

    for source in sources {
        let once = serialize(&parse(source)).unwrap();
        let twice = serialize(&parse(&once)).unwrap();

        assert_eq!(twice, once, "unstable output for {source:?}");
        assert!(!once.contains('\r'), "CR kept in {once:?}");
        assert_eq!(parse(&once).junk().count(), 0, "junk in {once:?}");
    }
}

#[test]
fn spans_do_not_affect_serialization() {
    let with_spans = Parser::new().with_spans(true).parse(CANONICAL);
    let without = parse(CANONICAL);

    assert_eq!(serialize(&with_spans).unwrap(), serialize(&without).unwrap());
    assert!(with_spans.syntax_eq(&without, &EqOptions::default()));
}

#[test]
fn junk_roundtrip_with_junk_enabled() {
    let source = indoc! {"
        ok = Fine
        broken = {
        also ok = nope
        last = Last
    "};
    let resource = parse(source);

    assert_eq!(resource.junk().count(), 2);
    let serializer = Serializer::new().with_junk(true);
    assert_eq!(serializer.serialize(&resource).unwrap(), source);
}
