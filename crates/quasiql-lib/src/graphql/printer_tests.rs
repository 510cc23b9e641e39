use indoc::indoc;

use crate::graphql::{Source, parse, print};

fn reprint(text: &str) -> String {
    let doc = parse(&Source::new(text, "t")).unwrap();
    print(&doc)
}

#[test]
fn shorthand_query() {
    insta::assert_snapshot!(reprint("{a b{c}}"), @r"
    {
      a
      b {
        c
      }
    }
    ");
}

#[test]
fn operation_with_variables_and_directives() {
    insta::assert_snapshot!(
        reprint("query Q($id: ID!, $tags: [String!] = [\"a\"]) @live { node(id: $id) @include(if: true) { id } }"),
        @r#"
    query Q($id: ID!, $tags: [String!] = ["a"]) @live {
      node(id: $id) @include(if: true) {
        id
      }
    }
    "#
    );
}

#[test]
fn fragments_and_spreads() {
    insta::assert_snapshot!(
        reprint(indoc! {"
            fragment F on User { name ...G ... on Admin { level } ... @skip(if: false) { x } }
            fragment G on User { id }
        "}),
        @r"
    fragment F on User {
      name
      ...G
      ... on Admin {
        level
      }
      ... @skip(if: false) {
        x
      }
    }

    fragment G on User {
      id
    }
    "
    );
}

#[test]
fn values_and_aliases() {
    insta::assert_snapshot!(
        reprint(r#"mutation { a: f(s: "q\"t", o: {k: [1, 2.5, RED, null]}) }"#),
        @r#"
    mutation {
      a: f(s: "q\"t", o: {k: [1, 2.5, RED, null]})
    }
    "#
    );
}

#[test]
fn printed_document_reparses_to_same_structure() {
    let text = "query A($x: Int) { f(x: $x) { ...B } } fragment B on T { g }";
    let first = parse(&Source::new(text, "t")).unwrap();
    let printed = print(&first);
    let second = parse(&Source::new(printed.as_str(), "t")).unwrap();
    assert_eq!(print(&second), printed);
    assert_eq!(first.len(), second.len());
}
