use std::path::{Path, PathBuf};

use rowan::{TextRange, TextSize};

use super::*;
use crate::host::{SourceLocation, TaggedLiteralSite, tagged_literals};

fn site(tag: &str, segments: &[&str]) -> TaggedLiteralSite {
    TaggedLiteralSite::new(
        tag,
        segments.iter().copied(),
        SourceLocation {
            file: PathBuf::from("src/App.js"),
            range: TextRange::new(TextSize::from(8), TextSize::from(30)),
        },
    )
}

#[test]
fn other_tags_are_not_graphql_tags() {
    for tag in ["gql", "Relay.QL", "graphqlx", "graphql.other", "experimental", "x.graphql"] {
        let result = validate_tag(&site(tag, &["fragment F on T { a }"])).unwrap();
        assert!(result.is_none(), "{tag} should be ignored");
    }
}

#[test]
fn other_tags_ignore_substitutions() {
    let result = validate_tag(&site("css", &["a", "b", "c"])).unwrap();
    assert!(result.is_none());
}

#[test]
fn segment_count_other_than_one_is_structural() {
    for segments in [&[][..], &["a", "b"][..], &["{ a }", "", "{ b }"][..]] {
        let err = validate_tag(&site("graphql", segments)).unwrap_err();
        let Error::Structural { error, path } = err else {
            panic!("expected a structural error, got {err:?}");
        };
        assert!(matches!(error, StructuralError::Substitutions { .. }));
        assert_eq!(path, Path::new("src/App.js"));
    }
}

#[test]
fn comment_only_literal_is_empty() {
    let err = validate_tag(&site("graphql", &["# just a comment"])).unwrap_err();
    assert!(matches!(
        err,
        Error::Structural {
            error: StructuralError::EmptyTag { .. },
            ..
        }
    ));
    insta::assert_snapshot!(err, @"unexpected empty graphql tag in src/App.js");
}

#[test]
fn blank_literal_is_empty() {
    let err = validate_tag(&site("graphql.experimental", &["  \n  "])).unwrap_err();
    assert!(matches!(
        err,
        Error::Structural {
            error: StructuralError::EmptyTag { .. },
            ..
        }
    ));
}

#[test]
fn syntax_errors_propagate() {
    let err = validate_tag(&site("graphql", &["fragment F on T {"])).unwrap_err();
    let Error::Syntax(syntax) = err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert_eq!(syntax.name, "src/App.js");
    insta::assert_snapshot!(syntax, @"Syntax Error: Expected Name, found <EOF>. (src/App.js:1:18)");
}

#[test]
fn returns_the_single_document() {
    let document = validate_tag(&site("graphql", &["fragment F on Type { field }"]))
        .unwrap()
        .unwrap();
    assert_eq!(document.len(), 1);
    assert_eq!(document.definitions[0].name(), Some("F"));
}

#[test]
fn experimental_tag_is_accepted() {
    let document = validate_tag(&site("graphql.experimental", &["query Q { a } query R { b }"]))
        .unwrap()
        .unwrap();
    assert_eq!(document.len(), 2);
}

#[test]
fn tree_sitter_literals() {
    let source = "graphql`{ a }`; css`x`; graphql`{ ${b} }`;";
    let lang = quasiql_langs::javascript();
    let tree = lang.parse(source);
    let literals = tagged_literals(&lang, &tree, source, Path::new("a.js"));

    assert!(validate_tag(&literals[0]).unwrap().is_some());
    assert!(validate_tag(&literals[1]).unwrap().is_none());
    assert!(matches!(
        validate_tag(&literals[2]),
        Err(Error::Structural {
            error: StructuralError::Substitutions { .. },
            ..
        })
    ));
}
