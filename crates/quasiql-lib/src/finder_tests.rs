use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indoc::indoc;

use super::*;
use crate::{Error, StructuralError};

fn find(text: &str, rel_path: &str) -> Result<Arc<[FoundTag]>> {
    TreeSitterTagFinder.find(text, Path::new("/base"), &File::new(rel_path))
}

#[test]
fn rooted_tags() {
    assert!(is_graphql_rooted("graphql"));
    assert!(is_graphql_rooted("graphql.experimental"));
    assert!(is_graphql_rooted("graphql.anything"));
    assert!(!is_graphql_rooted("graphqlx"));
    assert!(!is_graphql_rooted("Relay.QL"));
    assert!(!is_graphql_rooted("my.graphql"));
}

#[test]
fn selects_graphql_rooted_tags_in_order() {
    let text = indoc! {r#"
        const a = graphql`fragment A on T { a }`;
        const r = Relay.QL`ignored ${x}`;
        const b = graphql.experimental`fragment B on T { b }`;
        const c = graphql.unknown`{ c }`;
    "#};
    let found = find(text, "a.js").unwrap();

    let tags: Vec<_> = found.iter().map(|f| f.tag.as_str()).collect();
    assert_eq!(tags, vec!["graphql", "graphql.experimental", "graphql.unknown"]);
    assert_eq!(found[0].template, "fragment A on T { a }");
    assert_eq!(&text[found[0].template_range], "fragment A on T { a }");
    assert_eq!(&text[found[0].range], "graphql`fragment A on T { a }`");
}

#[test]
fn substitutions_are_structural_errors() {
    let text = "const q = graphql`fragment F on T { ${other} }`;";
    let err = find(text, "src/q.js").unwrap_err();

    let Error::Structural { error, path } = err else {
        panic!("expected a structural error, got {err:?}");
    };
    assert!(matches!(error, StructuralError::Substitutions { .. }));
    assert_eq!(path, Path::new("src/q.js"));
}

#[test]
#[cfg(feature = "lang-tsx")]
fn tsx_files_use_tsx_grammar() {
    let text = indoc! {r#"
        const q = graphql`query App { viewer { id } }`;
        export const App = () => <div title={"graphql"} />;
    "#};
    let found = find(text, "App.tsx").unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn no_tags() {
    let found = find("// mentions graphql only in a comment\n", "a.js").unwrap();
    assert!(found.is_empty());
}

struct CountingFinder {
    calls: AtomicUsize,
}

impl TagFinder for CountingFinder {
    fn find(&self, text: &str, base_dir: &Path, file: &File) -> Result<Arc<[FoundTag]>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TreeSitterTagFinder.find(text, base_dir, file)
    }
}

#[test]
fn memoized_on_content_and_identity() {
    let finder = MemoizedFinder::new(CountingFinder {
        calls: AtomicUsize::new(0),
    });
    let base = Path::new("/base");
    let file = File::new("a.js");

    let first = finder.find("graphql`{ a }`", base, &file).unwrap();
    let second = finder.find("graphql`{ a }`", base, &file).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(finder.inner.calls.load(Ordering::SeqCst), 1);

    finder.find("graphql`{ b }`", base, &file).unwrap();
    finder.find("graphql`{ a }`", base, &File::new("b.js")).unwrap();
    finder.find("graphql`{ a }`", Path::new("/other"), &file).unwrap();
    assert_eq!(finder.inner.calls.load(Ordering::SeqCst), 4);
    assert_eq!(finder.len(), 4);
}

#[test]
fn errors_are_not_memoized() {
    let finder = MemoizedFinder::new(CountingFinder {
        calls: AtomicUsize::new(0),
    });
    let file = File::new("a.js");
    let text = "graphql`${x}`";

    assert!(finder.find(text, Path::new("/base"), &file).is_err());
    assert!(finder.find(text, Path::new("/base"), &file).is_err());
    assert_eq!(finder.inner.calls.load(Ordering::SeqCst), 2);
    assert!(finder.is_empty());
}
