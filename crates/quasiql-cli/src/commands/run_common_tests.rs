use std::path::Path;

use quasiql_lib::{DiagnosticKind, Diagnostics, File};

use super::config::ProjectArgs;
use super::run_common::{SourceTexts, open_parser, relative_file};

#[test]
fn relative_file_strips_base_dir() {
    let base = Path::new("src");
    assert_eq!(relative_file(base, Path::new("src/a.js")), File::new("a.js"));
    assert_eq!(relative_file(base, Path::new("a.js")), File::new("a.js"));
    assert_eq!(
        relative_file(Path::new("."), Path::new("src/a.js")),
        File::new("src/a.js")
    );
    assert_eq!(
        relative_file(Path::new("./src"), Path::new("src/b.js")),
        File::new("b.js")
    );
    assert_eq!(
        relative_file(Path::new("./src"), Path::new("./src/b.js")),
        File::new("b.js")
    );
    assert_eq!(
        relative_file(Path::new("src"), Path::new("./src/c.js")),
        File::new("c.js")
    );
    assert_eq!(
        relative_file(Path::new("."), Path::new("./d.js")),
        File::new("d.js")
    );
}

#[test]
fn diagnostics_render_against_transformed_text() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.js"),
        "\u{FEFF}const q = graphql.experimental`fragment F on T { a }`;\n",
    )
    .unwrap();

    let project = ProjectArgs {
        base_dir: Some(dir.path().to_path_buf()),
        transforms: vec!["strip-bom".to_string()],
        config: None,
    };
    let parser = open_parser(&project, false);
    let file = File::new("a.js");
    let mut diagnostics = Diagnostics::new();
    parser.parse(&file, &mut diagnostics).unwrap();

    let mut sources = SourceTexts::default();
    sources.add(&parser, &file);
    sources.add(&parser, &File::new("missing.js"));

    assert_eq!(diagnostics.iter().next().unwrap().kind(), DiagnosticKind::DeprecatedTag);
    let rendered = sources.render(&diagnostics, false);
    assert!(rendered.starts_with(
        "warning: graphql.experimental`...` usage should be replaced with graphql`...` in \"a.js\""
    ));
    assert!(rendered.contains(" --> a.js:1:11"));
    assert!(rendered.contains("1 | const q = graphql.experimental`fragment F on T { a }`;"));
    assert!(rendered.contains("no other changes are needed"));
}
