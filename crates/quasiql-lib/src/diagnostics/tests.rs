use std::path::Path;

use rowan::TextRange;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyTag).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert_eq!(
        diagnostics.iter().next().unwrap().message(),
        "unexpected empty graphql tag"
    );
}

#[test]
fn deprecated_tag_is_a_warning() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DeprecatedTag)
        .file(Path::new("src/App.js"))
        .message("src/App.js")
        .emit();

    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warning_count(), 1);
    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.file(), Some("src/App.js"));
    insta::assert_snapshot!(msg.message(), @r#"graphql.experimental`...` usage should be replaced with graphql`...` in "src/App.js""#);
}

#[test]
fn display_includes_location_and_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidTag)
        .file(Path::new("a.js"))
        .range(TextRange::new(3.into(), 9.into()))
        .message("gql")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(msg.to_string(), @"error in a.js at 3..9: invalid tag `gql` (hint: expected graphql``)");
}

#[test]
fn extra_hints_follow_default_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SubstitutionsInTag)
        .hint("move the interpolated value into a variable")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.hints().len(), 2);
    assert_eq!(msg.hints()[1], "move the interpolated value into a variable");
}

#[test]
fn counts_and_extend() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::DeprecatedTag).emit();

    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::SyntaxError).emit();
    second.report(DiagnosticKind::Io).emit();

    first.extend(second);
    assert_eq!(first.len(), 3);
    assert_eq!(first.error_count(), 2);
    assert_eq!(first.warning_count(), 1);
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.printer().render().is_empty());
}

#[test]
fn printer_with_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError)
        .file(Path::new("a.js"))
        .range(TextRange::new(0.into(), 5.into()))
        .message("bad text")
        .emit();

    let result = diagnostics.printer().source("a.js", "hello world").render();
    insta::assert_snapshot!(result, @r"
    error: bad text
     --> a.js:1:1
      |
    1 | hello world
      | ^^^^^
    ");
}

#[test]
fn printer_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownTransform)
        .message("vue")
        .emit();

    let result = diagnostics.printer().render();
    insta::assert_snapshot!(result, @"error: cannot resolve transform `vue`");
}

#[test]
fn printer_renders_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DeprecatedTag)
        .message("a.js")
        .emit();

    let result = diagnostics.printer().render();
    assert!(result.starts_with("warning:"));
    assert!(result.contains("graphql.experimental will be removed"));
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyTag)
        .file(Path::new("a.js"))
        .range(TextRange::new(0.into(), 5.into()))
        .emit();

    let result = diagnostics
        .printer()
        .source("a.js", "hello")
        .colored(true)
        .render();
    assert!(result.contains("empty graphql tag"));
    assert!(result.contains('\x1b'));
}
