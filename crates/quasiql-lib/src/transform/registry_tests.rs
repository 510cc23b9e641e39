use std::path::Path;
use std::sync::Arc;

use indoc::indoc;

use super::builtin::vue_script;
use super::{CRLF_TO_LF, STRIP_BOM, Transform, TransformChain, TransformRegistry, VUE_SCRIPT};

#[test]
fn builtins_in_registration_order() {
    let registry = TransformRegistry::new();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec![STRIP_BOM, CRLF_TO_LF, VUE_SCRIPT]);
    assert!(TransformRegistry::empty().is_empty());
}

#[test]
fn suggestions_for_typos() {
    let registry = TransformRegistry::new();
    assert_eq!(registry.suggest("strip-bon").as_deref(), Some("strip-bom"));
    assert_eq!(registry.suggest("CRLF-TO-LF").as_deref(), Some("crlf-to-lf"));
    assert_eq!(registry.suggest("babel"), None);
}

#[test]
fn register_replaces_existing_name() {
    let mut registry = TransformRegistry::new();
    registry.register(STRIP_BOM, |_: &Path| -> Transform {
        Arc::new(|_: &Path, _: &str| "replaced".to_string())
    });
    assert_eq!(registry.len(), 3);

    let chain = TransformChain::build(&registry, Path::new("/"), [STRIP_BOM]).unwrap();
    assert_eq!(chain.apply(Path::new("a.js"), "x"), "replaced");
}

#[test]
fn strip_bom_and_crlf() {
    let chain =
        TransformChain::build(&TransformRegistry::new(), Path::new("/"), [STRIP_BOM, CRLF_TO_LF])
            .unwrap();
    assert_eq!(
        chain.apply(Path::new("a.js"), "\u{FEFF}a\r\nb\r\n"),
        "a\nb\n"
    );
    assert_eq!(chain.apply(Path::new("a.js"), "no bom\n"), "no bom\n");
}

#[test]
fn vue_script_blanks_template_and_style() {
    let text = indoc! {r#"
        <template><div>{{ graphql }}</div></template>
        <script>
        const q = graphql`{ a }`;
        </script>
        <style>.x {}</style>
    "#};
    let out = vue_script(Path::new("App.vue"), text);

    assert_eq!(out.len(), text.len());
    assert_eq!(out.lines().count(), text.lines().count());
    let offset = text.find("graphql`").unwrap();
    assert_eq!(&out[offset..offset + 8], "graphql`");
    assert!(!out.contains("<template>"));
    assert!(!out.contains("</script>"));
    assert!(!out.contains(".x"));
    assert_eq!(out.trim(), "const q = graphql`{ a }`;");
}

#[test]
fn vue_script_handles_multiple_blocks_and_attributes() {
    let text = "<script>a</script><script setup lang=\"ts\">b</script>";
    let out = vue_script(Path::new("C.vue"), text);
    assert_eq!(out.len(), text.len());
    let kept: String = out.split_whitespace().collect();
    assert_eq!(kept, "ab");
}

#[test]
fn vue_script_keeps_unclosed_script() {
    let out = vue_script(Path::new("C.vue"), "<p>é</p><script>tail");
    assert_eq!(out.trim_start(), "tail");
    assert_eq!(out.len(), "<p>é</p><script>tail".len());
}

#[test]
fn vue_script_ignores_other_files() {
    let text = "<script>x</script>";
    assert_eq!(vue_script(Path::new("a.js"), text), text);
}
