//! Transforms available in every registry.

use std::path::Path;
use std::sync::Arc;

use super::{Transform, TransformRegistry};

pub const STRIP_BOM: &str = "strip-bom";
pub const CRLF_TO_LF: &str = "crlf-to-lf";
pub const VUE_SCRIPT: &str = "vue-script";

pub(super) fn register_all(registry: &mut TransformRegistry) {
    registry
        .register(STRIP_BOM, |_: &Path| -> Transform { Arc::new(strip_bom) })
        .register(CRLF_TO_LF, |_: &Path| -> Transform { Arc::new(crlf_to_lf) })
        .register(VUE_SCRIPT, |_: &Path| -> Transform { Arc::new(vue_script) });
}

fn strip_bom(_filename: &Path, text: &str) -> String {
    text.strip_prefix('\u{FEFF}').unwrap_or(text).to_string()
}

fn crlf_to_lf(_filename: &Path, text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Blanks everything outside `<script>` blocks of `.vue` files.
///
/// Blanked bytes become spaces and line breaks are kept, so offsets and
/// line numbers in the output match the original file. Other files pass
/// through unchanged.
pub(super) fn vue_script(filename: &Path, text: &str) -> String {
    if filename.extension().and_then(|e| e.to_str()) != Some("vue") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some((content_start, content_end)) = next_script_block(text, pos) {
        blank_into(&mut out, &text[pos..content_start]);
        out.push_str(&text[content_start..content_end]);
        pos = content_end;
    }
    blank_into(&mut out, &text[pos..]);

    out
}

/// Byte range of the contents of the next `<script ...>...</script>` block.
fn next_script_block(text: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &text[from..];
    let open = rest.find("<script")?;
    let open_end = rest[open..].find('>')? + open + 1;
    let close = rest[open_end..]
        .find("</script>")
        .map_or(rest.len(), |i| i + open_end);
    Some((from + open_end, from + close))
}

fn blank_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            out.push(ch);
        } else {
            out.extend(std::iter::repeat_n(' ', ch.len_utf8()));
        }
    }
}
