//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{Annotation, AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
///
/// Diagnostics whose file has a registered source are rendered with a code
/// snippet; the rest are rendered as a title line only.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: Vec<(&'s str, &'s str)>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            sources: Vec::new(),
            colored: false,
        }
    }

    /// Register the text of `path` for snippet rendering.
    pub fn source(mut self, path: &'s str, text: &'s str) -> Self {
        self.sources.push((path, text));
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let level = severity_to_level(diag.severity());
            let title = level.primary_title(&diag.message);

            let mut group = match self.snippet_for(diag) {
                Some(snippet) => title.element(snippet),
                None => Group::with_title(title),
            };
            for hint in &diag.hints {
                group = group.element(Level::HELP.message(hint));
            }

            write!(w, "{}", renderer.render(&[group]))?;
        }

        Ok(())
    }

    fn snippet_for(&self, diag: &DiagnosticMessage) -> Option<Snippet<'s, Annotation<'s>>> {
        let file = diag.file.as_deref()?;
        let range = diag.range?;
        let (path, text) = self.sources.iter().find(|(path, _)| *path == file)?;

        Some(
            Snippet::source(*text)
                .line_start(1)
                .path(*path)
                .annotation(AnnotationKind::Primary.span(adjust_range(range, text.len()))),
        )
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start = usize::from(range.start()).min(limit);
    let end = usize::from(range.end()).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
