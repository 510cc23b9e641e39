//! Shared logic for check and ast commands.

use std::path::Path;

use quasiql_lib::{CachingParser, Diagnostics, File, ParserFactory};

use super::config::{ProjectArgs, Settings};

/// Resolve settings and build a parser, exiting on failure.
pub fn open_parser(project: &ProjectArgs, color: bool) -> CachingParser {
    let Settings {
        base_dir,
        transforms,
    } = project.resolve().unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    });

    ParserFactory::new(transforms)
        .for_base_dir(base_dir)
        .unwrap_or_else(|err| {
            let mut diagnostics = Diagnostics::new();
            err.report(&mut diagnostics);
            eprint!("{}", diagnostics.printer().colored(color).render());
            eprintln!();
            eprintln!("Run 'quasiql transforms' for the full list.");
            std::process::exit(1);
        })
}

/// A command-line path as a file of the parser's base directory.
///
/// Paths under the base directory are made relative to it; anything else is
/// kept as given and joined onto the base directory when read.
pub fn relative_file(base_dir: &Path, path: &Path) -> File {
    let base = base_dir.strip_prefix(".").unwrap_or(base_dir);
    let path = path.strip_prefix(".").unwrap_or(path);
    let rel_path = if base.as_os_str().is_empty() {
        path
    } else {
        path.strip_prefix(base).unwrap_or(path)
    };
    File::new(rel_path)
}

/// Transformed text of files that produced diagnostics, for snippet rendering.
#[derive(Default)]
pub struct SourceTexts {
    texts: Vec<(String, String)>,
}

impl SourceTexts {
    /// Record the text the parser saw for `file`. Unreadable files are skipped.
    pub fn add(&mut self, parser: &CachingParser, file: &File) {
        let Ok(text) = file.read(parser.base_dir()) else {
            return;
        };
        let name = file.rel_path().display().to_string();
        let transformed = parser.parser().transform(file, &text);
        self.texts.push((name, transformed));
    }

    pub fn render(&self, diagnostics: &Diagnostics, color: bool) -> String {
        let mut printer = diagnostics.printer().colored(color);
        for (name, text) in &self.texts {
            printer = printer.source(name, text);
        }
        printer.render()
    }
}
