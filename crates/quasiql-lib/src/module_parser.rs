//! Per-file parsing: transform, find tags, parse, merge.
//!
//! ```text
//! file text → TransformChain → TagFinder → [FoundTag]
//!                                              ↓ per tag
//!                                   tag check → graphql::parse
//!                                              ↓
//!                                     one merged Document
//! ```
//!
//! Any failure aborts the whole file; no partial document is returned.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::file::File;
use crate::finder::{MemoizedFinder, TagFinder};
use crate::graphql::{self, Document, LocationOffset, ParseOptions, Source};
use crate::transform::{TransformChain, TransformRegistry};
use crate::{EXPERIMENTAL_TAG_NAME, Error, InvariantError, Result, TAG_NAME};

/// Parses the GraphQL tags of files under one base directory.
pub struct ModuleParser {
    base_dir: PathBuf,
    chain: TransformChain,
    finder: Arc<dyn TagFinder>,
    options: ParseOptions,
}

pub struct ModuleParserBuilder {
    base_dir: PathBuf,
    transforms: Vec<String>,
    registry: Option<TransformRegistry>,
    finder: Option<Arc<dyn TagFinder>>,
    options: ParseOptions,
}

impl ModuleParserBuilder {
    /// Transform names, applied in order.
    pub fn transforms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transforms = names.into_iter().map(Into::into).collect();
        self
    }

    /// Registry the transform names are resolved in. Defaults to the built-ins.
    pub fn registry(mut self, registry: TransformRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Tag finder. Defaults to a memoized tree-sitter finder.
    pub fn finder(mut self, finder: Arc<dyn TagFinder>) -> Self {
        self.finder = Some(finder);
        self
    }

    pub fn parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves the transform chain. Fails if any transform name is unknown.
    pub fn build(self) -> Result<ModuleParser> {
        let registry = self.registry.unwrap_or_default();
        let chain = TransformChain::build(&registry, &self.base_dir, &self.transforms)?;
        let finder = self
            .finder
            .unwrap_or_else(|| Arc::new(MemoizedFinder::default()));

        Ok(ModuleParser {
            base_dir: self.base_dir,
            chain,
            finder,
            options: self.options,
        })
    }
}

impl ModuleParser {
    pub fn builder(base_dir: impl Into<PathBuf>) -> ModuleParserBuilder {
        ModuleParserBuilder {
            base_dir: base_dir.into(),
            transforms: Vec::new(),
            registry: None,
            finder: None,
            options: ParseOptions::default(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn transforms(&self) -> &TransformChain {
        &self.chain
    }

    /// Reads a file and parses its tags into one document.
    pub fn parse(&self, file: &File, diagnostics: &mut Diagnostics) -> Result<Document> {
        let text = file.read(&self.base_dir)?;
        self.parse_text(file, &text, diagnostics)
    }

    /// Parses already-read file text.
    ///
    /// `text` must mention `graphql`; callers filter files with
    /// [`is_eligible`] first.
    pub fn parse_text(
        &self,
        file: &File,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Document> {
        if !text.contains(TAG_NAME) {
            return Err(InvariantError::UnfilteredFile(file.rel_path.clone()).into());
        }

        let transformed = self.transform(file, text);
        let found = self.finder.find(&transformed, &self.base_dir, file)?;
        let source_name = file.rel_path.display().to_string();

        let mut definitions = Vec::new();
        for tag in found.iter() {
            if tag.tag == EXPERIMENTAL_TAG_NAME {
                diagnostics
                    .report(DiagnosticKind::DeprecatedTag)
                    .file(&file.rel_path)
                    .range(tag.range)
                    .message(&source_name)
                    .emit();
            } else if tag.tag != TAG_NAME {
                return Err(Error::InvalidTag {
                    tag: tag.tag.clone(),
                    path: file.rel_path.clone(),
                });
            }

            let offset = LocationOffset::at(&transformed, tag.template_range.start());
            let source = Source::new(tag.template.as_str(), source_name.as_str())
                .with_location_offset(offset);
            let document = graphql::parse_with_options(&source, self.options)?;
            if document.is_empty() {
                return Err(InvariantError::NoDefinitions {
                    path: file.rel_path.clone(),
                    range: tag.template_range,
                    text: tag.template.clone(),
                }
                .into());
            }
            definitions.extend(document.definitions);
        }

        Ok(Document::new(definitions))
    }

    /// Runs the transform chain over a file's text.
    ///
    /// Diagnostic ranges refer to this text.
    pub fn transform(&self, file: &File, text: &str) -> String {
        self.chain.apply(&file.full_path(&self.base_dir), text)
    }

    pub fn is_eligible(&self, file: &File) -> Result<bool> {
        is_eligible(&self.base_dir, file)
    }
}

impl std::fmt::Debug for ModuleParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleParser")
            .field("base_dir", &self.base_dir)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// Whether a file might contain a GraphQL tag.
///
/// A plain substring check: mentions in comments or strings count too.
pub fn is_eligible(base_dir: &Path, file: &File) -> Result<bool> {
    Ok(file.read(base_dir)?.contains(TAG_NAME))
}

/// Reusable [`is_eligible`] bound to a base directory.
pub fn file_filter(base_dir: impl Into<PathBuf>) -> impl Fn(&File) -> Result<bool> + Send + Sync {
    let base_dir = base_dir.into();
    move |file| is_eligible(&base_dir, file)
}

#[cfg(test)]
#[path = "module_parser_tests.rs"]
mod module_parser_tests;
