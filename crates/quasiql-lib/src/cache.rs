//! Caching parsed documents by file identity.
//!
//! A [`ParserFactory`] owns one cache and one tag finder and hands out a
//! [`CachingParser`] per base directory. Parsers built by the same factory
//! share both, so a file is parsed at most once per content hash.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::file::{File, FileKey};
use crate::finder::{MemoizedFinder, TagFinder};
use crate::graphql::Document;
use crate::module_parser::ModuleParser;
use crate::transform::TransformRegistry;

/// Storage for parsed documents keyed by [`FileKey`].
pub trait AstCache: Send + Sync {
    /// Returns the cached document, or runs `compute` and stores its result.
    ///
    /// Errors from `compute` are returned and not stored.
    fn get_or_compute(
        &self,
        key: FileKey,
        compute: &mut dyn FnMut() -> Result<Document>,
    ) -> Result<Arc<Document>>;
}

/// In-process [`AstCache`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<FileKey, Arc<Document>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl AstCache for MemoryCache {
    fn get_or_compute(
        &self,
        key: FileKey,
        compute: &mut dyn FnMut() -> Result<Document>,
    ) -> Result<Arc<Document>> {
        if let Some(document) = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(document));
        }

        // Lock released while parsing; a concurrent miss on the same key parses twice.
        let document = Arc::new(compute()?);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&document));
        Ok(document)
    }
}

/// A [`ModuleParser`] in front of an [`AstCache`].
pub struct CachingParser {
    parser: ModuleParser,
    cache: Arc<dyn AstCache>,
}

impl CachingParser {
    pub fn new(parser: ModuleParser, cache: Arc<dyn AstCache>) -> Self {
        Self { parser, cache }
    }

    /// Parses a file, reusing the cached document when its content is unchanged.
    ///
    /// Warnings are only reported when the file is actually parsed.
    pub fn parse(&self, file: &File, diagnostics: &mut Diagnostics) -> Result<Arc<Document>> {
        let text = file.read(self.parser.base_dir())?;
        let key = FileKey::new(self.parser.base_dir(), file, &text);
        self.cache.get_or_compute(key, &mut || {
            self.parser.parse_text(file, &text, diagnostics)
        })
    }

    pub fn is_eligible(&self, file: &File) -> Result<bool> {
        self.parser.is_eligible(file)
    }

    pub fn parser(&self) -> &ModuleParser {
        &self.parser
    }

    pub fn base_dir(&self) -> &Path {
        self.parser.base_dir()
    }
}

impl std::fmt::Debug for CachingParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingParser")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

/// Builds [`CachingParser`]s that share a cache and a tag finder.
pub struct ParserFactory {
    transforms: Vec<String>,
    registry: TransformRegistry,
    cache: Arc<dyn AstCache>,
    finder: Arc<dyn TagFinder>,
}

impl ParserFactory {
    /// A factory applying the named transforms, resolved against the built-ins.
    pub fn new<I, S>(transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transforms: transforms.into_iter().map(Into::into).collect(),
            registry: TransformRegistry::new(),
            cache: Arc::new(MemoryCache::new()),
            finder: Arc::new(MemoizedFinder::default()),
        }
    }

    pub fn with_registry(mut self, registry: TransformRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn AstCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_finder(mut self, finder: Arc<dyn TagFinder>) -> Self {
        self.finder = finder;
        self
    }

    pub fn transforms(&self) -> &[String] {
        &self.transforms
    }

    /// Builds a parser for `base_dir`. Transform factories run here.
    pub fn for_base_dir(&self, base_dir: impl Into<PathBuf>) -> Result<CachingParser> {
        let parser = ModuleParser::builder(base_dir)
            .registry(self.registry.clone())
            .transforms(self.transforms.iter().cloned())
            .finder(Arc::clone(&self.finder))
            .build()?;
        Ok(CachingParser::new(parser, Arc::clone(&self.cache)))
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
