//! Locating GraphQL tags in (transformed) file text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use rowan::TextRange;

use crate::file::{File, content_hash};
use crate::host::{TaggedLiteral, tagged_literals};
use crate::{Error, Result, StructuralError, TAG_NAME};

/// A tag occurrence selected by a [`TagFinder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundTag {
    /// Dotted tag text, e.g. `graphql` or `graphql.experimental`.
    pub tag: String,
    /// Raw literal text between the backticks.
    pub template: String,
    /// Range of the whole tagged template in the file.
    pub range: TextRange,
    /// Range of `template` in the file.
    pub template_range: TextRange,
}

/// Finds candidate GraphQL tags in file text, in source order.
pub trait TagFinder: Send + Sync {
    fn find(&self, text: &str, base_dir: &Path, file: &File) -> Result<Arc<[FoundTag]>>;
}

/// Whether a tag is rooted at the `graphql` identifier.
pub fn is_graphql_rooted(tag: &str) -> bool {
    tag.strip_prefix(TAG_NAME)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Finds tags by parsing the text with the host grammar for the file's extension.
///
/// Every tagged template whose tag is rooted at `graphql` is selected;
/// deciding whether the full tag is allowed is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterTagFinder;

impl TagFinder for TreeSitterTagFinder {
    fn find(&self, text: &str, _base_dir: &Path, file: &File) -> Result<Arc<[FoundTag]>> {
        let lang = quasiql_langs::for_path(&file.rel_path);
        let tree = lang.parse(text);

        let mut found = Vec::new();
        for literal in tagged_literals(&lang, &tree, text, &file.rel_path) {
            if !is_graphql_rooted(literal.tag()) {
                continue;
            }
            let segments = literal.quasi_segments();
            let [template] = segments.as_slice() else {
                return Err(Error::Structural {
                    error: StructuralError::Substitutions {
                        range: Some(literal.content_range()),
                    },
                    path: file.rel_path.clone(),
                });
            };
            found.push(FoundTag {
                tag: literal.tag().to_string(),
                template: template.to_string(),
                range: literal.range(),
                template_range: literal.content_range(),
            });
        }

        Ok(found.into())
    }
}

type MemoKey = (u32, PathBuf, PathBuf);

/// Memoizes another finder on `(content hash, base dir, relative path)`.
///
/// Errors are not memoized.
pub struct MemoizedFinder<F = TreeSitterTagFinder> {
    inner: F,
    memo: Mutex<HashMap<MemoKey, Arc<[FoundTag]>>>,
}

impl<F: TagFinder> MemoizedFinder<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoizedFinder {
    fn default() -> Self {
        Self::new(TreeSitterTagFinder)
    }
}

impl<F: TagFinder> TagFinder for MemoizedFinder<F> {
    fn find(&self, text: &str, base_dir: &Path, file: &File) -> Result<Arc<[FoundTag]>> {
        let key = (
            content_hash(text),
            base_dir.to_path_buf(),
            file.rel_path.clone(),
        );

        if let Some(found) = self
            .memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(found));
        }

        let found = self.inner.find(text, base_dir, file)?;
        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&found));
        Ok(found)
    }
}

impl<T: TagFinder + ?Sized> TagFinder for Arc<T> {
    fn find(&self, text: &str, base_dir: &Path, file: &File) -> Result<Arc<[FoundTag]>> {
        (**self).find(text, base_dir, file)
    }
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod finder_tests;
