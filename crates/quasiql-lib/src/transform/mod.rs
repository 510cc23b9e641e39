//! Text transforms applied to a file before tags are located.
//!
//! A transform is a pure `(filename, text) -> text` function produced by a
//! named factory once per base directory. A [`TransformChain`] composes
//! transforms left to right: each one receives the previous one's output.

mod builtin;
mod registry;

#[cfg(test)]
mod chain_tests;
#[cfg(test)]
mod registry_tests;

use std::path::Path;
use std::sync::Arc;

pub use builtin::{CRLF_TO_LF, STRIP_BOM, VUE_SCRIPT};
pub use registry::TransformRegistry;

use crate::Result;

/// A stateless `(filename, text) -> text` function.
pub type Transform = Arc<dyn Fn(&Path, &str) -> String + Send + Sync>;

/// Instantiates a transform for a base directory.
pub type TransformFactory = Arc<dyn Fn(&Path) -> Transform + Send + Sync>;

/// Ordered composition of transforms for one base directory.
#[derive(Clone, Default)]
pub struct TransformChain {
    names: Vec<String>,
    transforms: Vec<Transform>,
}

impl TransformChain {
    /// The chain that returns its input unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Resolves `names` in `registry` and instantiates each factory for `base_dir`.
    ///
    /// Fails on the first name the registry does not know, before any
    /// factory runs.
    pub fn build<I, S>(registry: &TransformRegistry, base_dir: &Path, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let factories = names
            .iter()
            .map(|name| registry.resolve(name).map(Arc::clone))
            .collect::<Result<Vec<_>>>()?;
        let transforms = factories.iter().map(|factory| factory(base_dir)).collect();

        Ok(Self { names, transforms })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Runs every transform in order.
    pub fn apply(&self, filename: &Path, text: &str) -> String {
        self.transforms
            .iter()
            .fold(text.to_string(), |text, transform| transform(filename, &text))
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
