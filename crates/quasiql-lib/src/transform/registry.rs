use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use super::builtin;
use super::{Transform, TransformFactory};
use crate::{Error, Result};

/// Named transform factories, in registration order.
#[derive(Clone)]
pub struct TransformRegistry {
    factories: IndexMap<String, TransformFactory>,
}

impl TransformRegistry {
    /// A registry with no transforms.
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// A registry with the built-in transforms.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtin::register_all(&mut registry);
        registry
    }

    /// Registers a factory, replacing any factory of the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Path) -> Transform + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn resolve(&self, name: &str) -> Result<&TransformFactory> {
        self.factories
            .get(name)
            .ok_or_else(|| Error::TransformResolution {
                name: name.to_string(),
                suggestion: self.suggest(name),
            })
    }

    /// Closest registered name to a typo.
    pub fn suggest(&self, input: &str) -> Option<String> {
        let input_lower = input.to_lowercase();
        self.names()
            .filter(|name| levenshtein(name, &input_lower) <= 2)
            .min_by_key(|name| levenshtein(name, &input_lower))
            .map(str::to_string)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
