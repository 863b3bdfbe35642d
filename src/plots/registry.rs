//! Fixed tag → adaptor table, the single extension point for adding chart
//! types to multi-view composition.

use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::error;

use crate::plots::{AdaptorFn, area, bar, column, gauge, line, pie, progress, ring_progress, tiny};

/// Immutable mapping from plot-type tag to adaptor, built once.
///
/// Nested `multi-view` composition is deliberately unregistered: a container
/// resolving itself would recurse without bound.
#[derive(Debug)]
pub struct Registry {
    adaptors: IndexMap<&'static str, AdaptorFn>,
}

impl Registry {
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut adaptors: IndexMap<&'static str, AdaptorFn> = IndexMap::new();
        adaptors.insert("line", line::adaptor as AdaptorFn);
        adaptors.insert("pie", pie::adaptor);
        adaptors.insert("column", column::adaptor);
        adaptors.insert("bar", bar::adaptor);
        adaptors.insert("area", area::adaptor);
        adaptors.insert("gauge", gauge::adaptor);
        adaptors.insert("tiny-line", tiny::line_adaptor);
        adaptors.insert("tiny-column", tiny::column_adaptor);
        adaptors.insert("tiny-area", tiny::area_adaptor);
        adaptors.insert("ring-progress", ring_progress::adaptor);
        adaptors.insert("progress", progress::adaptor);
        Self { adaptors }
    }

    /// Looks up the adaptor for `tag`. Misses are expected and recoverable:
    /// they log a diagnostic and return `None`, never panic.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<AdaptorFn> {
        match self.adaptors.get(tag) {
            Some(adaptor) => Some(*adaptor),
            None => {
                error!(tag, "could not find plot adaptor");
                None
            }
        }
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adaptors.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adaptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adaptors.is_empty()
    }
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::with_builtin);

/// Resolves `tag` against the process-wide builtin table.
#[must_use]
pub fn resolve(tag: &str) -> Option<AdaptorFn> {
    BUILTIN.resolve(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_every_tag_once() {
        let registry = Registry::with_builtin();
        assert_eq!(registry.len(), 11);
        for tag in registry.tags() {
            assert!(registry.resolve(tag).is_some(), "missing adaptor for {tag}");
        }
    }

    #[test]
    fn nested_multi_view_is_not_resolvable() {
        assert!(resolve("multi-view").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("xxx").is_none());
    }
}
