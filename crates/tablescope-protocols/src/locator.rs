//! Element locators.

use std::fmt;

use crate::adapter::DocumentAdapter;

/// How an element is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator<N> {
    /// An explicit node handle.
    Node(N),
    /// The n-th element of the requested tag under the scope, 0-based.
    Index(usize),
    /// Exact match on the `id` attribute.
    Id(String),
    /// Exact match on the `name` attribute.
    Name(String),
}

impl<N> Locator<N> {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl<N> From<usize> for Locator<N> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<N: fmt::Debug> fmt::Display for Locator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Node(node) => write!(f, "node {:?}", node),
            Locator::Index(index) => write!(f, "index {}", index),
            Locator::Id(id) => write!(f, "id={}", id),
            Locator::Name(name) => write!(f, "name={}", name),
        }
    }
}

/// Resolves locators against a document.
pub trait ElementLocator: DocumentAdapter {
    /// Find the element identified by `locator` whose tag is one of `tags`.
    ///
    /// With a scope, only elements strictly below it are considered;
    /// without one, the whole document is searched.
    fn locate(
        &self,
        scope: Option<&Self::Node>,
        tags: &[&str],
        locator: &Locator<Self::Node>,
    ) -> Option<Self::Node>;
}
