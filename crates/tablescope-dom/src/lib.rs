//! HTML document backend for Tablescope.
//!
//! Parses HTML with `scraper` (html5ever) into an arena tree and exposes it
//! through the [`DocumentAdapter`](tablescope_protocols::DocumentAdapter)
//! and [`ElementLocator`](tablescope_protocols::ElementLocator) protocols.
//!
//! The tree sits behind a lock so it stays mutable while table views hold
//! `&HtmlDocument`; each adapter call takes the lock for that call only.

mod document;
mod error;
mod locate;

pub use document::HtmlDocument;
pub use ego_tree::NodeId;
pub use error::DomError;

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
