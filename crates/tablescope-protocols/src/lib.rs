//! # Tablescope Protocols
//!
//! Interface definitions shared by the table views and the document
//! backends that feed them. Contains only traits and plain value types.
//!
//! ## Core Traits
//!
//! - [`DocumentAdapter`] - Read access to a live element tree
//! - [`ElementLocator`] - Resolution of a [`Locator`] to a node handle

pub mod adapter;
pub mod locator;

pub use adapter::{DocumentAdapter, tags};
pub use locator::{ElementLocator, Locator};
