//! Static content tree for folio.
//!
//! The simulated filesystem is a read-only tree of [`Node`]s built once at
//! startup. Navigation state refers into it with a [`NodePath`], and
//! [`ContentTree::resolve`] walks a path down to the node it names.

mod portfolio;
mod tree;

/// Build the portfolio tree shipped with the terminal.
pub use portfolio::portfolio_tree;
pub use tree::{ContentTree, Node, NodePath};
