//! Content tree nodes, paths, and the resolver.
//!
//! Directory entries are kept in a `Vec` rather than a map: insertion order
//! is the `ls` display order, and names are checked for uniqueness when a
//! directory is built.

use std::fmt;

use folio_types::error::{FolioError, Result};

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory { entries: Vec<(String, Node)> },
}

impl Node {
    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Create a directory node from `(name, node)` pairs, preserving order.
    ///
    /// Fails if two entries share a name.
    pub fn directory<N, I>(entries: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Node)>,
    {
        let mut out: Vec<(String, Node)> = Vec::new();
        for (name, node) in entries {
            let name = name.into();
            if out.iter().any(|(existing, _)| *existing == name) {
                return Err(FolioError::DuplicateEntry(name));
            }
            out.push((name, node));
        }
        Ok(Node::Directory { entries: out })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// File content, or `None` for a directory.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Directory entries in insertion order, or `None` for a file.
    pub fn entries(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Directory { entries } => Some(entries),
            Node::File { .. } => None,
        }
    }

    /// Entry names in insertion order. Empty for a file.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries()
            .unwrap_or_default()
            .iter()
            .map(|(name, _)| name.as_str())
    }

    /// Look up a direct child by exact name. `None` for files.
    pub fn entry(&self, name: &str) -> Option<&Node> {
        self.entries()?
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, node)| node)
    }
}

/// Ordered directory names from the root to a location. Empty is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Return this path extended by one segment.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Return the parent path. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for seg in &self.segments {
            write!(f, "/{seg}")?;
        }
        Ok(())
    }
}

/// The read-only content tree. The root is always a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTree {
    root: Node,
}

impl ContentTree {
    /// Wrap a root node. The root must be a directory.
    pub fn new(root: Node) -> Result<Self> {
        if !root.is_dir() {
            return Err(FolioError::NotADirectory);
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Follow `path` from the root, one directory lookup per segment.
    ///
    /// The empty path yields the root. Returns `None` at the first segment
    /// that is missing, or that would descend through a file.
    pub fn resolve(&self, path: &NodePath) -> Option<&Node> {
        let mut current = &self.root;
        for seg in path.segments() {
            current = current.entry(seg)?;
        }
        Some(current)
    }

    /// Resolve `path` and keep the result only if it is a directory.
    pub fn resolve_dir(&self, path: &NodePath) -> Option<&Node> {
        self.resolve(path).filter(|node| node.is_dir())
    }
}
