//! In-memory tree node with aggregated size

use std::path::{Path, PathBuf};

/// A filesystem entry and, for directories, everything beneath it.
///
/// A directory's `size` is the sum of its children's sizes once the
/// builder has finished with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeNode {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub is_dir: bool,
    pub children: Vec<SizeNode>,
}

impl SizeNode {
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Build a directory node and total up its children.
    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>, children: Vec<SizeNode>) -> Self {
        let size: u64 = children.iter().map(|c| c.size).sum();
        Self {
            name: name.into(),
            path: path.into(),
            size,
            is_dir: true,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Name as shown to users: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Number of (directories, files) below this node, not counting itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.counts();
            if child.is_dir {
                (dirs + d + 1, files + f)
            } else {
                (dirs + d, files + f + 1)
            }
        })
    }

    /// Check that every directory's size equals the sum of its children.
    pub fn sizes_consistent(&self) -> bool {
        if !self.is_dir {
            return true;
        }
        let sum: u64 = self.children.iter().map(|c| c.size).sum();
        sum == self.size && self.children.iter().all(SizeNode::sizes_consistent)
    }
}
