//! TreeBuilder - walks the filesystem and builds a sized tree in memory

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::TreeError;

use super::node::SizeNode;
use super::utils::{absolute_path, root_name};

/// Builds a [`SizeNode`] tree for a path.
///
/// Failures on the root are fatal. Below the root, any entry that cannot be
/// stat'ed or listed is dropped and its bytes never reach the parent total.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    skipped: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries dropped during the last [`build`](Self::build).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(&mut self, path: &Path) -> Result<SizeNode, TreeError> {
        self.skipped = 0;

        let abs = absolute_path(path).map_err(|e| TreeError::from_io(path, e))?;
        // Report the root as the caller spelled it
        let meta = fs::metadata(&abs).map_err(|e| TreeError::from_io(path, e))?;
        let name = root_name(&abs);

        if !meta.is_dir() {
            return Ok(SizeNode::file(name, abs, meta.len()));
        }

        // Canonical paths of the directories being walked, root first. Used
        // only to spot symlinks pointing back up the tree.
        let mut ancestors = vec![fs::canonicalize(&abs).unwrap_or_else(|_| abs.clone())];
        let children = self.read_children(&abs, &mut ancestors)?;
        Ok(SizeNode::dir(name, abs, children))
    }

    /// List and build every child of `dir`. Errors listing `dir` itself are
    /// returned; errors on individual children are absorbed.
    ///
    /// `ancestors` ends with the canonical path of `dir`.
    fn read_children(
        &mut self,
        dir: &Path,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Vec<SizeNode>, TreeError> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .map_err(|e| TreeError::from_io(dir, e))?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("skipping unreadable entry in {}: {}", dir.display(), e);
                    self.skipped += 1;
                    None
                }
            })
            .collect();
        entries.sort_by_key(|e| e.file_name());

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            let is_symlink = entry.file_type().is_ok_and(|t| t.is_symlink());
            match self.build_child(entry.path(), name, ancestors, is_symlink) {
                Ok(node) => children.push(node),
                Err(e) => {
                    debug!("skipping {}: {}", entry.path().display(), e);
                    self.skipped += 1;
                }
            }
        }
        Ok(children)
    }

    fn build_child(
        &mut self,
        path: PathBuf,
        name: String,
        ancestors: &mut Vec<PathBuf>,
        is_symlink: bool,
    ) -> Result<SizeNode, TreeError> {
        let meta = fs::metadata(&path).map_err(|e| TreeError::from_io(&path, e))?;

        if !meta.is_dir() {
            return Ok(SizeNode::file(name, path, meta.len()));
        }

        let canonical = if is_symlink {
            let target = fs::canonicalize(&path).map_err(|e| TreeError::from_io(&path, e))?;
            // A target at or above any directory on the current chain would
            // walk that directory again.
            if ancestors.iter().any(|a| a.starts_with(&target)) {
                return Err(TreeError::Io {
                    path,
                    source: std::io::Error::other("symlink cycle"),
                });
            }
            target
        } else {
            match ancestors.last() {
                Some(parent) => parent.join(&name),
                None => fs::canonicalize(&path).map_err(|e| TreeError::from_io(&path, e))?,
            }
        };

        ancestors.push(canonical);
        let children = self.read_children(&path, ancestors);
        ancestors.pop();
        Ok(SizeNode::dir(name, path, children?))
    }
}

/// Build a tree for `path` with a fresh [`TreeBuilder`].
pub fn build_tree(path: &Path) -> Result<SizeNode, TreeError> {
    TreeBuilder::new().build(path)
}
