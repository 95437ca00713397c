//! Sort policies applied at every level of a tree

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

use super::node::SizeNode;

/// What to order siblings by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Directories first, then case-insensitive name
    #[default]
    Name,
    /// Largest first, no directory priority
    Size,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            _ => Err(TreeError::InvalidSortKey(s.to_string())),
        }
    }
}

/// A sort key plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortPolicy {
    pub key: SortKey,
    /// Negates the whole comparison, directory priority included.
    pub reverse: bool,
}

impl SortPolicy {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Compare two siblings under this policy.
    pub fn compare(&self, a: &SizeNode, b: &SizeNode) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => b
                .is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortKey::Size => b.size.cmp(&a.size),
        };
        if self.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Sort every directory's children in place, deepest levels first.
///
/// The sort is stable, so entries that compare equal keep their
/// existing relative order.
pub fn sort_tree(node: &mut SizeNode, policy: SortPolicy) {
    if node.children.is_empty() {
        return;
    }

    for child in node.children.iter_mut().filter(|c| c.is_dir) {
        sort_tree(child, policy);
    }

    node.children.sort_by(|a, b| policy.compare(a, b));
}
