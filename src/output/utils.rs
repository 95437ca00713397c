//! Shared prefix and connector helpers for tree rendering

/// Connector drawn before a non-last sibling.
pub const BRANCH: &str = "├── ";
/// Connector drawn before the last sibling.
pub const LAST_BRANCH: &str = "└── ";

/// Connector for a node; the root has none.
pub fn connector(is_last: bool, is_root: bool) -> &'static str {
    if is_root {
        ""
    } else if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

/// Calculate the prefix inherited by the children of a node.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
