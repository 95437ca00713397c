//! Directory tree building and ordering
//!
//! - `TreeBuilder`: walks a path and builds a `SizeNode` tree with
//!   directory sizes aggregated bottom-up
//! - `sort_tree`: orders every level of a built tree by a `SortPolicy`

mod builder;
mod node;
mod sort;
mod utils;

// Re-export public types
pub use builder::{TreeBuilder, build_tree};
pub use node::SizeNode;
pub use sort::{SortKey, SortPolicy, sort_tree};
pub use utils::{absolute_path, format_size, normalize_lexically, root_name};
