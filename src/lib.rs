//! sizetree - a directory tree with cumulative sizes, printed to the console
//! or written as an interactive HTML page

pub mod cli;
pub mod error;
pub mod output;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod tree;

pub use error::TreeError;
pub use output::{
    HtmlReport, OutputConfig, TreeFormatter, print_json, to_json, write_html, write_json,
};
pub use tree::{SizeNode, SortKey, SortPolicy, TreeBuilder, build_tree, format_size, sort_tree};
