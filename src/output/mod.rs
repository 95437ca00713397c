//! Tree formatting and display
//!
//! This module provides formatters for outputting size trees in various formats:
//! - Console output, plain or colored
//! - JSON output
//! - A static HTML page with client-side sorting
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connector and prefix helpers
//! - `tree` - Console tree formatter and lazy line iterator
//! - `json` - JSON record shared by `--json` and the HTML page
//! - `html` - HTML report writer

mod config;
mod html;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use html::{HtmlReport, escape_html, write_html};
pub use json::{JsonNode, print_json, to_json, write_json};
pub use tree::{TreeFormatter, TreeLine, TreeLines};
pub use utils::{BRANCH, LAST_BRANCH, connector, continuation_prefix};

#[cfg(test)]
mod tests {
    use crate::tree::{SizeNode, SortKey, SortPolicy, sort_tree};

    use super::*;

    fn build_mixed_tree() -> SizeNode {
        SizeNode::dir(
            "proj",
            "/proj",
            vec![
                SizeNode::file("b.txt", "/proj/b.txt", 300),
                SizeNode::dir(
                    "A",
                    "/proj/A",
                    vec![SizeNode::file("inner.bin", "/proj/A/inner.bin", 100)],
                ),
                SizeNode::file("a.txt", "/proj/a.txt", 200),
            ],
        )
    }

    #[test]
    fn test_console_and_json_agree_on_order() {
        for key in [SortKey::Name, SortKey::Size] {
            for reverse in [false, true] {
                let mut tree = build_mixed_tree();
                sort_tree(&mut tree, SortPolicy::new(key, reverse));

                let console: Vec<String> = TreeFormatter::new(OutputConfig::plain())
                    .lines(&tree)
                    .skip(1)
                    .filter(|l| l.prefix == "    ")
                    .map(|l| l.name.to_string())
                    .collect();

                let json: serde_json::Value =
                    serde_json::from_str(&to_json(&tree).unwrap()).unwrap();
                let from_json: Vec<String> = json["children"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|c| c["name"].as_str().unwrap().to_string())
                    .collect();

                assert_eq!(console, from_json, "key={key} reverse={reverse}");
            }
        }
    }

    #[test]
    fn test_all_formats_contain_same_entries() {
        let tree = build_mixed_tree();
        let console = TreeFormatter::new(OutputConfig::plain()).format(&tree);
        let json = to_json(&tree).unwrap();
        let page = HtmlReport::new(&tree, "proj", SortPolicy::default())
            .render()
            .unwrap();

        for name in ["b.txt", "A", "inner.bin", "a.txt"] {
            assert!(console.contains(name), "console should contain {name}");
            assert!(json.contains(name), "json should contain {name}");
            assert!(page.contains(name), "html should contain {name}");
        }
    }
}
