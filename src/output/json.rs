//! JSON output formatting
//!
//! The same record is printed by `--json` and embedded in the HTML report,
//! where the page script reads `sizeStr`, `isDir` and `children`.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::{SizeNode, format_size};

/// Serializable mirror of a [`SizeNode`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonNode {
    pub name: String,
    pub size: u64,
    pub size_str: String,
    pub is_dir: bool,
    pub path: PathBuf,
    pub children: Vec<JsonNode>,
}

impl From<&SizeNode> for JsonNode {
    fn from(node: &SizeNode) -> Self {
        Self {
            name: node.name.clone(),
            size: node.size,
            size_str: format_size(node.size),
            is_dir: node.is_dir,
            path: node.path.clone(),
            children: node.children.iter().map(JsonNode::from).collect(),
        }
    }
}

/// Pretty-printed JSON for a tree.
pub fn to_json(node: &SizeNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonNode::from(node))
}

pub fn write_json<W: Write>(node: &SizeNode, out: &mut W) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    writeln!(out, "{}", json)?;
    out.flush()
}

/// Print tree node as pretty-printed JSON to stdout.
///
/// A closed stdout surfaces as an error instead of a panic.
pub fn print_json(node: &SizeNode) -> io::Result<()> {
    write_json(node, &mut io::stdout().lock())
}
