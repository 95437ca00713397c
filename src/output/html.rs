//! Static HTML report
//!
//! The page is a single self-contained file: the tree is inlined as JSON and
//! a small script redoes sorting and expand/collapse in the browser.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TreeError;
use crate::tree::{SizeNode, SortPolicy};

use super::json::to_json;

const TEMPLATE: &str = include_str!("template.html");

/// Everything the page needs besides the template.
pub struct HtmlReport<'a> {
    root: &'a SizeNode,
    /// Target as the user typed it, shown in the title
    title: String,
    policy: SortPolicy,
}

impl<'a> HtmlReport<'a> {
    pub fn new(root: &'a SizeNode, title: impl Into<String>, policy: SortPolicy) -> Self {
        Self {
            root,
            title: title.into(),
            policy,
        }
    }

    /// Render the complete document.
    pub fn render(&self) -> serde_json::Result<String> {
        let data = escape_script_json(&to_json(self.root)?);
        let title = escape_html(&self.title);
        let order = if self.policy.reverse { "reverse" } else { "normal" };

        Ok(render_template(
            TEMPLATE,
            &[
                ("TITLE", title.as_str()),
                ("TREE_DATA", data.as_str()),
                ("SORT_KEY", self.policy.key.as_str()),
                ("SORT_ORDER", order),
            ],
        ))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let page = self.render().map_err(io::Error::other)?;
        out.write_all(page.as_bytes())
    }

    /// Create (or truncate) `path` and write the page into it.
    pub fn write_file(&self, path: &Path) -> Result<(), TreeError> {
        let output_err = |source| TreeError::Output {
            path: PathBuf::from(path),
            source,
        };
        let file = File::create(path).map_err(output_err)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(output_err)?;
        writer.flush().map_err(output_err)
    }
}

/// Write the HTML report for `root` to `path`.
pub fn write_html(
    root: &SizeNode,
    title: &str,
    policy: SortPolicy,
    path: &Path,
) -> Result<(), TreeError> {
    HtmlReport::new(root, title, policy).write_file(path)
}

/// Substitute `{{KEY}}` markers in one pass, so values are never rescanned.
/// Unknown markers are left as they are.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same
/// character but cannot close the surrounding `<script>`.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
