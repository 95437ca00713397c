//! Tree formatter for console output
//!
//! This module provides `TreeFormatter`, which turns a `SizeNode` tree into
//! indented lines with box-drawing connectors, either as plain text or
//! printed to stdout with colors.

use std::fmt;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{SizeNode, format_size};

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix};

/// One rendered row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    /// Markers inherited from ancestors
    pub prefix: String,
    pub connector: &'static str,
    pub name: &'a str,
    pub is_dir: bool,
    /// Human-formatted size, without parentheses
    pub size: String,
}

impl fmt::Display for TreeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slash = if self.is_dir { "/" } else { "" };
        write!(
            f,
            "{}{}{}{} ({})",
            self.prefix, self.connector, self.name, slash, self.size
        )
    }
}

struct Frame<'a> {
    node: &'a SizeNode,
    prefix: String,
    is_last: bool,
    is_root: bool,
}

/// Lazy pre-order walk over a tree, yielding one [`TreeLine`] per node.
///
/// Uses an explicit stack, so memory is proportional to depth times
/// fan-out rather than to the whole tree.
pub struct TreeLines<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> TreeLines<'a> {
    pub fn new(root: &'a SizeNode) -> Self {
        Self {
            stack: vec![Frame {
                node: root,
                prefix: String::new(),
                is_last: true,
                is_root: true,
            }],
        }
    }
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = TreeLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        let node = frame.node;

        if !node.children.is_empty() {
            let child_prefix = continuation_prefix(&frame.prefix, frame.is_last);
            let last_index = node.children.len() - 1;
            // Pushed in reverse so the first child is popped next
            for (i, child) in node.children.iter().enumerate().rev() {
                self.stack.push(Frame {
                    node: child,
                    prefix: child_prefix.clone(),
                    is_last: i == last_index,
                    is_root: false,
                });
            }
        }

        Some(TreeLine {
            connector: connector(frame.is_last, frame.is_root),
            prefix: frame.prefix,
            name: &node.name,
            is_dir: node.is_dir,
            size: format_size(node.size),
        })
    }
}

/// Formatter for console tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// A fresh line iterator; call as often as needed.
    pub fn lines<'a>(&self, root: &'a SizeNode) -> TreeLines<'a> {
        TreeLines::new(root)
    }

    /// Render the whole tree as plain text, one line per node.
    pub fn format(&self, root: &SizeNode) -> String {
        let mut output = String::new();
        for line in self.lines(root) {
            output.push_str(&line.to_string());
            output.push('\n');
        }
        output
    }

    pub fn print(&self, root: &SizeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        for line in self.lines(root) {
            self.write_line(&mut stdout, &line)?;
        }
        stdout.flush()
    }

    fn write_line<W: WriteColor>(&self, out: &mut W, line: &TreeLine<'_>) -> io::Result<()> {
        write!(out, "{}{}", line.prefix, line.connector)?;
        if line.is_dir {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}/", line.name)?;
        } else {
            write!(out, "{}", line.name)?;
        }
        out.reset()?;
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(out, "({})", line.size)?;
        out.reset()?;
        writeln!(out)
    }
}
