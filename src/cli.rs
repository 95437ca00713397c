//! Command line arguments

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::tree::SortKey;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(about = "Show a directory tree with cumulative sizes, as text or an HTML page")]
#[command(version)]
#[command(after_help = "Examples:\n  \
    sizetree                       Show current directory\n  \
    sizetree /path/to/dir          Show specified directory\n  \
    sizetree --sort size .         Sort by size\n  \
    sizetree --sort name -r .      Reverse sort by name\n  \
    sizetree --html out.html .     Write an interactive HTML page")]
pub struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Sort method: name (folders first) or size (largest first)
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        value_name = "METHOD",
        default_value_t = SortKey::Name
    )]
    pub sort: SortKey,

    /// Reverse sort order
    #[arg(short, long)]
    pub reverse: bool,

    /// Write an HTML page to FILE instead of printing the tree
    #[arg(long, value_name = "FILE", conflicts_with = "json")]
    pub html: Option<PathBuf>,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,
}

/// Long flags that older invocations spell with a single dash.
const LEGACY_FLAGS: &[&str] = &["sort", "reverse", "html"];

/// Rewrite `-sort`, `-reverse` and `-html` (also `-sort=size`) to their
/// double-dash form. Everything after `--` is left alone.
pub fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}
