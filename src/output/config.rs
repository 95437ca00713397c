//! Output configuration types

/// Configuration for console output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}
