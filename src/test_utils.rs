//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated with files of known sizes.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'.'; size]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a balanced tree: `breadth` subdirectories per level,
    /// `depth` levels, `files_per_dir` files in each directory.
    pub fn populate(&self, depth: usize, breadth: usize, files_per_dir: usize) {
        fn fill(dir: &Path, depth: usize, breadth: usize, files: usize) {
            for i in 0..files {
                fs::write(dir.join(format!("file_{i}.dat")), vec![b'.'; (i + 1) * 64])
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..breadth {
                let sub = dir.join(format!("dir_{i}"));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, breadth, files);
            }
        }
        fill(self.dir.path(), depth, breadth, files_per_dir);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
