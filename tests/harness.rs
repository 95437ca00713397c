//! Test harness for sizetree integration tests

use std::path::Path;
use std::process::Command;

pub use sizetree::test_utils::TestDir;

pub fn run_sizetree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_sizetree");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sizetree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Names of the direct children of the root, in printed order.
#[allow(dead_code)]
pub fn top_level_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            line.strip_prefix("    ├── ")
                .or_else(|| line.strip_prefix("    └── "))
        })
        .map(|rest| rest.rsplit_once(" (").map_or(rest, |(name, _)| name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file_has_size() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/data.bin", 123);
        assert_eq!(std::fs::metadata(file_path).unwrap().len(), 123);
    }

    #[test]
    fn test_top_level_names() {
        let out = "root/ (3 B)\n    ├── a/ (2 B)\n    │   └── x (2 B)\n    └── b (1 B)\n";
        assert_eq!(top_level_names(out), vec!["a/", "b"]);
    }
}
