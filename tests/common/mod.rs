#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` at `relative` under `root`, creating parents
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A python3/python on PATH, if any
pub fn find_python() -> Option<PathBuf> {
    which::which("python3").or_else(|_| which::which("python")).ok()
}
