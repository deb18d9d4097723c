//! Line-oriented puzzle input sources

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::{Result, WithPath};

/// Anything that produces an ordered sequence of text lines
pub trait LineSource {
    /// Read every line, in order, without line terminators
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read
    fn lines(&self) -> Result<Vec<String>>;
}

/// Lines read from a text file
#[derive(Clone, Debug)]
pub struct FileLines {
    path: PathBuf,
}

impl FileLines {
    /// Read lines from `path` on demand
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLines {
    fn lines(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path).with_path(&self.path, "read")?;
        Ok(split_lines(&text))
    }
}

/// Lines held in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryLines {
    lines: Vec<String>,
}

impl MemoryLines {
    /// Split `text` into lines the same way files are split
    pub fn new(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryLines {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemoryLines {
    fn lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// Split on newlines, dropping `\r` terminators and trailing blank lines
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines
}
