//! Line-oriented text file operations: search, replace, statistics.

use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Content seeded into the working file when it does not exist yet.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.\n\
This is a test file for processing.\n\
Rust programming is safe and efficient.\n";

/// Aggregate counts plus a content digest for a whole file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
    pub sha256: String,
}

/// Create `path` with the sample content unless it already exists.
pub fn ensure_sample(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::write(path, SAMPLE_TEXT)
}

/// Find every line containing `word`. Returns the matching lines with
/// their 1-based line numbers, plus the total number of non-overlapping
/// occurrences across the whole content.
pub fn search_lines<'a>(content: &'a str, word: &str) -> (Vec<(usize, &'a str)>, u64) {
    let mut matches = Vec::new();
    let mut total = 0u64;

    for (idx, line) in content.lines().enumerate() {
        let count = line.matches(word).count() as u64;
        if count > 0 {
            matches.push((idx + 1, line));
            total += count;
        }
    }
    (matches, total)
}

/// Replace every non-overlapping occurrence of `old` with `new`,
/// returning the rewritten content and the replacement count. An empty
/// needle matches nowhere.
pub fn replace_text(content: &str, old: &str, new: &str) -> (String, u64) {
    if old.is_empty() {
        return (content.to_string(), 0);
    }
    let count = content.matches(old).count() as u64;
    (content.replace(old, new), count)
}

/// Rewrite `path` atomically through a temporary file in the same
/// directory.
pub fn rewrite(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Whole-file statistics. Words are maximal runs of non-whitespace
/// bytes; a final line without a newline still counts as a line.
pub fn file_stats(data: &[u8]) -> FileStats {
    let chars = data.len();
    let words = data
        .split(|b: &u8| b.is_ascii_whitespace())
        .filter(|w| !w.is_empty())
        .count();
    let mut lines = data.iter().filter(|&&b| b == b'\n').count();
    if let Some(&last) = data.last() {
        if last != b'\n' {
            lines += 1;
        }
    }
    FileStats {
        chars,
        words,
        lines,
        sha256: hex::encode(Sha256::digest(data)),
    }
}
