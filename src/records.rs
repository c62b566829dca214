//! Fixed-size binary student records with direct file access.
//!
//! Each record is exactly 32 bytes on disk (4 + 20 + 4 + 4), so a
//! record's position is its index times [`RECORD_SIZE`] and single
//! records can be overwritten in place.

use crate::PracticumError;
use bytemuck::{Pod, Zeroable};
use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk size of one record.
pub const RECORD_SIZE: usize = 32;

/// Capacity of the name field, including its NUL terminator.
pub const NAME_LEN: usize = 20;

/// One student record. The name is a NUL-padded byte field so the
/// struct stays a fixed 32 bytes with no heap indirection.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StudentRecord {
    pub id: i32,
    name: [u8; NAME_LEN],
    pub age: i32,
    pub gpa: f32,
}

impl StudentRecord {
    /// Build a record, truncating the name to fit the fixed field while
    /// keeping it valid UTF-8.
    pub fn new(id: i32, name: &str, age: i32, gpa: f32) -> Self {
        let mut field = [0u8; NAME_LEN];
        let mut end = name.len().min(NAME_LEN - 1);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        field[..end].copy_from_slice(&name.as_bytes()[..end]);
        StudentRecord { id, name: field, age, gpa }
    }

    /// Name up to the first NUL byte.
    pub fn name(&self) -> String {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

/// Read every record from `path`. The file length must be an exact
/// multiple of [`RECORD_SIZE`].
pub fn load_records(path: &Path) -> Result<Vec<StudentRecord>, PracticumError> {
    let data = fs::read(path)?;
    if data.len() % RECORD_SIZE != 0 {
        return Err(PracticumError::Parse(format!(
            "record file length {} is not a multiple of {}",
            data.len(),
            RECORD_SIZE
        )));
    }
    Ok(data
        .chunks_exact(RECORD_SIZE)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

/// Append one record to the end of the file, creating it if needed.
pub fn append_record(path: &Path, record: &StudentRecord) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(bytemuck::bytes_of(record))
}

/// Replace the whole file with `records`, going through a temporary
/// file in the same directory.
pub fn store_records(path: &Path, records: &[StudentRecord]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    for record in records {
        tmp.write_all(bytemuck::bytes_of(record))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Overwrite the record at `index` in place.
pub fn overwrite_record(
    path: &Path,
    index: usize,
    record: &StudentRecord,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    file.seek(SeekFrom::Start((index * RECORD_SIZE) as u64))?;
    file.write_all(bytemuck::bytes_of(record))
}

/// Mean GPA and mean age, or `None` when there are no records.
pub fn averages(records: &[StudentRecord]) -> Option<(f64, f64)> {
    if records.is_empty() {
        return None;
    }
    let count = records.len() as f64;
    let gpa_sum: f64 = records.iter().map(|r| f64::from(r.gpa)).sum();
    let age_sum: f64 = records.iter().map(|r| f64::from(r.age)).sum();
    Some((gpa_sum / count, age_sum / count))
}
