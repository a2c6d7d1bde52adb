//! Non-ASCII detection over a source tree.
//!
//! Files are read as raw bytes and interpreted as latin-1, which maps every
//! byte to a character and therefore never fails to decode. A byte offends
//! when its value is above 0x7F; newline, carriage return, and tab sit below
//! that and are never flagged.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Offending characters found in one file, first-seen order. Printed as soon
/// as the file is scanned, not retained across the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFinding {
    pub path: PathBuf,
    pub chars: Vec<char>,
}

impl ScanFinding {
    pub fn rendered_chars(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Distinct characters above the ASCII range, in order of first appearance.
pub fn offending_chars(bytes: &[u8]) -> Vec<char> {
    let mut found = Vec::new();
    for &b in bytes {
        if b > 0x7F {
            let c = char::from(b);
            if !found.contains(&c) {
                found.push(c);
            }
        }
    }
    found
}

pub fn scan_file(path: &Path) -> Result<Option<ScanFinding>> {
    let bytes = fs::read(path)?;
    let chars = offending_chars(&bytes);
    if chars.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ScanFinding { path: path.to_path_buf(), chars }))
    }
}

/// Walk `root` and scan every regular file whose extension equals `ext`.
/// Findings and per-file read errors are handed to the callbacks as they
/// occur; an unreadable file does not stop the walk.
pub fn scan_tree<F, E>(root: &Path, ext: &str, mut on_finding: F, mut on_error: E)
where
    F: FnMut(ScanFinding),
    E: FnMut(&Path, anyhow::Error),
{
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                on_error(&path, e.into());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|e| e.to_str()) {
            Some(e) if e == ext => {}
            _ => continue,
        }
        match scan_file(entry.path()) {
            Ok(Some(finding)) => on_finding(finding),
            Ok(None) => {}
            Err(e) => on_error(entry.path(), e),
        }
    }
}
