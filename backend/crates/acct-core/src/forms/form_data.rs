//! Submitted form fields and uploaded files, independent of the wire encoding.

use std::collections::HashMap;

/// A file part from a multipart submission.
///
/// `size` counts every byte received for the part. When a reader stops
/// buffering an oversized part, `bytes` is left empty while `size` still
/// reports how much was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub size: usize,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            size: bytes.len(),
            bytes,
        }
    }

    /// A part whose content was discarded after `size` bytes
    pub fn oversized(file_name: impl Into<String>, size: usize) -> Self {
        Self {
            file_name: file_name.into(),
            size,
            bytes: Vec::new(),
        }
    }
}

/// Text fields and files of a single submission.
///
/// Repeated field names keep the last value.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (name, value) in pairs {
            data.insert(name, value);
        }
        data
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Store an uploaded file. Empty parts (no file chosen) are ignored.
    pub fn insert_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        if file.file_name.is_empty() && file.size == 0 {
            return;
        }
        self.files.insert(name.into(), file);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed text value, empty when the field is absent
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(str::trim).unwrap_or_default().to_string()
    }

    /// Untrimmed value, for passwords
    pub fn raw(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}
