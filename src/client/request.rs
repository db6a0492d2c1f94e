use std::path::{Path, PathBuf};

use bytes::Bytes;

/// A single form entry value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// A text or choice value.
    Text(String),
    /// A file to upload; an empty path is sent as an empty file part.
    File(PathBuf),
}

/// Ordered form entries, mirroring what a browser's `FormData` would hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormPayload {
    entries: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text entry.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((name.into(), FormValue::Text(value.into())));
    }

    /// Appends a file entry.
    pub fn push_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries
            .push((name.into(), FormValue::File(path.into())));
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    /// Returns the first text value named `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(n, v)| match v {
            FormValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the first file path named `name`.
    pub fn file(&self, name: &str) -> Option<&Path> {
        self.entries.iter().find_map(|(n, v)| match v {
            FormValue::File(path) if n == name => Some(path.as_path()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A finder chart generation request for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    /// Mode name sent as the `mode` query parameter.
    pub mode: String,
    /// The live form's entries.
    pub payload: FormPayload,
}

/// The parts of the server's response the wizard interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartResponse {
    pub status: u16,
    pub body: Bytes,
}

impl ChartResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
