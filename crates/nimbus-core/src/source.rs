//! Document sources: where the words come from.

use crate::{Error, Result};
use std::path::Path;

/// A reader for one family of document formats.
///
/// Readers are pure "path -> text" functions; failure to read is an I/O error
/// surfaced to the caller as-is. Word-processor and PDF sources plug in here
/// as additional implementations.
pub trait WordsReader {
    /// Whether this reader handles the given path (typically by extension).
    fn supports(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<String>;
}

/// Plain-text files: `.txt`, `.text`, or no extension at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxtReader;

impl WordsReader for TxtReader {
    fn supports(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            None => true,
            Some(ext) => ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("text"),
        }
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Ordered reader registry: the first reader that supports a path wins.
pub struct ReadService {
    readers: Vec<Box<dyn WordsReader + Send + Sync>>,
}

impl Default for ReadService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadService {
    /// Registry with the built-in readers.
    pub fn new() -> Self {
        Self {
            readers: vec![Box::new(TxtReader)],
        }
    }

    pub fn with_reader(mut self, reader: Box<dyn WordsReader + Send + Sync>) -> Self {
        self.readers.push(reader);
        self
    }

    pub fn read(&self, path: &Path) -> Result<String> {
        for reader in &self.readers {
            if reader.supports(path) {
                return reader.read(path);
            }
        }
        Err(Error::UnsupportedFormat {
            path: path.display().to_string(),
        })
    }
}
