use std::io;
use std::path::Path;

/// Source of file text for the aggregator.
pub trait FileReader: Sync {
    /// Read `path` as UTF-8. Any error means the file is skipped.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads selected paths from disk, relative to the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
