use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of handing a file to an [`OutputSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
    /// File content was printed instead of persisted
    Previewed,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// Destination for a finished generated unit.
///
/// The generator never decides where its output lands; callers pick a sink.
pub trait OutputSink {
    /// Persist (or display) a single generated file.
    fn accept(&mut self, file: &File) -> Result<WriteResult>;
}

/// Sink that writes files to disk following their [`FileRules`].
#[derive(Debug, Default)]
pub struct FileSink {
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl OutputSink for FileSink {
    fn accept(&mut self, file: &File) -> Result<WriteResult> {
        let result = file.write()?;
        if result == WriteResult::Written {
            self.written.push(file.path().to_path_buf());
        }
        Ok(result)
    }
}

/// Sink that prints file contents to a writer (dry runs).
#[derive(Debug)]
pub struct PreviewSink<W> {
    writer: W,
}

impl<W: Write> PreviewSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for PreviewSink<W> {
    fn accept(&mut self, file: &File) -> Result<WriteResult> {
        writeln!(self.writer, "── {} ──", file.path().display())?;
        write!(self.writer, "{}", file.content())?;
        Ok(WriteResult::Previewed)
    }
}
