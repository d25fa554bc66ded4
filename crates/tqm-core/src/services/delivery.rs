//! Report delivery
//!
//! A sink receives a finished [`ReportDocument`] and puts its bytes somewhere:
//! a directory on disk, a writer such as stdout, or memory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use super::report_export::ReportDocument;
use crate::error::{Error, Result};

/// Where a delivered report ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delivery {
    /// Written to a file
    Saved { path: PathBuf },
    /// Streamed to a writer or kept in memory
    Streamed { bytes: usize },
}

/// Deliver bytes under a filename
pub trait ReportSink {
    fn deliver(&mut self, document: &ReportDocument) -> Result<Delivery>;
}

/// Saves reports into a directory.
///
/// Bytes go to a temporary file next to the target and are persisted with a
/// rename, so a failed write never leaves a partial report behind.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_atomic(&self, document: &ReportDocument) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(&document.filename);

        // Dropped (and removed) on any early return
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(document.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;

        Ok(target)
    }
}

impl ReportSink for DirectorySink {
    fn deliver(&mut self, document: &ReportDocument) -> Result<Delivery> {
        let path = self
            .write_atomic(document)
            .map_err(|e| Error::delivery(&document.filename, e))?;
        log::debug!("[delivery] Saved report to {:?}", path);
        Ok(Delivery::Saved { path })
    }
}

/// Streams reports to any writer
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn deliver(&mut self, document: &ReportDocument) -> Result<Delivery> {
        let bytes = document.as_bytes();
        self.writer
            .write_all(bytes)
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::delivery(&document.filename, e))?;
        Ok(Delivery::Streamed { bytes: bytes.len() })
    }
}

/// Keeps delivered reports in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<ReportDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> &[ReportDocument] {
        &self.delivered
    }

    pub fn last(&self) -> Option<&ReportDocument> {
        self.delivered.last()
    }
}

impl ReportSink for MemorySink {
    fn deliver(&mut self, document: &ReportDocument) -> Result<Delivery> {
        self.delivered.push(document.clone());
        Ok(Delivery::Streamed {
            bytes: document.as_bytes().len(),
        })
    }
}
