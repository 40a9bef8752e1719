//! Reading vines from JSON Lines datasets
//!
//! Each non-blank line holds one vine document. Files ending in `.gz` are
//! decompressed on the fly. [`VineReader`] yields every error; [`Dataset`]
//! logs bad lines and unreadable files and skips them.

use crate::error::DatasetError;
use crate::vine::Vine;
use flate2::read::MultiGzDecoder;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines};
use std::path::{Path, PathBuf};

/// Iterator over the vines of one JSON Lines stream
pub struct VineReader<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
}

impl<R: BufRead> VineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl VineReader<Box<dyn BufRead>> {
    /// Open a file, decompressing it if the name ends in `.gz`
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self::new(reader))
    }
}

impl VineReader<BufReader<Cursor<String>>> {
    pub fn from_string(text: &str) -> Self {
        Self::new(BufReader::new(Cursor::new(text.to_string())))
    }
}

impl<R: BufRead> Iterator for VineReader<R> {
    type Item = Result<Vine, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.lines.next()?;
            self.line_num += 1;
            let line = match next {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(parse_line(&line, self.line_num));
        }
    }
}

fn parse_line(line: &str, line_num: usize) -> Result<Vine, DatasetError> {
    let document: Value = serde_json::from_str(line).map_err(|source| DatasetError::Json {
        line: line_num,
        source,
    })?;

    Vine::from_json(&document).map_err(|source| DatasetError::Vine {
        line: line_num,
        source,
    })
}

/// Where a dataset's lines come from
#[derive(Debug, Clone)]
enum VineSource {
    /// In-memory JSON Lines text
    String(String),
    /// Single file path
    File(PathBuf),
    /// Multiple file paths (from glob or explicit paths)
    Files(Vec<PathBuf>),
}

/// Collection of vines from a string, file, or glob pattern
///
/// Errors (file open, bad JSON, invalid vines) are logged and skipped.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: VineSource,
}

impl Dataset {
    pub fn from_string(text: &str) -> Self {
        Self {
            source: VineSource::String(text.to_string()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            source: VineSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Files are read in the given order
    pub fn from_paths(file_paths: Vec<PathBuf>) -> Self {
        Self {
            source: VineSource::Files(file_paths),
        }
    }

    /// Create from a glob pattern
    ///
    /// Files are processed in sorted order for deterministic results.
    pub fn from_glob(pattern: &str) -> Result<Self, DatasetError> {
        let mut file_paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
        file_paths.sort();
        Ok(Self::from_paths(file_paths))
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = Vine>> {
        self.clone().into_iter()
    }
}

impl IntoIterator for Dataset {
    type Item = Vine;
    type IntoIter = Box<dyn Iterator<Item = Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        match self.source {
            VineSource::String(text) => {
                Box::new(VineReader::from_string(&text).filter_map(skip_invalid))
            }
            VineSource::File(path) => open_file_vines(path),
            VineSource::Files(paths) => Box::new(paths.into_iter().flat_map(open_file_vines)),
        }
    }
}

fn skip_invalid(result: Result<Vine, DatasetError>) -> Option<Vine> {
    match result {
        Ok(vine) => Some(vine),
        Err(e) => {
            log::warn!("Skipping line: {}", e);
            None
        }
    }
}

/// Open a file and iterate its vines; an unreadable file yields nothing
fn open_file_vines(path: PathBuf) -> Box<dyn Iterator<Item = Vine>> {
    match VineReader::from_file(&path) {
        Ok(reader) => {
            log::debug!("Reading vines from {}", path.display());
            Box::new(reader.filter_map(skip_invalid))
        }
        Err(e) => {
            log::warn!("Skipping {}: {}", path.display(), e);
            Box::new(std::iter::empty())
        }
    }
}
