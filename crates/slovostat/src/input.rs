//! Input loading: one file exposed as a contiguous byte slice.
//!
//! Callers choose between a memory-mapped file and an owned buffer at
//! runtime via [`LoadMode`]. Content is never validated as UTF-8 here or
//! anywhere downstream; malformed sequences flow through the pipeline with
//! undefined (but non-crashing) segmentation.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use thiserror::Error;

/// Strategy for loading input files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (fast, zero-copy).
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

#[derive(Debug)]
enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open input file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read input file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An input file held in memory, mapped or owned.
#[derive(Debug)]
pub struct InputFile {
    path: PathBuf,
    buf: Buffer,
}

impl InputFile {
    /// Open `path` and make its content addressable as bytes.
    pub fn load(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self, InputError> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).map_err(|source| InputError::Open {
            path: path.clone(),
            source,
        })?;
        let buf = match mode {
            LoadMode::Mmap => unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .map_err(|source| InputError::Read {
                    path: path.clone(),
                    source,
                })?,
            LoadMode::Owned => {
                let mut data = Vec::new();
                file.read_to_end(&mut data)
                    .map_err(|source| InputError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Buffer::Owned(data)
            }
        };
        Ok(Self { path, buf })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }
}
