use std::path::{Path, PathBuf};

use crate::consts::{CONTAINER_EXTENSION, FRAME_DATASET};
use crate::error::{Result, StackprepError};
use crate::frame::Frame;
use crate::io::container;

/// An ordered, indexable collection of frames.
///
/// Scanning and collection only see this surface, so they can run against
/// any backing store (a directory of container files in production, an
/// in-memory fake in tests).
pub trait FrameSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_frame(&self, index: usize) -> Result<Frame>;
}

/// A directory of per-frame container files, ordered by filename.
pub struct ContainerDirectory {
    paths: Vec<PathBuf>,
    dataset: String,
}

impl ContainerDirectory {
    /// List `dir` for container files and sort them by filename.
    pub fn open(dir: &Path) -> Result<Self> {
        Self::open_dataset(dir, FRAME_DATASET)
    }

    /// Like [`ContainerDirectory::open`] with an explicit dataset name.
    pub fn open_dataset(dir: &Path, dataset: &str) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(CONTAINER_EXTENSION))
            })
            .collect();
        paths.sort();

        Ok(Self {
            paths,
            dataset: dataset.to_string(),
        })
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(|p| p.as_path())
    }
}

impl FrameSource for ContainerDirectory {
    fn len(&self) -> usize {
        self.paths.len()
    }

    fn load_frame(&self, index: usize) -> Result<Frame> {
        let path = self
            .paths
            .get(index)
            .ok_or(StackprepError::FrameIndexOutOfRange {
                index,
                total: self.paths.len(),
            })?;
        let data = container::read_array2(path, &self.dataset)?;
        Ok(Frame::new(data))
    }
}
