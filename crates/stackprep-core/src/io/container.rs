//! Single-dataset array container files.
//!
//! Each file holds exactly one named f32 array (2D frame or 3D stack):
//! a fixed 80-byte header followed by the samples in row-major order,
//! little-endian. Writes serialize the whole dataset into memory first and
//! persist it with a single write call, so an aborted run never leaves a
//! partially-written dataset behind.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use ndarray::{Array2, Array3};

use crate::error::{Result, StackprepError};

pub const CONTAINER_HEADER_SIZE: usize = 80;
const CONTAINER_MAGIC: &[u8; 8] = b"STACKPRP";
const CONTAINER_VERSION: u32 = 1;
const NAME_FIELD_LEN: usize = 40;
const MAX_RANK: usize = 3;

/// Header contents of a container file.
#[derive(Clone, Debug)]
pub struct DatasetInfo {
    pub name: String,
    pub shape: Vec<usize>,
}

impl DatasetInfo {
    /// Total sample count.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write a 2D dataset to `path` under `name`.
pub fn write_array2(path: &Path, name: &str, data: &Array2<f32>) -> Result<()> {
    let (rows, cols) = data.dim();
    write_dataset(path, name, &[rows, cols], data.iter())
}

/// Write a 3D dataset to `path` under `name`.
pub fn write_array3(path: &Path, name: &str, data: &Array3<f32>) -> Result<()> {
    let (frames, rows, cols) = data.dim();
    write_dataset(path, name, &[frames, rows, cols], data.iter())
}

/// Read a 2D dataset named `name` from `path`.
pub fn read_array2(path: &Path, name: &str) -> Result<Array2<f32>> {
    let (info, samples) = read_dataset(path, name, 2)?;
    let array = Array2::from_shape_vec((info.shape[0], info.shape[1]), samples)
        .map_err(|e| invalid(path, e.to_string()))?;
    Ok(array)
}

/// Read a 3D dataset named `name` from `path`.
pub fn read_array3(path: &Path, name: &str) -> Result<Array3<f32>> {
    let (info, samples) = read_dataset(path, name, 3)?;
    let array = Array3::from_shape_vec((info.shape[0], info.shape[1], info.shape[2]), samples)
        .map_err(|e| invalid(path, e.to_string()))?;
    Ok(array)
}

/// Read only the header of a container file.
pub fn peek(path: &Path) -> Result<DatasetInfo> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    parse_header(path, &mmap)
}

fn write_dataset<'a>(
    path: &Path,
    name: &str,
    shape: &[usize],
    samples: impl Iterator<Item = &'a f32>,
) -> Result<()> {
    let total: usize = shape.iter().product();
    let mut buf = Vec::with_capacity(CONTAINER_HEADER_SIZE + total * 4);
    write_header(&mut buf, name, shape)?;
    for &v in samples {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    debug_assert_eq!(buf.len(), CONTAINER_HEADER_SIZE + total * 4);

    std::fs::write(path, &buf)?;
    Ok(())
}

fn write_header(w: &mut impl Write, name: &str, shape: &[usize]) -> Result<()> {
    // Magic (8 bytes)
    w.write_all(CONTAINER_MAGIC)?;
    // Version (4 bytes)
    w.write_all(&CONTAINER_VERSION.to_le_bytes())?;
    // Dataset name (40 bytes, zero-padded)
    write_fixed_string(w, name, NAME_FIELD_LEN)?;
    // Rank (4 bytes)
    w.write_all(&(shape.len() as u32).to_le_bytes())?;
    // Dimensions (3 x 8 bytes; unused trailing dims are zero)
    for i in 0..MAX_RANK {
        let dim = shape.get(i).copied().unwrap_or(0) as u64;
        w.write_all(&dim.to_le_bytes())?;
    }

    debug_assert_eq!(8 + 4 + NAME_FIELD_LEN + 4 + MAX_RANK * 8, CONTAINER_HEADER_SIZE);
    Ok(())
}

fn write_fixed_string(w: &mut impl Write, s: &str, len: usize) -> Result<()> {
    let bytes = s.as_bytes();
    let to_write = bytes.len().min(len);
    w.write_all(&bytes[..to_write])?;
    // Pad with zeros
    for _ in to_write..len {
        w.write_all(&[0u8])?;
    }
    Ok(())
}

fn read_dataset(path: &Path, name: &str, rank: usize) -> Result<(DatasetInfo, Vec<f32>)> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    let info = parse_header(path, &mmap)?;
    if info.name != name {
        return Err(StackprepError::DatasetMismatch {
            path: path.to_path_buf(),
            expected: name.to_string(),
            found: info.name,
        });
    }
    if info.shape.len() != rank {
        return Err(invalid(
            path,
            format!("dataset has rank {}, expected {}", info.shape.len(), rank),
        ));
    }

    let total = info.len();
    let mut samples = vec![0f32; total];
    let mut cursor = Cursor::new(&mmap[CONTAINER_HEADER_SIZE..]);
    cursor
        .read_f32_into::<LittleEndian>(&mut samples)
        .map_err(|e| invalid(path, format!("payload read failed: {e}")))?;

    Ok((info, samples))
}

fn parse_header(path: &Path, bytes: &[u8]) -> Result<DatasetInfo> {
    if bytes.len() < CONTAINER_HEADER_SIZE {
        return Err(invalid(path, "file too small for container header".into()));
    }
    if &bytes[0..8] != CONTAINER_MAGIC {
        return Err(invalid(path, "missing container magic".into()));
    }

    let mut cursor = Cursor::new(&bytes[8..CONTAINER_HEADER_SIZE]);
    let version = cursor.read_u32::<LittleEndian>()?;
    if version != CONTAINER_VERSION {
        return Err(invalid(path, format!("unsupported version {version}")));
    }

    let mut name_bytes = [0u8; NAME_FIELD_LEN];
    std::io::Read::read_exact(&mut cursor, &mut name_bytes)?;
    let name_end = name_bytes
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(NAME_FIELD_LEN);
    let name = String::from_utf8_lossy(&name_bytes[..name_end]).into_owned();

    let rank = cursor.read_u32::<LittleEndian>()? as usize;
    if rank < 2 || rank > MAX_RANK {
        return Err(invalid(path, format!("unsupported rank {rank}")));
    }

    let mut shape = Vec::with_capacity(rank);
    for i in 0..MAX_RANK {
        let dim = cursor.read_u64::<LittleEndian>()? as usize;
        if i < rank {
            shape.push(dim);
        } else if dim != 0 {
            return Err(invalid(path, "nonzero trailing dimension".into()));
        }
    }

    let info = DatasetInfo { name, shape };
    let expected = CONTAINER_HEADER_SIZE + info.len() * 4;
    if bytes.len() < expected {
        return Err(invalid(
            path,
            format!("truncated: expected {} bytes, got {}", expected, bytes.len()),
        ));
    }

    Ok(info)
}

fn invalid(path: &Path, reason: String) -> StackprepError {
    StackprepError::InvalidContainer {
        path: path.to_path_buf(),
        reason,
    }
}
