//! Persisted artifacts.
//!
//! Networks, query sets and results are stored as JSON. A network can also
//! be mirrored to a gzip-compressed copy next to the plain file; readers pick
//! the decoder from the `.gz` extension.

mod error;
mod record;

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

pub use error::CodecError;
pub use record::{ConnRecord, NetworkRecord, PathRecord, StopRecord};

use crate::network::NetworkModel;

/// Options for [`write_network`].
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Also write `<path>.gz`.
    pub compressed_copy: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a gzip mirror alongside the plain file.
    pub fn with_compressed_copy(mut self, compressed_copy: bool) -> Self {
        self.compressed_copy = compressed_copy;
        self
    }
}

/// Serialize a network to bytes.
pub fn encode_network(model: &NetworkModel) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&NetworkRecord::from_model(model))?)
}

/// Rebuild a network from bytes produced by [`encode_network`].
pub fn decode_network(bytes: &[u8]) -> Result<NetworkModel, CodecError> {
    let record: NetworkRecord = serde_json::from_slice(bytes)?;
    record.into_model()
}

/// Write `model` to `path`.
///
/// Creates parent directories if they don't exist.
///
/// # Examples
///
/// ```
/// use transit_bench::codec::{WriteOptions, read_network, write_network};
/// use transit_bench::network::NetworkModel;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("network.json");
///
/// let options = WriteOptions::new().with_compressed_copy(true);
/// write_network(&NetworkModel::empty(), &path, &options).unwrap();
///
/// let zipped = dir.path().join("network.json.gz");
/// assert_eq!(read_network(&zipped).unwrap(), NetworkModel::empty());
/// ```
pub fn write_network(
    model: &NetworkModel,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let bytes = encode_network(model)?;
    write_bytes(path, &bytes)?;
    if options.compressed_copy {
        write_bytes(&gz_sibling(path), &bytes)?;
    }

    info!(
        path = %path.display(),
        stops = model.stop_count(),
        conns = model.conn_count(),
        paths = model.path_count(),
        "wrote network"
    );
    Ok(())
}

/// Read a network written by [`write_network`], plain or gzip.
pub fn read_network(path: impl AsRef<Path>) -> Result<NetworkModel, CodecError> {
    let path = path.as_ref();
    let model = decode_network(&read_bytes(path)?)?;

    info!(
        path = %path.display(),
        stops = model.stop_count(),
        conns = model.conn_count(),
        paths = model.path_count(),
        "read network"
    );
    Ok(model)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CodecError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_bytes(path, &bytes)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(&read_bytes(path)?)?)
}

/// `<path>.gz`, keeping any existing extension.
fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| CodecError::io(parent, e))?;
    }

    if is_gzip(path) {
        let file = File::create(path).map_err(|e| CodecError::io(path, e))?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(bytes)
            .and_then(|()| encoder.finish().map(drop))
            .map_err(|e| CodecError::io(path, e))
    } else {
        std::fs::write(path, bytes).map_err(|e| CodecError::io(path, e))
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, CodecError> {
    if is_gzip(path) {
        let file = File::open(path).map_err(|e| CodecError::io(path, e))?;
        let mut bytes = Vec::new();
        GzDecoder::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| CodecError::io(path, e))?;
        Ok(bytes)
    } else {
        std::fs::read(path).map_err(|e| CodecError::io(path, e))
    }
}
