//! Binary file storage for the contact book.
//!
//! File layout:
//! - Header: magic bytes `CBK\0`, format version `u8`
//! - Body: bincode-encoded `Vec<Record>` in store order

use super::traits::RecordStorage;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Magic bytes at the start of every contact file.
pub const FILE_MAGIC: [u8; 4] = *b"CBK\0";

/// Current file format version.
pub const FILE_VERSION: u8 = 1;

/// Files larger than this are refused instead of decoded (64 MiB).
const MAX_LOAD_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Stores records in a single bincode file.
///
/// Saves go to a sibling `.tmp` file first and are renamed over the target,
/// so an interrupted save never leaves a half-written contact file behind.
#[derive(Debug, Clone)]
pub struct BincodeFileStorage {
    path: PathBuf,
}

impl BincodeFileStorage {
    /// Create storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_file(&self, target: &Path, records: &[Record]) -> StorageResult<()> {
        let file = File::create(target).map_err(|e| StorageError::io(target, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(&FILE_MAGIC)
            .and_then(|()| writer.write_all(&[FILE_VERSION]))
            .map_err(|e| StorageError::io(target, e))?;

        bincode::serialize_into(&mut writer, records)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        writer.flush().map_err(|e| StorageError::io(target, e))?;
        Ok(())
    }

    fn read_file(&self, file: File) -> StorageResult<Vec<Record>> {
        let metadata = file.metadata().map_err(|e| StorageError::io(&self.path, e))?;
        if metadata.len() > MAX_LOAD_FILE_SIZE {
            return Err(StorageError::corrupt(
                &self.path,
                format!(
                    "file size {} bytes exceeds the {} byte limit",
                    metadata.len(),
                    MAX_LOAD_FILE_SIZE
                ),
            ));
        }

        let mut reader = BufReader::new(file);

        let mut header = [0u8; 5];
        reader.read_exact(&mut header).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => StorageError::corrupt(&self.path, "file too short"),
            _ => StorageError::io(&self.path, e),
        })?;

        if header[..4] != FILE_MAGIC {
            return Err(StorageError::corrupt(&self.path, "bad magic header"));
        }
        if header[4] != FILE_VERSION {
            return Err(StorageError::corrupt(
                &self.path,
                format!("unsupported format version {}", header[4]),
            ));
        }

        // Decode from memory so every declared length is checked against the bytes present
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| StorageError::io(&self.path, e))?;

        bincode::deserialize(&body).map_err(|e| StorageError::corrupt(&self.path, e.to_string()))
    }
}

impl RecordStorage for BincodeFileStorage {
    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let temp_path = self.temp_path();

        if let Err(e) = self.write_file(&temp_path, records) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!("No temp file to clean up at {:?}: {}", temp_path, cleanup);
            }
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            warn!("Failed to move {:?} into place: {}", temp_path, e);
            StorageError::io(&self.path, e)
        })?;

        debug!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Record>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No contact file at {:?}", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let records = self.read_file(file)?;
        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
