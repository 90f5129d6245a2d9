//! Saved-data persistence for the death chest registry.
//!
//! One `deathchests.dat` per world directory: a fixed header followed by a
//! zstd-compressed bincode payload. The CRC32 over the compressed payload
//! rejects torn or corrupted files at load time.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crc32fast::Hasher;
use tracing::debug;

use crate::DeathChestRegistry;

/// Magic number identifying a death chest saved-data file ("VDCS").
const SAVED_DATA_MAGIC: u32 = 0x56444353;

/// Current saved-data format version.
const SAVED_DATA_VERSION: u16 = 1;

/// File name within the world directory.
const SAVED_DATA_FILE: &str = "deathchests.dat";

/// Saved-data file header.
#[derive(Debug, Clone)]
struct SavedDataHeader {
    magic: u32,
    version: u16,
    crc32: u32,
    payload_len: u32,
}

impl SavedDataHeader {
    fn new(crc32: u32, payload_len: u32) -> Self {
        Self {
            magic: SAVED_DATA_MAGIC,
            version: SAVED_DATA_VERSION,
            crc32,
            payload_len,
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(14);
        bytes.extend_from_slice(&self.magic.to_le_bytes());
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.crc32.to_le_bytes());
        bytes.extend_from_slice(&self.payload_len.to_le_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 14 {
            anyhow::bail!("Saved-data header too short");
        }

        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic != SAVED_DATA_MAGIC {
            anyhow::bail!(
                "Invalid saved-data magic: expected 0x{:08X}, got 0x{:08X}",
                SAVED_DATA_MAGIC,
                magic
            );
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != SAVED_DATA_VERSION {
            anyhow::bail!("Unsupported saved-data version: {}", version);
        }

        let crc32 = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
        let payload_len = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);

        Ok(Self {
            magic,
            version,
            crc32,
            payload_len,
        })
    }
}

/// Saved-data store rooted at one world's directory.
pub struct SavedDataStore {
    world_dir: PathBuf,
}

impl SavedDataStore {
    /// Create a store rooted at the given world directory.
    pub fn new<P: AsRef<Path>>(world_dir: P) -> Result<Self> {
        let world_dir = world_dir.as_ref().to_path_buf();
        fs::create_dir_all(&world_dir).context("Failed to create world directory")?;
        Ok(Self { world_dir })
    }

    fn data_path(&self) -> PathBuf {
        self.world_dir.join(SAVED_DATA_FILE)
    }

    /// Write the registry to disk.
    pub fn save(&self, registry: &DeathChestRegistry) -> Result<()> {
        let serialized =
            bincode::serialize(registry).context("Failed to serialize death chest registry")?;

        // zstd level 3 for balanced speed/compression.
        let compressed =
            zstd::encode_all(&serialized[..], 3).context("Failed to compress saved data")?;

        let mut hasher = Hasher::new();
        hasher.update(&compressed);
        let crc32 = hasher.finalize();

        let header = SavedDataHeader::new(crc32, compressed.len() as u32);

        let path = self.data_path();
        let mut file = File::create(&path).context("Failed to create saved-data file")?;
        file.write_all(&header.to_bytes())
            .context("Failed to write header")?;
        file.write_all(&compressed)
            .context("Failed to write payload")?;

        debug!(
            "Saved {} death chest record(s) to {}",
            registry.len(),
            path.display()
        );

        Ok(())
    }

    /// Load the registry from disk. A missing file yields an empty registry;
    /// a malformed one is an error for the caller to handle.
    pub fn load(&self) -> Result<DeathChestRegistry> {
        let path = self.data_path();

        if !path.exists() {
            return Ok(DeathChestRegistry::new());
        }

        let mut file = File::open(&path).context("Failed to open saved-data file")?;

        let mut header_bytes = [0u8; 14];
        file.read_exact(&mut header_bytes)
            .context("Failed to read saved-data header")?;
        let header = SavedDataHeader::from_bytes(&header_bytes)?;

        let mut compressed = vec![0u8; header.payload_len as usize];
        file.read_exact(&mut compressed)
            .context("Failed to read saved-data payload")?;

        let mut hasher = Hasher::new();
        hasher.update(&compressed);
        let computed_crc = hasher.finalize();

        if computed_crc != header.crc32 {
            anyhow::bail!(
                "CRC32 mismatch: expected {:08X}, got {:08X}",
                header.crc32,
                computed_crc
            );
        }

        let decompressed =
            zstd::decode_all(&compressed[..]).context("Failed to decompress saved data")?;

        bincode::deserialize(&decompressed).context("Failed to deserialize death chest registry")
    }
}
