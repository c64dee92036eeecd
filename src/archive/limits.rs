//! Legacy (non-ZIP64) size limits.
//!
//! Without ZIP64 extensions the central directory stores entry counts in
//! 16 bits and sizes/offsets in 32 bits. The thresholds below are the
//! conservative ones: signed 32-bit sizes, and a count that leaves room for
//! the 0xFFFF marker.

use std::io::{Read, Seek};

use zip::ZipArchive;
use zip::result::ZipResult;

/// Largest size or offset representable without ZIP64.
pub const ZIP32_SIZE_LIMIT: u64 = (1 << 31) - 1;

/// Entry count at which ZIP64 becomes mandatory.
pub const ZIP32_ENTRY_LIMIT: usize = 0xFFFF;

/// Size figures of an opened archive, as relevant to ZIP64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeProfile {
    pub entry_count: usize,
    pub archive_size: u64,
    /// Largest uncompressed size, compressed size or header offset of any entry.
    pub largest_field: u64,
}

impl SizeProfile {
    /// Collect the profile from central directory metadata only.
    ///
    /// Entries are opened raw, so nothing is decompressed.
    pub fn scan<R: Read + Seek>(archive: &mut ZipArchive<R>, archive_size: u64) -> ZipResult<Self> {
        let mut largest_field = 0u64;
        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i)?;
            largest_field = largest_field
                .max(entry.size())
                .max(entry.compressed_size())
                .max(entry.header_start());
        }

        Ok(Self {
            entry_count: archive.len(),
            archive_size,
            largest_field,
        })
    }

    pub fn requires_zip64(&self) -> bool {
        self.entry_count >= ZIP32_ENTRY_LIMIT
            || self.archive_size > ZIP32_SIZE_LIMIT
            || self.largest_field > ZIP32_SIZE_LIMIT
    }
}
