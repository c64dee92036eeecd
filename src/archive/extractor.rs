use std::fs::{self, File};
use std::io::{self, BufReader, Read, Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use super::limits::SizeProfile;
use super::outcome::{ExtractionRequest, ExtractionResult};

/// Extracts one ZIP archive into a destination directory.
///
/// The archive handle lives only inside [`Extractor::extract`]; it is
/// dropped, and the file closed, on every return path.
#[derive(Debug, Clone)]
pub struct Extractor {
    request: ExtractionRequest,
    allow_zip64: bool,
}

impl Extractor {
    pub fn new(request: ExtractionRequest) -> Self {
        Self {
            request,
            allow_zip64: true,
        }
    }

    /// Whether archives that need ZIP64 extensions are accepted (default: yes).
    ///
    /// When disallowed, such archives yield [`ExtractionResult::TooLarge`]
    /// and nothing is written.
    pub fn allow_zip64(mut self, allow: bool) -> Self {
        self.allow_zip64 = allow;
        self
    }

    pub fn request(&self) -> &ExtractionRequest {
        &self.request
    }

    /// Extract every entry of the archive into the destination.
    ///
    /// Classified failures come back as `Ok` with the matching
    /// [`ExtractionResult`]. Anything outside that taxonomy (the archive path
    /// is a directory, a write fails, the disk is full) is returned as `Err`.
    /// Entries written before a failure stay on disk.
    pub fn extract(&self) -> Result<ExtractionResult> {
        let path = self.request.archive_path();
        let dest = self.request.destination();

        if !path.exists() {
            debug!(archive = %path.display(), "archive does not exist");
            return Ok(ExtractionResult::FileNotFound);
        }
        if path.is_dir() {
            bail!("Failed to read archive: {} is a directory", path.display());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open archive: {}", path.display()))?;
        let archive_size = file
            .metadata()
            .with_context(|| format!("Failed to stat archive: {}", path.display()))?
            .len();

        let mut archive = match ZipArchive::new(BufReader::new(file)) {
            Ok(archive) => archive,
            Err(err) => return classify(Failure::Open(err), path),
        };

        if !self.allow_zip64 {
            let profile = match SizeProfile::scan(&mut archive, archive_size) {
                Ok(profile) => profile,
                Err(err) => return classify(Failure::Open(err), path),
            };
            if profile.requires_zip64() {
                warn!(
                    archive = %path.display(),
                    entries = profile.entry_count,
                    size = profile.archive_size,
                    "archive needs ZIP64 extensions, which are disabled"
                );
                return Ok(ExtractionResult::TooLarge);
            }
        }

        info!(
            archive = %path.display(),
            destination = %dest.display(),
            entries = archive.len(),
            "extracting"
        );

        match write_entries(&mut archive, dest) {
            Ok(written) => {
                info!(written, "extraction finished");
                Ok(ExtractionResult::Extracted)
            }
            Err(failure) => classify(failure, path),
        }
    }
}

/// Extract `archive_path` into `destination` with default settings.
pub fn extract(
    archive_path: impl Into<PathBuf>,
    destination: impl Into<PathBuf>,
) -> Result<ExtractionResult> {
    Extractor::new(ExtractionRequest::new(archive_path, destination)).extract()
}

/// Where an extraction went wrong.
#[derive(Debug)]
enum Failure {
    /// Opening or indexing the archive.
    Open(ZipError),
    /// Decompressing or verifying an entry's data.
    Read { entry: String, source: io::Error },
    /// Writing to the destination.
    Write { path: PathBuf, source: io::Error },
}

impl From<ZipError> for Failure {
    fn from(err: ZipError) -> Self {
        Failure::Open(err)
    }
}

/// Map a failure onto the closed result taxonomy, or pass it through as a fault.
fn classify(failure: Failure, archive: &Path) -> Result<ExtractionResult> {
    match failure {
        Failure::Open(ZipError::InvalidArchive(reason)) => {
            warn!(archive = %archive.display(), %reason, "not a valid ZIP archive");
            Ok(ExtractionResult::BadArchive)
        }
        Failure::Open(ZipError::UnsupportedArchive(reason)) => {
            warn!(archive = %archive.display(), %reason, "unsupported ZIP archive");
            Ok(ExtractionResult::BadArchive)
        }
        Failure::Open(ZipError::Io(err)) if is_truncation(&err) => {
            warn!(archive = %archive.display(), error = %err, "truncated ZIP archive");
            Ok(ExtractionResult::BadArchive)
        }
        // Any read error past the central directory means a damaged entry.
        Failure::Read { entry, source } => {
            warn!(archive = %archive.display(), %entry, error = %source, "corrupt entry");
            Ok(ExtractionResult::BadArchive)
        }
        Failure::Open(err) => {
            Err(err).with_context(|| format!("Failed to read archive: {}", archive.display()))
        }
        Failure::Write { path, source } => {
            Err(source).with_context(|| format!("Failed to write {}", path.display()))
        }
    }
}

fn is_truncation(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData
    )
}

/// Write every entry below `dest`, returning how many were written.
fn write_entries<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    dest: &Path,
) -> Result<usize, Failure> {
    create_dir(dest)?;

    let mut written = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // Root and `..` components are stripped, so `../up.txt` lands at `dest/up.txt`.
        let relative = entry.mangled_name();
        if relative != Path::new(entry.name()) {
            debug!(entry = entry.name(), path = %relative.display(), "rewrote entry path");
        }
        let output_path = dest.join(relative);

        if entry.is_dir() {
            create_dir(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                create_dir(parent)?;
            }
            let mut output = File::create(&output_path).map_err(|source| Failure::Write {
                path: output_path.clone(),
                source,
            })?;
            let name = entry.name().to_string();
            let bytes = copy_entry(&mut entry, &name, &mut output, &output_path)?;
            debug!(entry = %name, bytes, "extracted");
        }

        written += 1;
    }

    Ok(written)
}

fn create_dir(path: &Path) -> Result<(), Failure> {
    fs::create_dir_all(path).map_err(|source| Failure::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Like `io::copy`, but keeps read errors (archive side) apart from write
/// errors (destination side).
fn copy_entry<E: Read>(
    entry: &mut E,
    entry_name: &str,
    output: &mut File,
    output_path: &Path,
) -> Result<u64, Failure> {
    let mut buf = vec![0u8; 64 * 1024];
    let mut total = 0u64;

    loop {
        let n = match entry.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Failure::Read {
                    entry: entry_name.to_string(),
                    source,
                });
            }
        };

        output
            .write_all(&buf[..n])
            .map_err(|source| Failure::Write {
                path: output_path.to_path_buf(),
                source,
            })?;
        total += n as u64;
    }
}
