use std::fmt;
use std::path::{Path, PathBuf};

/// What to extract and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    archive_path: PathBuf,
    destination: PathBuf,
}

impl ExtractionRequest {
    pub fn new(archive_path: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            destination: destination.into(),
        }
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Destination directory. `.` means the current working directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Outcome of a single extraction.
///
/// Each variant carries a fixed message and process exit code, so callers
/// never compare strings to find out what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Every entry was written to the destination.
    Extracted,
    /// The archive path does not exist.
    FileNotFound,
    /// The file is not a ZIP archive the library can read.
    BadArchive,
    /// The archive needs ZIP64 extensions but they were disallowed.
    TooLarge,
}

impl ExtractionResult {
    pub fn message(&self) -> &'static str {
        match self {
            ExtractionResult::Extracted => "",
            ExtractionResult::FileNotFound => "File Not Found",
            ExtractionResult::BadArchive => "Bad Zip File",
            ExtractionResult::TooLarge => "Large Zip File",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractionResult::Extracted => 0,
            ExtractionResult::FileNotFound => 1,
            ExtractionResult::BadArchive => 2,
            ExtractionResult::TooLarge => 3,
        }
    }

    pub fn is_success(&self) -> bool {
        *self == ExtractionResult::Extracted
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_codes_are_fixed_per_variant() {
        let table = [
            (ExtractionResult::Extracted, "", 0),
            (ExtractionResult::FileNotFound, "File Not Found", 1),
            (ExtractionResult::BadArchive, "Bad Zip File", 2),
            (ExtractionResult::TooLarge, "Large Zip File", 3),
        ];

        for (result, message, code) in table {
            assert_eq!(result.message(), message);
            assert_eq!(result.exit_code(), code);
            assert_eq!(result.to_string(), message);
        }
    }

    #[test]
    fn only_extracted_is_success() {
        assert!(ExtractionResult::Extracted.is_success());
        assert!(!ExtractionResult::FileNotFound.is_success());
        assert!(!ExtractionResult::BadArchive.is_success());
        assert!(!ExtractionResult::TooLarge.is_success());
    }

    #[test]
    fn request_keeps_paths_as_given() {
        let request = ExtractionRequest::new("data/archive.zip", ".");
        assert_eq!(request.archive_path(), Path::new("data/archive.zip"));
        assert_eq!(request.destination(), Path::new("."));
    }
}
