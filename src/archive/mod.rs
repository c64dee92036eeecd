//! ZIP archive extraction.
//!
//! Reading and decompressing the archive is left to the [`zip`] crate; this
//! module decides what an extraction's outcome means.
//!
//! ## Components
//!
//! - [`outcome`]: the request and the closed set of results
//! - [`limits`]: whether an archive needs ZIP64 extensions
//! - [`extractor`]: opens the archive, writes its entries, classifies failures
//!
//! ## Limitations
//!
//! - ZIP only; no gzip or tar
//! - No rollback: a failure partway through leaves written entries on disk
//! - Entry paths are cleaned by the `zip` crate only (`mangled_name`)

mod extractor;
mod limits;
mod outcome;

pub use extractor::{Extractor, extract};
pub use limits::{SizeProfile, ZIP32_ENTRY_LIMIT, ZIP32_SIZE_LIMIT};
pub use outcome::{ExtractionRequest, ExtractionResult};
