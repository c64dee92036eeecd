//! # unzip
//!
//! Extract a ZIP archive into a destination folder and report the outcome
//! as one of four results, each with a fixed message and exit code.
//!
//! The archive format itself is handled by the [`zip`] crate. This library
//! checks that the archive exists, writes its entries, and sorts failures
//! into [`ExtractionResult`] variants.
//!
//! ## Example
//!
//! ```no_run
//! use unzip::{ExtractionRequest, ExtractionResult, Extractor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = ExtractionRequest::new("bundle.zip", "out");
//!     let result = Extractor::new(request).allow_zip64(false).extract()?;
//!
//!     if result != ExtractionResult::Extracted {
//!         eprintln!("ERROR: {result}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;

pub use archive::{ExtractionRequest, ExtractionResult, Extractor, extract};
pub use cli::Cli;
