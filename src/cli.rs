use std::path::PathBuf;

use clap::Parser;

use crate::archive::ExtractionRequest;

#[derive(Parser, Debug)]
#[command(name = "unzip")]
#[command(version)]
#[command(about = "Extract a ZIP archive into a folder", long_about = None)]
#[command(after_help = "Exit codes:\n  \
  0  extracted\n  \
  1  file not found\n  \
  2  bad or unsupported ZIP file\n  \
  3  archive needs ZIP64 but --no-zip64 was given")]
pub struct Cli {
    /// A path and filename to be decompressed
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination folder to decompress into ("." is the current folder)
    #[arg(value_name = "DEST", default_value = ".")]
    pub dest: PathBuf,

    /// Refuse archives that need ZIP64 extensions
    #[arg(long = "no-zip64")]
    pub no_zip64: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> ExtractionRequest {
        ExtractionRequest::new(&self.file, &self.dest)
    }

    pub fn allow_zip64(&self) -> bool {
        !self.no_zip64
    }

    /// Tracing filter directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "unzip=warn",
            1 => "unzip=info",
            _ => "unzip=debug",
        }
    }
}
