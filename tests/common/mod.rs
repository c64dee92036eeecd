#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const A_TXT: &[u8] = b"alpha contents\n";
pub const B_TXT: &[u8] = b"bravo contents, one level down\n";

/// Write a ZIP at `path` holding `entries` as (name, data) pairs.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    write_zip_with(path, entries, SimpleFileOptions::default());
}

pub fn write_zip_with(path: &Path, entries: &[(&str, &[u8])], options: SimpleFileOptions) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

/// The two-file archive used by most tests: `a.txt` and `sub/b.txt`.
pub fn sample_zip(path: &Path) {
    write_zip(path, &[("a.txt", A_TXT), ("sub/b.txt", B_TXT)]);
}

pub fn assert_sample_extracted(dest: &Path) {
    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), A_TXT);
    assert_eq!(fs::read(dest.join("sub").join("b.txt")).unwrap(), B_TXT);
}
