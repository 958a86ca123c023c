//! XYZ file format parser
//!
//! Reads XYZ coordinate files, with or without the standard atom-count
//! header, into [`Molecule`] records.

mod parser;

pub use parser::{Molecule, XyzReader};

use std::io::Read;
use std::path::Path;

use crate::error::IoResult;

/// Read an XYZ file from a path (gzip handled transparently)
pub fn read_xyz(path: &Path) -> IoResult<Molecule> {
    let file = crate::compress::open_file(path)?;
    let mut reader = XyzReader::new(file);
    reader.read()
}

/// Read an XYZ file from a string
pub fn read_xyz_str(content: &str) -> IoResult<Molecule> {
    let mut reader = XyzReader::new(content.as_bytes());
    reader.read()
}

/// Read an XYZ file from a reader
pub fn read_xyz_from<R: Read>(reader: R) -> IoResult<Molecule> {
    let mut reader = XyzReader::new(reader);
    reader.read()
}
