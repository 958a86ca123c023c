//! XYZ file parser
//!
//! Parses XYZ coordinate records: a label in column 0 followed by three
//! numeric coordinates. Files with the standard XYZ header (atom count
//! line, comment line) and bare record files are both accepted.

use std::io::{BufRead, BufReader, Read};

use crate::error::{IoError, IoResult};

/// A parsed molecule: one label and one position per atom
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Comment line from the header, empty for headerless files
    pub name: String,
    /// Atom labels (element symbols), one per record
    pub symbols: Vec<String>,
    /// Atom positions, one per record
    pub coords: Vec<[f64; 3]>,
}

impl Molecule {
    /// Number of atoms
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True when the molecule has no atoms
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// XYZ file reader
pub struct XyzReader<R> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> XyzReader<R> {
    /// Create a new XYZ reader
    pub fn new(reader: R) -> Self {
        XyzReader {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Read a single line, stripping the trailing newline
    fn read_line(&mut self) -> IoResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(Some(line))
            }
            Err(e) => Err(IoError::Io(e)),
        }
    }

    /// Parse the file into a [`Molecule`]
    pub fn read(&mut self) -> IoResult<Molecule> {
        let first = loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Err(IoError::EmptyFile),
            }
        };

        // Standard XYZ starts with a lone atom count; anything else is
        // treated as a bare record file.
        if let Ok(n_atoms) = first.trim().parse::<usize>() {
            self.parse_counted(n_atoms)
        } else {
            self.parse_bare(&first)
        }
    }

    /// Standard XYZ: count line (already consumed), comment line, then
    /// exactly `n_atoms` records.
    fn parse_counted(&mut self, n_atoms: usize) -> IoResult<Molecule> {
        if n_atoms == 0 {
            return Err(IoError::parse(self.line_number, "Zero atoms in XYZ file"));
        }

        let name = match self.read_line()? {
            Some(line) => line.trim().to_string(),
            None => {
                return Err(IoError::parse(
                    self.line_number,
                    "Expected comment line after atom count",
                ))
            }
        };

        let mut mol = Molecule {
            name,
            symbols: Vec::with_capacity(n_atoms),
            coords: Vec::with_capacity(n_atoms),
        };

        for i in 0..n_atoms {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    return Err(IoError::parse(
                        self.line_number,
                        format!("Expected atom {}, got end of file", i + 1),
                    ))
                }
            };
            let (symbol, coord) = parse_atom_line(&line, self.line_number)?;
            mol.symbols.push(symbol);
            mol.coords.push(coord);
        }

        Ok(mol)
    }

    /// Headerless file: the first line and every further non-blank line
    /// is a record.
    fn parse_bare(&mut self, first: &str) -> IoResult<Molecule> {
        let mut mol = Molecule::default();

        let (symbol, coord) = parse_atom_line(first, self.line_number)?;
        mol.symbols.push(symbol);
        mol.coords.push(coord);

        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                continue;
            }
            let (symbol, coord) = parse_atom_line(&line, self.line_number)?;
            mol.symbols.push(symbol);
            mol.coords.push(coord);
        }

        Ok(mol)
    }
}

/// Parse one record: `label x y z [extra columns ignored]`
fn parse_atom_line(line: &str, line_number: usize) -> IoResult<(String, [f64; 3])> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < 4 {
        return Err(IoError::parse(
            line_number,
            format!(
                "Atom line too short: expected 'label x y z', got '{}'",
                line
            ),
        ));
    }

    let x: f64 = parts[1]
        .parse()
        .map_err(|_| IoError::parse(line_number, "Invalid x coordinate"))?;
    let y: f64 = parts[2]
        .parse()
        .map_err(|_| IoError::parse(line_number, "Invalid y coordinate"))?;
    let z: f64 = parts[3]
        .parse()
        .map_err(|_| IoError::parse(line_number, "Invalid z coordinate"))?;

    Ok((parts[0].to_string(), [x, y, z]))
}
