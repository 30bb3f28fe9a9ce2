//! Plain-text grid export
//!
//! # Produced format
//!
//! One logical line per grid cell, iterating `for z { for y { for x }}`;
//! each line carries the cell's value for every substrate, separated by
//! single spaces, with a trailing space before the newline:
//!
//! ```text
//! 38 5.5
//! 38 5.5
//! ...
//! ```
//!
//! The format exists so that two solver variants can be diffed cell by
//! cell with standard text tools. It carries no geometry header and is not
//! meant to round-trip back into a solver.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::physics::{Real, SubstrateGrid};

// =================================================================================================
// GridTextError
// =================================================================================================

/// Possible errors during a text export.
#[derive(Debug)]
pub enum GridTextError {
    /// System error: unable to create or write the file.
    ///
    /// Common causes: directory does not exist, insufficient permissions,
    /// disk space exhausted. In-memory state is unaffected.
    Io(io::Error),
}

impl fmt::Display for GridTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridTextError::Io(e) => write!(f, "grid export I/O error: {e}"),
        }
    }
}

impl std::error::Error for GridTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridTextError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for GridTextError {
    fn from(e: io::Error) -> Self {
        GridTextError::Io(e)
    }
}

// =================================================================================================
// Export functions
// =================================================================================================

/// Stream the grid in the text layout to any writer.
pub fn write_grid<R: Real, W: Write>(grid: &SubstrateGrid<R>, writer: &mut W) -> io::Result<()> {
    for z in 0..grid.nz() {
        for y in 0..grid.ny() {
            for x in 0..grid.nx() {
                for s in 0..grid.substrates_count() {
                    write!(writer, "{} ", grid.get(s, x, y, z))?;
                }
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

/// Export the grid to a file.
///
/// # Errors
///
/// [`GridTextError::Io`] if the file cannot be created or written.
pub fn save_grid<R: Real>(
    grid: &SubstrateGrid<R>,
    path: impl AsRef<Path>,
) -> Result<(), GridTextError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_grid(grid, &mut writer)?;

    // Explicit flush so deferred write errors surface here instead of
    // being swallowed by Drop.
    writer.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
