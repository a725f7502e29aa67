//! Loading and saving of resource trees.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// Reads a value from a serialized resource dump and writes it back.
///
/// Only [`Parser::from_reader`] and [`Parser::to_writer`] are required; the
/// file, string and byte helpers are built on top of them.
///
/// # Example
///
/// ```rust,no_run
/// use rdotswift::{ResourceTree, traits::Parser};
/// let tree = ResourceTree::read_from("values.json")?;
/// tree.write_to("values.merged.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Decode from a buffered reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Encode into any writer.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Decode the file at `path`.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Encode into the file at `path`, replacing it.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }

    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
