//! CSV readers for the accounts seed file and the command script
//!
//! The command script is streamed through an iterator so malformed rows
//! can be skipped while processing continues; the seed file is loaded
//! eagerly and any malformed row is fatal, since the engine cannot start
//! from a partially valid registry.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from the
//!   constructors
//! - Individual command rows that fail to parse are yielded as Err
//!   variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{
    convert_account_record, convert_command_record, AccountCsvRecord, CommandCsvRecord,
};
use crate::types::{AccountSeed, Command};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over script commands
///
/// Implements Iterator, yielding `Result<Command, String>` per CSV row.
/// Reads one row at a time; memory usage does not grow with file size.
#[derive(Debug)]
pub struct CommandReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl CommandReader {
    /// Create a new CommandReader from a file path
    ///
    /// The CSV reader is configured to trim whitespace from all fields and
    /// to allow flexible field counts, since most commands leave some
    /// columns empty.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for CommandReader {
    type Item = Result<Command, String>;

    /// Get the next command from the script
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - Successfully parsed command
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CommandCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                // Line numbers are offset by one for the header row
                Some(
                    convert_command_record(record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

/// Load every account seed from the accounts file
///
/// Unlike the command script, a malformed seed row aborts the load: the
/// registry must be fully well-formed before any command runs.
///
/// # Returns
///
/// * `Ok(Vec<AccountSeed>)` - All seeds in file order
/// * `Err(String)` - Open failure or the first malformed row, with its
///   line number
pub fn read_account_seeds(path: &Path) -> Result<Vec<AccountSeed>, String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut seeds = Vec::new();
    for (row, result) in reader.deserialize::<AccountCsvRecord>().enumerate() {
        let line = row + 2;
        let record = result.map_err(|e| format!("Line {}: CSV parse error: {}", line, e))?;
        let seed = convert_account_record(record).map_err(|e| format!("Line {}: {}", line, e))?;
        seeds.push(seed);
    }

    Ok(seeds)
}
