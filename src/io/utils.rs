//! Utilities for input/output.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

#[cfg(feature = "json")]
use serde::Serialize;

/// How to handle writing to a path where a file already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverwriteMode {
    Always,
    Never,
    Ask,
}

/// Handle for writing an output file atomically.
///
/// Content is written to a temporary file in the same directory as the
/// target, which replaces the target only when writing has succeeded.
#[derive(Debug)]
pub struct AtomicOutputFile {
    temp_file: NamedTempFile,
    target_path: PathBuf,
}

impl AtomicOutputFile {
    /// Creates a new atomic output file for the given target path.
    pub fn new(target_path: PathBuf) -> io::Result<Self> {
        let target_dir = match target_path.parent() {
            Some(parent) if parent != Path::new("") => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };
        let temp_file = NamedTempFile::new_in(target_dir)?;
        Ok(Self {
            temp_file,
            target_path,
        })
    }

    /// Returns the path the output file will end up at.
    pub fn target_path(&self) -> &Path {
        self.target_path.as_path()
    }

    /// Returns whether writing to the target path is allowed under the
    /// given overwrite mode, asking the user if the mode requires it.
    pub fn check_write_allowed(&self, overwrite_mode: OverwriteMode) -> bool {
        if !self.target_path.exists() {
            return true;
        }
        match overwrite_mode {
            OverwriteMode::Always => true,
            OverwriteMode::Never => false,
            OverwriteMode::Ask => user_says_yes(&format!(
                "Overwrite existing file {}?",
                self.target_path.to_string_lossy()
            ))
            .unwrap_or(false),
        }
    }

    /// Writes the given text content to the temporary file.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.temp_file.as_file_mut().write_all(text.as_bytes())
    }

    /// Moves the temporary file to the target path.
    pub fn perform_replace(self) -> io::Result<()> {
        self.temp_file
            .persist(&self.target_path)
            .map(|_| ())
            .map_err(|err| err.error)
    }
}

/// Asks the user the given yes/no question on the terminal.
///
/// Answers no automatically when standard input is not interactive.
pub fn user_says_yes(question: &str) -> io::Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    let _ = io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Reads and returns the content of the specified text file.
pub fn read_text_file<P: AsRef<Path>>(file_path: P) -> io::Result<String> {
    let file = fs::File::open(file_path)?;
    let mut text = String::new();
    let _ = io::BufReader::new(file).read_to_string(&mut text)?;
    Ok(text)
}

/// Serializes the given data into JSON format and writes it to the given
/// atomic output file.
#[cfg(feature = "json")]
pub fn write_data_as_json<T: Serialize>(
    output_file: &mut AtomicOutputFile,
    data: &T,
) -> io::Result<()> {
    let text = serde_json::to_string_pretty(data)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    output_file.write_text(&text)
}
