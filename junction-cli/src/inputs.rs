//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based input lookup
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`. A single puzzle
/// can be pointed at an explicit file instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            explicit: None,
        }
    }

    /// Read `year`/`day` from `path` instead of the input directory
    pub fn with_explicit_input(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.explicit = Some((year, day, path));
        self
    }

    /// Where the input for a year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.explicit {
            Some((y, d, path)) if *y == year && *d == day => path.clone(),
            _ => self
                .input_dir
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_input(&self.input_path(year, day))
    }
}

fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::Missing(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
