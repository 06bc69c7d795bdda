use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("A grid needs at least one row and one column")]
    Empty,

    #[error("Row {row} has {got} cells, expected {exp}")]
    Ragged { row: usize, got: usize, exp: usize },

    #[error("Unexpected '{ch}' at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to create snapshot directory {path:?}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to list snapshot directory {path:?}")]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("No sequence number left after the largest one in {path:?}")]
    Exhausted { path: PathBuf },

    #[error("Failed to write snapshot {path:?}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Terminal output failed")]
    Terminal(#[from] io::Error),
}
