//! Error handling for dsge-scaffold.
//! Every failure is fatal: errors propagate to `main`, which reports them
//! and exits without undoing the steps already performed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scaffolding a template tree.
#[derive(Error, Debug)]
pub enum Error {
    /// Any filesystem failure not covered by a checked precondition.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The output directory is already present.
    #[error("Destination '{}' already exists. Remove it before scaffolding again.", .path.display())]
    PreexistingDestination { path: PathBuf },

    /// One of the fixed example files is absent or not a regular file.
    #[error("Template asset '{}' is missing.", .path.display())]
    MissingTemplateAsset { path: PathBuf },

    /// A derived copy would land in a directory that was never created.
    #[error(
        "Cannot copy '{}' to '{}': parent directory does not exist.",
        .source_path.display(),
        .target.display()
    )]
    MissingDestinationParent { source_path: PathBuf, target: PathBuf },

    /// Traversal of the source tree failed.
    #[error("Walk error: {0}.")]
    Walk(String),

    /// The source glob pattern could not be compiled.
    #[error("Pattern error: {0}.")]
    Pattern(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
