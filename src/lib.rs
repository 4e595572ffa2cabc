//! dsge-scaffold creates a `template/` project tree from the example
//! template files and the `.cpp`/`.hpp` sources of a checkout.

/// Command-line interface module
pub mod cli;

/// Fixed input and output paths
pub mod constants;

/// Error types and handling
pub mod error;

/// Mapping of matched source paths into the output tree
pub mod layout;

/// Logger setup for the binary
pub mod logger;

/// Source file discovery through the glob pattern
pub mod matcher;

/// Planning and execution of the scaffolding steps
pub mod processor;
