//! Destination layouts for copied source files.
//!
//! A layout maps a path matched under `source/` (relative to the base
//! directory) to the path it is copied to under `template/`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{DSGE_DIR, OUTPUT_DIR, SOURCE_DIR};

/// How matched source paths are placed inside the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestinationLayout {
    /// Replaces every `\` with `/dsge/` and prefixes `template/`.
    ///
    /// Only backslash-separated paths end up under `source/dsge`; with `/`
    /// separators the path is merely prefixed, so `source/sub/d.cpp` lands
    /// at `template/source/sub/d.cpp`.
    #[default]
    Literal,
    /// Places everything below `source/` under `template/source/dsge/`,
    /// whatever the platform separator.
    Relocate,
}

impl fmt::Display for DestinationLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationLayout::Literal => write!(f, "literal"),
            DestinationLayout::Relocate => write!(f, "relocate"),
        }
    }
}

impl DestinationLayout {
    /// Computes the destination, relative to the base directory, for a
    /// matched source path.
    pub fn target_for(&self, matched: &str) -> String {
        match self {
            DestinationLayout::Literal => {
                format!("{OUTPUT_DIR}/{}", matched.replace('\\', &format!("/{DSGE_DIR}/")))
            }
            DestinationLayout::Relocate => {
                let normalized = matched.replace('\\', "/");
                let rest = normalized
                    .strip_prefix(&format!("{SOURCE_DIR}/"))
                    .unwrap_or(&normalized)
                    .trim_start_matches('/');
                format!("{OUTPUT_DIR}/{SOURCE_DIR}/{DSGE_DIR}/{rest}")
            }
        }
    }

    /// Path flavour of [`DestinationLayout::target_for`].
    pub fn target_path(&self, matched: &Path) -> PathBuf {
        PathBuf::from(self.target_for(&matched.to_string_lossy()))
    }
}
