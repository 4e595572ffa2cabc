//! Fixed paths used by the scaffolder, relative to the base directory.

/// Root of the generated tree.
pub const OUTPUT_DIR: &str = "template";

/// Directories created under the base directory, in creation order.
pub const OUTPUT_DIRS: [&str; 4] = [
    "template",
    "template/romfs",
    "template/source",
    "template/source/dsge",
];

/// Fixed example files and where they are copied to.
pub const TEMPLATE_ASSETS: [(&str, &str); 3] = [
    ("examples/template/Makefile", "template/Makefile"),
    ("examples/template/run.bat", "template/run.bat"),
    ("examples/template/source/main.cpp", "template/source/main.cpp"),
];

/// Directory walked for source files.
pub const SOURCE_DIR: &str = "source";

/// Pattern a source path must match to be copied.
pub const SOURCE_PATTERN: &str = "source/**pp";

/// Subdirectory receiving relocated sources.
pub const DSGE_DIR: &str = "dsge";
