//! Scaffold planning and execution.
//!
//! A run is split in two: [`Scaffolder::plan`] lists every filesystem step
//! in order, [`Scaffolder::execute`] applies them one by one. Each step
//! checks its own precondition right before acting, so a failure leaves
//! the earlier steps in place.

use globset::GlobSet;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::{OUTPUT_DIR, OUTPUT_DIRS, TEMPLATE_ASSETS},
    error::{Error, Result},
    layout::DestinationLayout,
    matcher::{default_source_matcher, find_sources},
};

/// Settings for a single scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Directory every fixed path is resolved against.
    pub base_dir: PathBuf,
    /// Where matched sources are placed in the output tree.
    pub layout: DestinationLayout,
}

impl ScaffoldOptions {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.into(), layout: DestinationLayout::default() }
    }

    pub fn with_layout(mut self, layout: DestinationLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// What a copy operation is copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// One of the fixed example files.
    Asset,
    /// A file matched under `source/`.
    Source,
}

/// A single filesystem step. Paths are relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDir { target: PathBuf },
    Copy { source: PathBuf, target: PathBuf, kind: CopyKind },
}

impl Operation {
    pub fn target(&self) -> &Path {
        match self {
            Operation::CreateDir { target } | Operation::Copy { target, .. } => target,
        }
    }

    /// Short verb used when reporting the operation.
    pub fn action(&self) -> &'static str {
        match self {
            Operation::CreateDir { .. } => "Creating",
            Operation::Copy { .. } => "Copying",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateDir { target } => {
                write!(f, "{}: '{}'", self.action(), target.display())
            }
            Operation::Copy { source, target, .. } => write!(
                f,
                "{}: '{}' -> '{}'",
                self.action(),
                source.display(),
                target.display()
            ),
        }
    }
}

/// Counts of what an execution did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub assets: usize,
    pub sources: usize,
}

/// Builds the `template/` tree below a base directory.
pub struct Scaffolder {
    options: ScaffoldOptions,
    matcher: GlobSet,
}

impl Scaffolder {
    /// Creates a scaffolder with the default source pattern.
    ///
    /// # Errors
    /// * `Error::Pattern` if the source pattern fails to compile
    pub fn new(options: ScaffoldOptions) -> Result<Self> {
        Ok(Self::with_matcher(options, default_source_matcher()?))
    }

    pub fn with_matcher(options: ScaffoldOptions, matcher: GlobSet) -> Self {
        Self { options, matcher }
    }

    pub fn base_dir(&self) -> &Path {
        &self.options.base_dir
    }

    pub fn layout(&self) -> DestinationLayout {
        self.options.layout
    }

    /// Matched source files, relative to the base directory.
    pub fn find_sources(&self) -> Result<Vec<PathBuf>> {
        find_sources(&self.options.base_dir, &self.matcher)
    }

    /// Lists every step of a run: directories, then the fixed assets, then
    /// one copy per matched source file.
    pub fn plan(&self) -> Result<Vec<Operation>> {
        let mut plan: Vec<Operation> = OUTPUT_DIRS
            .iter()
            .map(|dir| Operation::CreateDir { target: PathBuf::from(dir) })
            .collect();

        plan.extend(TEMPLATE_ASSETS.iter().map(|(source, target)| Operation::Copy {
            source: PathBuf::from(source),
            target: PathBuf::from(target),
            kind: CopyKind::Asset,
        }));

        for source in self.find_sources()? {
            let target = self.options.layout.target_path(&source);
            debug!("Planned {} -> {}", source.display(), target.display());
            plan.push(Operation::Copy { source, target, kind: CopyKind::Source });
        }

        Ok(plan)
    }

    /// Applies a plan in order, stopping at the first failure.
    ///
    /// `on_step` is called after each operation succeeds.
    pub fn execute<F>(&self, plan: &[Operation], mut on_step: F) -> Result<Summary>
    where
        F: FnMut(&Operation),
    {
        let mut summary = Summary::default();
        for operation in plan {
            self.apply(operation)?;
            match operation {
                Operation::CreateDir { .. } => summary.directories += 1,
                Operation::Copy { kind: CopyKind::Asset, .. } => summary.assets += 1,
                Operation::Copy { kind: CopyKind::Source, .. } => summary.sources += 1,
            }
            on_step(operation);
        }
        info!(
            "Created {} directories, copied {} assets and {} source files",
            summary.directories, summary.assets, summary.sources
        );
        Ok(summary)
    }

    /// Plans and executes a full run.
    pub fn run(&self) -> Result<Summary> {
        let plan = self.plan()?;
        self.execute(&plan, |_| {})
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.options.base_dir.join(path)
    }

    fn apply(&self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::CreateDir { target } => {
                let abs_target = self.resolve(target);
                if target == Path::new(OUTPUT_DIR) && abs_target.exists() {
                    return Err(Error::PreexistingDestination { path: abs_target });
                }
                debug!("Creating directory: {}", abs_target.display());
                fs::create_dir(&abs_target).map_err(Error::IoError)
            }
            Operation::Copy { source, target, kind } => {
                let abs_source = self.resolve(source);
                let abs_target = self.resolve(target);
                match kind {
                    CopyKind::Asset if !abs_source.is_file() => {
                        return Err(Error::MissingTemplateAsset { path: abs_source });
                    }
                    CopyKind::Source if !abs_target.parent().is_some_and(Path::is_dir) => {
                        return Err(Error::MissingDestinationParent {
                            source_path: abs_source,
                            target: abs_target,
                        });
                    }
                    _ => {}
                }
                debug!("Copying file: {} -> {}", abs_source.display(), abs_target.display());
                fs::copy(&abs_source, &abs_target).map(|_| ()).map_err(Error::IoError)
            }
        }
    }
}
