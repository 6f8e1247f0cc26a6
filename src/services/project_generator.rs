use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::models::{ProjectFile, ProjectSpec, TemplateConfig};
use crate::services::templates::render_project_files;
use crate::utils::error::{PyboxError, Result};

/// How generated files reach the target directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the target directory and write each file into it in turn.
    /// A failure part-way leaves the files written so far in place.
    #[default]
    Direct,
    /// Write everything into a staging directory next to the target, then
    /// rename it into place. The target either appears complete or not at all.
    ///
    /// The target is re-checked just before the rename, but the two steps are
    /// not atomic. On Unix `rename` replaces an empty directory, so one created
    /// at the target inside that window is silently overwritten.
    Staged,
}

/// Creates a new project directory from a validated [`ProjectSpec`]
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    spec: ProjectSpec,
    config: TemplateConfig,
    write_mode: WriteMode,
}

impl ProjectGenerator {
    /// Validate the inputs and build a generator with default templates
    pub fn new(name: impl Into<String>, path: impl Into<String>, include_handler: bool) -> Result<Self> {
        Ok(Self::from_spec(ProjectSpec::new(name, path, include_handler)?))
    }

    pub fn from_spec(spec: ProjectSpec) -> Self {
        Self {
            spec,
            config: TemplateConfig::default(),
            write_mode: WriteMode::default(),
        }
    }

    /// Replace the template constants
    pub fn with_config(mut self, config: TemplateConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub const fn spec(&self) -> &ProjectSpec {
        &self.spec
    }

    pub const fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Create the project directory and its files.
    ///
    /// Fails with [`PyboxError::AlreadyExists`] if anything is already at the
    /// target path; in that case nothing is written. Returns the paths of the
    /// written files in write order.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let target = self.spec.full_path();

        info!(
            project = self.spec.name(),
            path = %target.display(),
            lambda_handler = self.spec.include_handler(),
            mode = ?self.write_mode,
            "Generating project"
        );

        ensure_target_absent(target)?;

        let files = render_project_files(&self.spec, &self.config);

        let written = match self.write_mode {
            WriteMode::Direct => {
                create_project_dir(target)?;
                write_files(target, &files)?
            }
            WriteMode::Staged => self.generate_staged(&files)?,
        };

        info!(project = self.spec.name(), files = written.len(), "Project generated");
        Ok(written)
    }

    fn generate_staged(&self, files: &[ProjectFile]) -> Result<Vec<PathBuf>> {
        let target = self.spec.full_path();

        // Staging lives in the base directory so the final rename never
        // crosses a filesystem boundary
        let staging = tempfile::Builder::new()
            .prefix(".pybox-")
            .tempdir_in(self.spec.base_path())?;
        let staged_dir = staging.path().join(self.spec.name());
        debug!(path = %staged_dir.display(), "Staging project");

        let result = create_project_dir(&staged_dir)
            .and_then(|()| write_files(&staged_dir, files))
            .and_then(|_| ensure_target_absent(target))
            .and_then(|()| fs::rename(&staged_dir, target).map_err(PyboxError::from));

        if let Err(err) = result {
            warn!(path = %staging.path().display(), error = %err, "Discarding staged project");
            return Err(err);
        }

        // `staging` is now empty and removed on drop
        Ok(files.iter().map(|file| target.join(&file.file_name)).collect())
    }
}

/// Anything at `path`, including a dangling symlink, counts as existing
fn ensure_target_absent(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(PyboxError::AlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Non-recursive: the parent directory must already exist
fn create_project_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|err| {
        if err.kind() == ErrorKind::AlreadyExists {
            PyboxError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            PyboxError::IoError(err)
        }
    })?;
    debug!(path = %path.display(), "Created directory");
    Ok(())
}

fn write_files(dir: &Path, files: &[ProjectFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.contents)?;
        debug!(kind = %file.kind, path = %path.display(), bytes = file.contents.len(), "Wrote file");
        written.push(path);
    }

    Ok(written)
}
