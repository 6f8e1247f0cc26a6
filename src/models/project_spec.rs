use std::path::{Path, PathBuf};
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_whitespace, validate_relative_name};

/// Validated inputs for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// Project identifier, used verbatim in every generated file
    name: String,
    /// Parent directory the project is created in
    base_path: String,
    /// `base_path` joined with `name`
    full_path: PathBuf,
    /// Generate the Lambda handler variant
    include_handler: bool,
}

impl ProjectSpec {
    /// Validate the raw inputs and derive the target path.
    ///
    /// Nothing touches the filesystem here; an invalid name or path is
    /// rejected before any directory is created.
    pub fn new(name: impl Into<String>, base_path: impl Into<String>, include_handler: bool) -> Result<Self> {
        let name = name.into();
        let base_path = base_path.into();

        validate_no_whitespace(&[("name", name.as_str()), ("path", base_path.as_str())])?;
        validate_relative_name("name", &name)?;

        let full_path = Path::new(&base_path).join(&name);

        Ok(Self {
            name,
            base_path,
            full_path,
            include_handler,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_path(&self) -> &Path {
        Path::new(&self.base_path)
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub const fn include_handler(&self) -> bool {
        self.include_handler
    }
}
