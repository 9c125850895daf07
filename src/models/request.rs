use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::check_project_name;

/// Immutable description of a project to scaffold: where to create it,
/// what to call it, and who wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    /// Directory the project directory is created under.
    pub base_path: PathBuf,
    /// Validated project name.
    pub project_name: String,
    /// Author's full name, substituted into templates.
    pub author: String,
}

impl ScaffoldRequest {
    /// Build a request, enforcing the construction-time invariants: the
    /// base path must exist and be a directory, and the project name must
    /// pass the naming rules.
    pub fn new(
        base_path: impl Into<PathBuf>,
        project_name: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self> {
        let base_path = base_path.into();

        if !base_path.exists() {
            return Err(ScaffoldError::PathNotFound(base_path));
        }
        if !base_path.is_dir() {
            return Err(ScaffoldError::NotADirectory(base_path));
        }

        let project_name = project_name.into();
        check_project_name(&project_name)?;

        Ok(Self {
            base_path,
            project_name,
            author: author.into(),
        })
    }

    /// Project name with hyphens mapped to underscores, usable as a
    /// Python module file name.
    pub fn module_name(&self) -> String {
        self.project_name.replace('-', "_")
    }

    /// The directory this request resolves to once created.
    pub fn project_dir(&self) -> PathBuf {
        self.base_path.join(&self.project_name)
    }
}
