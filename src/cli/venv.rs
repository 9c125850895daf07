use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde_json::json;

use crate::models::binding::TemplateBinding;
use crate::services::environment::{venv_python_executable, EnvironmentManager};
use crate::services::template_store::TemplateStore;
use crate::utils::config::UserConfig;
use crate::utils::error::{Result, ScaffoldError};

/// Virtual environment management commands
#[derive(Debug, Subcommand)]
pub enum VenvCommands {
    /// Create new virtual environment (default)
    Create {
        /// Project directory to create the environment in
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Requirements file; synthesized from a template when absent
        #[arg(long)]
        spec: Option<PathBuf>,
        /// Python version to use
        #[arg(long)]
        python: Option<String>,
        /// Remove an existing venv before creating
        #[arg(long)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an existing virtual environment
    Remove {
        /// Project directory holding the environment
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show virtual environment information
    Info {
        /// Project directory holding the environment
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Main venv command handler
pub struct VenvHandler {
    pub command: Option<VenvCommands>,
}

impl VenvHandler {
    /// Execute the venv command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Some(VenvCommands::Create {
                path,
                spec,
                python,
                force,
                json,
            }) => self.create(path, spec.as_deref(), python.as_deref(), *force, *json),
            Some(VenvCommands::Remove { path, json }) => self.remove(path, *json),
            Some(VenvCommands::Info { path, json }) => self.info(path, *json),
            None => {
                // Default to create
                self.create(Path::new("."), None, None, false, false)
            }
        }
    }

    /// Normalize path for consistent display (always use forward slashes)
    fn normalize_path_display(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    fn check_project_dir(&self, project_dir: &Path) -> Result<()> {
        if !project_dir.exists() {
            return Err(ScaffoldError::PathNotFound(project_dir.to_path_buf()));
        }
        if !project_dir.is_dir() {
            return Err(ScaffoldError::NotADirectory(project_dir.to_path_buf()));
        }
        Ok(())
    }

    /// Create a new virtual environment
    fn create(
        &self,
        project_dir: &Path,
        spec: Option<&Path>,
        python: Option<&str>,
        force: bool,
        json: bool,
    ) -> Result<()> {
        self.check_project_dir(project_dir)?;
        let config = UserConfig::load()?;

        let venv_path = project_dir.join("venv");
        if venv_path.exists() && force {
            fs::remove_dir_all(&venv_path)?;
        }

        let spec_path = match spec {
            Some(path) => path.to_path_buf(),
            None => self.resolve_spec(project_dir, &config)?,
        };

        let python_version = python
            .map(str::to_string)
            .or_else(|| config.python.clone());
        let manager = EnvironmentManager::new(python_version);
        let venv_path = manager.create(project_dir, &spec_path)?;

        if json {
            let response = json!({
                "status": "success",
                "command": "create",
                "venv_path": self.normalize_path_display(&venv_path),
                "spec": self.normalize_path_display(&spec_path),
            });
            println!("{}", serde_json::to_string_pretty(&response)
                .map_err(|e| ScaffoldError::Config(format!("JSON serialization error: {e}")))?);
        } else {
            println!(
                "Created virtual environment at {}",
                self.normalize_path_display(&venv_path)
            );
            println!("Virtual environment ready for use");
        }

        Ok(())
    }

    /// Use the project's requirements file, or synthesize one from the
    /// template source first.
    fn resolve_spec(&self, project_dir: &Path, config: &UserConfig) -> Result<PathBuf> {
        let spec_path = project_dir.join("requirements.txt");
        if spec_path.exists() {
            return Ok(spec_path);
        }

        let project_name = project_dir
            .canonicalize()?
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());

        let store = TemplateStore::new(config.template_dir.clone());
        let mut bindings = TemplateBinding::new();
        bindings.set("project_name", project_name);

        let rendered = store.render("requirements.txt.template", &bindings)?;
        fs::write(&spec_path, rendered)?;
        Ok(spec_path)
    }

    /// Remove the virtual environment
    fn remove(&self, project_dir: &Path, json: bool) -> Result<()> {
        self.check_project_dir(project_dir)?;

        let manager = EnvironmentManager::new(None);
        let removed = manager.remove(project_dir)?;

        if json {
            let response = json!({
                "status": "success",
                "command": "remove",
                "removed_path": self.normalize_path_display(&removed),
            });
            println!("{}", serde_json::to_string_pretty(&response)
                .map_err(|e| ScaffoldError::Config(format!("JSON serialization error: {e}")))?);
        } else {
            println!(
                "Removed virtual environment at {}",
                self.normalize_path_display(&removed)
            );
        }

        Ok(())
    }

    /// Show virtual environment information
    fn info(&self, project_dir: &Path, json: bool) -> Result<()> {
        self.check_project_dir(project_dir)?;

        let venv_path = project_dir.join("venv");
        if !venv_path.exists() {
            return Err(ScaffoldError::PathNotFound(venv_path));
        }

        let manager = EnvironmentManager::new(None);
        let python_exe = venv_python_executable(&venv_path);
        let python_version = manager
            .interpreter_version(&venv_path)
            .unwrap_or_else(|| "Unknown".to_string());

        if json {
            let response = json!({
                "status": "success",
                "command": "info",
                "venv_path": self.normalize_path_display(&venv_path),
                "python_executable": self.normalize_path_display(&python_exe),
                "python_version": python_version,
            });
            println!("{}", serde_json::to_string_pretty(&response)
                .map_err(|e| ScaffoldError::Config(format!("JSON serialization error: {e}")))?);
        } else {
            println!("Python Virtual Environment:");
            println!("  Path: {}", self.normalize_path_display(&venv_path));
            println!("  Python: {python_version}");
        }

        Ok(())
    }
}
