// Virtual environment creation via the system Python

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::utils::error::{Result, ScaffoldError};

/// Creates and removes isolated Python environments under a project
/// directory by shelling out to `python -m venv` and `pip`.
///
/// The external tools are black boxes: their exit status is the only
/// signal consumed, no output is parsed and nothing is retried.
pub struct EnvironmentManager {
    python_version: Option<String>,
}

impl EnvironmentManager {
    pub fn new(python_version: Option<String>) -> Self {
        Self { python_version }
    }

    /// Create `<project_dir>/venv` and install the spec's requirements
    /// into it when the spec lists any.
    pub fn create(&self, project_dir: &Path, spec: &Path) -> Result<PathBuf> {
        let venv_path = project_dir.join("venv");
        if venv_path.exists() {
            return Err(ScaffoldError::AlreadyExists(venv_path));
        }

        let python = self.find_python_executable()?;

        let output = Command::new(&python)
            .args(["-m", "venv"])
            .arg(&venv_path)
            .output()
            .map_err(|e| ScaffoldError::EnvironmentTool(format!("failed to run {python}: {e}")))?;

        if !output.status.success() {
            return Err(ScaffoldError::EnvironmentTool(format!(
                "{python} -m venv exited with {}",
                output.status
            )));
        }

        if spec_has_entries(spec)? {
            let venv_python = venv_python_executable(&venv_path);
            let output = Command::new(&venv_python)
                .args(["-m", "pip", "install", "-r"])
                .arg(spec)
                .output()
                .map_err(|e| {
                    ScaffoldError::EnvironmentTool(format!(
                        "failed to run {}: {e}",
                        venv_python.display()
                    ))
                })?;

            if !output.status.success() {
                return Err(ScaffoldError::EnvironmentTool(format!(
                    "pip install -r {} exited with {}",
                    spec.display(),
                    output.status
                )));
            }
        }

        Ok(venv_path)
    }

    /// Remove `<project_dir>/venv`.
    pub fn remove(&self, project_dir: &Path) -> Result<PathBuf> {
        let venv_path = project_dir.join("venv");
        if !venv_path.exists() {
            return Err(ScaffoldError::PathNotFound(venv_path));
        }

        fs::remove_dir_all(&venv_path)?;
        Ok(venv_path)
    }

    /// Version string of the interpreter inside an existing environment,
    /// for `venv info` display.
    pub fn interpreter_version(&self, venv_path: &Path) -> Option<String> {
        let python = venv_python_executable(venv_path);
        let output = Command::new(&python).arg("--version").output().ok()?;

        if output.status.success() {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            None
        }
    }

    /// Find a usable Python executable on the system, preferring one
    /// matching the requested version.
    fn find_python_executable(&self) -> Result<String> {
        let candidates = if let Some(ver) = &self.python_version {
            vec![
                format!("python{ver}"),
                "python3".to_string(),
                "python".to_string(),
            ]
        } else {
            vec!["python3".to_string(), "python".to_string()]
        };

        for candidate in candidates {
            if let Ok(output) = Command::new(&candidate).arg("--version").output() {
                if output.status.success() {
                    return Ok(candidate);
                }
            }
        }

        if let Some(ver) = &self.python_version {
            Err(ScaffoldError::EnvironmentTool(format!(
                "Python {ver} not found on system"
            )))
        } else {
            Err(ScaffoldError::EnvironmentTool(
                "Python not found on system. Please install Python first.".to_string(),
            ))
        }
    }
}

/// Python executable path inside a virtual environment.
pub fn venv_python_executable(venv_path: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        venv_path.join("Scripts").join("python.exe")
    } else {
        venv_path.join("bin").join("python")
    }
}

/// Whether a requirements spec lists anything beyond comments and blank
/// lines.
fn spec_has_entries(spec: &Path) -> Result<bool> {
    let content = fs::read_to_string(spec)?;
    Ok(content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_venv_python_executable_layout() {
        let venv = Path::new("/proj/venv");
        let exe = venv_python_executable(venv);

        if cfg!(target_os = "windows") {
            assert!(exe.ends_with("Scripts/python.exe"));
        } else {
            assert!(exe.ends_with("bin/python"));
        }
    }

    #[test]
    fn test_spec_with_only_comments_has_no_entries() {
        let temp_dir = TempDir::new().unwrap();
        let spec = temp_dir.path().join("requirements.txt");
        fs::write(&spec, "# deps\n\n#   requests>=2.31\n").unwrap();

        assert!(!spec_has_entries(&spec).unwrap());
    }

    #[test]
    fn test_spec_with_requirement_has_entries() {
        let temp_dir = TempDir::new().unwrap();
        let spec = temp_dir.path().join("requirements.txt");
        fs::write(&spec, "# deps\nrequests>=2.31\n").unwrap();

        assert!(spec_has_entries(&spec).unwrap());
    }

    #[test]
    fn test_remove_without_venv() {
        let temp_dir = TempDir::new().unwrap();
        let manager = EnvironmentManager::new(None);

        let result = manager.remove(temp_dir.path());
        assert!(matches!(result, Err(ScaffoldError::PathNotFound(_))));
    }
}
