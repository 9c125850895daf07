// Project directory and file materialization

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::models::binding::TemplateBinding;
use crate::models::layout::ProjectLayout;
use crate::models::request::ScaffoldRequest;
use crate::services::environment::EnvironmentManager;
use crate::services::template_store::TemplateStore;
use crate::utils::error::{Result, ScaffoldError};

/// Options for a single [`ProjectScaffolder::create_file`] call.
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    /// Render the file from a template instead of leaving it empty.
    pub use_template: bool,
    /// Bindings for the render; defaults to the request's bindings.
    pub bindings: Option<TemplateBinding>,
    /// Template identity; defaults to `<filename>.template`.
    pub template_name: Option<String>,
    /// Target directory relative to the project root; defaults to the
    /// project root itself.
    pub sub_path: Option<PathBuf>,
}

impl FileOptions {
    /// An empty, untemplated file at the project root.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A file rendered from its default template with default bindings.
    pub fn templated() -> Self {
        Self {
            use_template: true,
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template_name: impl Into<String>) -> Self {
        self.use_template = true;
        self.template_name = Some(template_name.into());
        self
    }

    pub fn in_dir(mut self, sub_path: impl Into<PathBuf>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    pub fn with_bindings(mut self, bindings: TemplateBinding) -> Self {
        self.bindings = Some(bindings);
        self
    }
}

/// Stateful builder that materializes a project: first the project
/// directory, then directories and files inside it, optionally a virtual
/// environment last.
///
/// Every file or directory operation requires the project directory to
/// have been created first. Nothing is rolled back on failure and nothing
/// is deleted except through [`ProjectScaffolder::delete_project`].
pub struct ProjectScaffolder {
    request: ScaffoldRequest,
    templates: TemplateStore,
    project_dir: Option<PathBuf>,
    created: Vec<PathBuf>,
}

impl ProjectScaffolder {
    pub fn new(request: ScaffoldRequest, templates: TemplateStore) -> Self {
        Self {
            request,
            templates,
            project_dir: None,
            created: Vec::new(),
        }
    }

    pub fn request(&self) -> &ScaffoldRequest {
        &self.request
    }

    /// The project directory, once created.
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir.as_deref()
    }

    /// Project-relative paths of the files created so far, in creation
    /// order.
    pub fn created_files(&self) -> &[PathBuf] {
        &self.created
    }

    /// Create (or adopt) the project directory under the base path.
    ///
    /// A pre-existing directory is success, not a collision; it is logged
    /// and recorded as the project directory. Only an I/O failure (the
    /// base path vanished underneath us) propagates.
    pub fn create_project_dir(&mut self) -> Result<PathBuf> {
        let project_dir = self.request.project_dir();

        if project_dir.exists() {
            eprintln!("Project directory already exists at {}", project_dir.display());
        } else {
            fs::create_dir(&project_dir)?;
        }

        self.project_dir = Some(project_dir.clone());
        Ok(project_dir)
    }

    /// Resolve and gate a target inside the project directory.
    ///
    /// Requires the project directory to be set and existing. `sub_path`
    /// is joined under it (default: the project directory itself) and
    /// must already exist as a directory. With `filename`, the target
    /// file must not already exist. Creates nothing.
    pub fn resolve_target(
        &self,
        sub_path: Option<&Path>,
        filename: Option<&str>,
    ) -> Result<PathBuf> {
        let project_dir = self
            .project_dir
            .as_ref()
            .filter(|dir| dir.exists())
            .ok_or(ScaffoldError::NoProjectDirectory)?;

        let target_dir = match sub_path {
            Some(sub) => project_dir.join(sub),
            None => project_dir.clone(),
        };

        if !target_dir.exists() {
            return Err(ScaffoldError::PathNotFound(target_dir));
        }
        if !target_dir.is_dir() {
            return Err(ScaffoldError::NotADirectory(target_dir));
        }

        match filename {
            Some(filename) => {
                let target = target_dir.join(filename);
                if target.exists() {
                    return Err(ScaffoldError::AlreadyExists(target));
                }
                Ok(target)
            }
            None => Ok(target_dir),
        }
    }

    /// Create a directory inside the project. Create-if-absent: an
    /// existing directory of the same name is success.
    pub fn create_dir(&mut self, name: &str, sub_path: Option<&Path>) -> Result<PathBuf> {
        let parent = self.resolve_target(sub_path, None)?;
        let new_dir = parent.join(name);

        if !new_dir.exists() {
            fs::create_dir(&new_dir)?;
        }

        Ok(new_dir)
    }

    /// Create a file inside the project, optionally rendering it from a
    /// named template.
    ///
    /// Unlike directory creation this is NOT idempotent: an existing
    /// target file fails with `AlreadyExists`. The file is first created
    /// empty (the handle closes immediately), then overwritten with the
    /// rendered text when a template is requested. A failed render leaves
    /// the empty file in place; nothing is rolled back.
    pub fn create_file(&mut self, filename: &str, opts: &FileOptions) -> Result<PathBuf> {
        let target = self.resolve_target(opts.sub_path.as_deref(), Some(filename))?;

        File::create(&target)?;

        if opts.use_template {
            let template_name = opts
                .template_name
                .clone()
                .unwrap_or_else(|| format!("{filename}.template"));
            let bindings = match &opts.bindings {
                Some(bindings) => bindings.clone(),
                None => TemplateBinding::defaults(&self.request),
            };

            let rendered = self.templates.render(&template_name, &bindings)?;
            fs::write(&target, rendered)?;
        }

        self.record_created(&target);
        Ok(target)
    }

    /// Materialize an isolated Python environment under the project
    /// directory. Without a spec, `requirements.txt` is taken from the
    /// project or synthesized from its template first.
    pub fn create_environment(
        &mut self,
        spec: Option<&Path>,
        python_version: Option<&str>,
    ) -> Result<PathBuf> {
        let project_dir = self
            .project_dir
            .clone()
            .ok_or(ScaffoldError::NoProjectDirectory)?;

        let spec_path = match spec {
            Some(path) => path.to_path_buf(),
            None => {
                let default_spec = project_dir.join("requirements.txt");
                if default_spec.exists() {
                    default_spec
                } else {
                    self.create_file("requirements.txt", &FileOptions::templated())?
                }
            }
        };

        let manager = EnvironmentManager::new(python_version.map(str::to_string));
        manager.create(&project_dir, &spec_path)
    }

    /// Interpret a layout recipe: project directory, then its
    /// directories, then its files, then optionally the environment.
    pub fn build(
        &mut self,
        layout: ProjectLayout,
        with_venv: bool,
        python_version: Option<&str>,
    ) -> Result<()> {
        self.create_project_dir()?;

        for dir in layout.directories() {
            self.create_dir(dir, None)?;
        }

        let module_name = self.request.module_name();
        for planned in layout.planned_files(&module_name) {
            let opts = FileOptions {
                use_template: true,
                bindings: None,
                template_name: planned.template_name,
                sub_path: planned.sub_path,
            };
            self.create_file(&planned.name, &opts)?;
        }

        if with_venv {
            self.create_environment(None, python_version)?;
        }

        Ok(())
    }

    /// Delete the whole project directory tree. Explicit operation only;
    /// no other call removes anything. Resets the scaffolder back to the
    /// pre-directory stage.
    pub fn delete_project(&mut self) -> Result<()> {
        let project_dir = self
            .project_dir
            .take()
            .ok_or(ScaffoldError::NoProjectDirectory)?;

        if project_dir.exists() {
            fs::remove_dir_all(&project_dir)?;
        }

        self.created.clear();
        Ok(())
    }

    fn record_created(&mut self, path: &Path) {
        let relative = self
            .project_dir
            .as_ref()
            .and_then(|dir| path.strip_prefix(dir).ok())
            .unwrap_or(path);
        self.created.push(relative.to_path_buf());
    }
}
