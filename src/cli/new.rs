use std::path::PathBuf;

use console::style;
use serde::{Deserialize, Serialize};

use crate::models::layout::ProjectLayout;
use crate::models::request::ScaffoldRequest;
use crate::services::scaffolder::ProjectScaffolder;
use crate::services::template_store::TemplateStore;
use crate::utils::config::UserConfig;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::prompt;
use crate::utils::validation::check_project_name;

/// Scaffold a new project directory with templated boilerplate
#[derive(Debug)]
pub struct NewCommand {
    /// Project name; prompted for interactively when absent
    pub name: Option<String>,
    /// Author's full name; falls back to config, then to a prompt
    pub author: Option<String>,
    /// Base directory the project directory is created under
    pub path: PathBuf,
    /// Canned layout to materialize
    pub layout: ProjectLayout,
    /// Skip the virtual-environment step
    pub no_venv: bool,
    /// Directory of template files overriding the built-in set
    pub templates: Option<PathBuf>,
    /// Output JSON instead of human-readable text
    pub json: bool,
}

/// JSON response format for the new command
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub author: String,
    pub project_dir: String,
    pub layout: ProjectLayout,
    pub files: Vec<String>,
    pub venv: bool,
}

impl NewCommand {
    /// Execute the new command
    pub fn run(&self) -> Result<()> {
        let config = UserConfig::load()?;

        // A name given on the command line is validated once and either
        // accepted or rejected; only the interactive path gets retries.
        let project_name = match &self.name {
            Some(name) => {
                check_project_name(name)?;
                name.clone()
            }
            None => prompt::ask_project_name()?,
        };

        let author = match self.author.clone().or_else(|| config.author.clone()) {
            Some(author) => author,
            None => prompt::ask_author()?,
        };

        let request = ScaffoldRequest::new(&self.path, project_name, author)?;

        if !self.json {
            println!(
                "{} {} {}",
                style("Creating").green().bold(),
                style("project:").bold(),
                style(&request.project_name).cyan().bold()
            );
        }

        let template_dir = self.templates.clone().or(config.template_dir);
        let mut scaffolder = ProjectScaffolder::new(request, TemplateStore::new(template_dir));

        let with_venv = !self.no_venv;
        scaffolder.build(self.layout, with_venv, config.python.as_deref())?;

        if self.json {
            self.print_json(&scaffolder, with_venv)?;
        } else {
            self.print_success(&scaffolder, with_venv);
        }

        Ok(())
    }

    fn print_json(&self, scaffolder: &ProjectScaffolder, venv: bool) -> Result<()> {
        let project_dir = scaffolder
            .project_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();

        let response = NewResponse {
            status: "success".to_string(),
            project_name: scaffolder.request().project_name.clone(),
            author: scaffolder.request().author.clone(),
            project_dir,
            layout: self.layout,
            files: scaffolder
                .created_files()
                .iter()
                .map(|path| path.display().to_string().replace('\\', "/"))
                .collect(),
            venv,
        };

        let json_output = serde_json::to_string_pretty(&response)
            .map_err(|e| ScaffoldError::Config(format!("Failed to serialize JSON response: {e}")))?;

        println!("{json_output}");
        Ok(())
    }

    fn print_success(&self, scaffolder: &ProjectScaffolder, venv: bool) {
        for file in scaffolder.created_files() {
            println!("  {} {}", style("+").green(), file.display());
        }
        if venv {
            println!("  {} venv/", style("+").green());
        }

        println!();
        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("cd {}", scaffolder.request().project_name)).cyan()
        );
        if venv {
            println!("  {} {}", style("$").dim(), style("source venv/bin/activate").cyan());
        }
    }
}
