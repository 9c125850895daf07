use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Canned project layouts. A layout is data: a list of directories and a
/// list of planned files, interpreted in order by the scaffolder's
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectLayout {
    /// Flat script project with packaging files.
    Simple,
    /// Data-science layout with data/, tests/ and notebooks/ directories.
    #[value(name = "ml", alias = "machine-learning")]
    MachineLearning,
}

/// One file a layout wants materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedFile {
    /// File name within its target directory.
    pub name: String,
    /// Directory relative to the project root, when not the root itself.
    pub sub_path: Option<PathBuf>,
    /// Explicit template identity; `None` means `<name>.template`.
    pub template_name: Option<String>,
}

impl PlannedFile {
    fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_path: None,
            template_name: None,
        }
    }

    fn from_template(mut self, template: &str) -> Self {
        self.template_name = Some(template.to_string());
        self
    }

    fn under(mut self, dir: &str) -> Self {
        self.sub_path = Some(PathBuf::from(dir));
        self
    }
}

impl ProjectLayout {
    /// Directories to create inside the project root, in creation order.
    pub fn directories(self) -> &'static [&'static str] {
        match self {
            Self::Simple => &[],
            Self::MachineLearning => &["data", "tests", "notebooks"],
        }
    }

    /// Files to materialize, in creation order. `module_name` is the
    /// project name with hyphens mapped to underscores.
    pub fn planned_files(self, module_name: &str) -> Vec<PlannedFile> {
        let mut files = vec![
            PlannedFile::root("README.md"),
            PlannedFile::root("TODO.md"),
            PlannedFile::root("LICENSE"),
            PlannedFile::root(".gitignore"),
        ];

        match self {
            Self::Simple => {
                files.push(PlannedFile::root("setup.py"));
                files.push(
                    PlannedFile::root(format!("{module_name}.py"))
                        .from_template("main.py.template"),
                );
                files.push(
                    PlannedFile::root(format!("test_{module_name}.py"))
                        .from_template("test_main.py.template"),
                );
            }
            Self::MachineLearning => {
                files.push(
                    PlannedFile::root(format!("{module_name}.ipynb"))
                        .under("notebooks")
                        .from_template("notebook.ipynb.template"),
                );
                files.push(
                    PlannedFile::root(format!("test_{module_name}.py"))
                        .under("tests")
                        .from_template("test_main.py.template"),
                );
            }
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_layout_manifest() {
        assert!(ProjectLayout::Simple.directories().is_empty());

        let files = ProjectLayout::Simple.planned_files("my_tool");
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "README.md",
                "TODO.md",
                "LICENSE",
                ".gitignore",
                "setup.py",
                "my_tool.py",
                "test_my_tool.py",
            ]
        );
        assert!(files.iter().all(|f| f.sub_path.is_none()));
    }

    #[test]
    fn test_ml_layout_manifest() {
        assert_eq!(
            ProjectLayout::MachineLearning.directories(),
            &["data", "tests", "notebooks"]
        );

        let files = ProjectLayout::MachineLearning.planned_files("analysis");
        let notebook = files.iter().find(|f| f.name == "analysis.ipynb").unwrap();
        assert_eq!(notebook.sub_path.as_deref(), Some(std::path::Path::new("notebooks")));

        let test_file = files.iter().find(|f| f.name == "test_analysis.py").unwrap();
        assert_eq!(test_file.sub_path.as_deref(), Some(std::path::Path::new("tests")));

        // Common root files only, no packaging descriptor.
        assert!(!files.iter().any(|f| f.name == "setup.py"));
        assert!(files.iter().any(|f| f.name == "README.md"));
    }

    #[test]
    fn test_default_template_identity_is_left_implicit() {
        let files = ProjectLayout::Simple.planned_files("test");
        let readme = files.iter().find(|f| f.name == "README.md").unwrap();
        assert!(readme.template_name.is_none());

        let main = files.iter().find(|f| f.name == "test.py").unwrap();
        assert_eq!(main.template_name.as_deref(), Some("main.py.template"));
    }
}
