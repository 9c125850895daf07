// Named template lookup and rendering

use std::fs;
use std::path::PathBuf;

use handlebars::Handlebars;

use crate::models::binding::TemplateBinding;
use crate::utils::error::{Result, ScaffoldError};

/// Built-in template set, compiled into the binary. An override directory
/// can shadow any of these, or add new names.
const README_MD: &str = r#"# {{ project_name }}
Welcome to {{ project_name }}!


Created by {{ author_name }}."#;

const TODO_MD: &str = r#"### TODO list for {{ project_name }}

- [ ] Flesh out the README.
- [ ] Add dependencies to requirements.txt.
- [ ] Start writing code.
"#;

const LICENSE: &str = r#"MIT License

Copyright (c) {{ year }} {{ author_name }}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const GITIGNORE: &str = r#"# Byte-compiled / cache
__pycache__/
*.py[cod]

# Environments
venv/
env/
.env

# Distribution / packaging
build/
dist/
*.egg-info/

# Editors
.idea/
.vscode/
"#;

const SETUP_PY: &str = r#"from setuptools import find_packages, setup

setup(
    name='{{ project_name }}',
    version='0.1.0',
    author='{{ author_name }}',
    packages=find_packages(),
)
"#;

const MAIN_PY: &str = r#""""{{ project_name }} entry point."""


def main():
    print('Hello from {{ project_name }}!')


if __name__ == '__main__':
    main()
"#;

const TEST_MAIN_PY: &str = r#""""Tests for {{ project_name }}."""


def test_smoke():
    assert True
"#;

const REQUIREMENTS_TXT: &str = r#"# Python dependencies for {{ project_name }}
# One requirement per line, e.g.
#   requests>=2.31
"#;

const NOTEBOOK_IPYNB: &str = r#"{
 "cells": [],
 "metadata": {
  "kernelspec": {
   "display_name": "Python 3",
   "language": "python",
   "name": "python3"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 5
}
"#;

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "README.md.template" => Some(README_MD),
        "TODO.md.template" => Some(TODO_MD),
        "LICENSE.template" => Some(LICENSE),
        ".gitignore.template" => Some(GITIGNORE),
        "setup.py.template" => Some(SETUP_PY),
        "main.py.template" => Some(MAIN_PY),
        "test_main.py.template" => Some(TEST_MAIN_PY),
        "requirements.txt.template" => Some(REQUIREMENTS_TXT),
        "notebook.ipynb.template" => Some(NOTEBOOK_IPYNB),
        _ => None,
    }
}

/// Source of named `{{ key }}` templates.
///
/// Lookup goes to the override directory first (when configured), then to
/// the built-in set. Rendering runs in strict mode: a placeholder with no
/// binding is an error, never a silent blank.
pub struct TemplateStore {
    override_dir: Option<PathBuf>,
    handlebars: Handlebars<'static>,
}

impl TemplateStore {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        let mut handlebars = Handlebars::new();

        // Generated files are code and prose, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self {
            override_dir,
            handlebars,
        }
    }

    /// Fetch the raw text of a named template.
    pub fn source(&self, name: &str) -> Result<String> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            if path.exists() {
                return fs::read_to_string(&path).map_err(ScaffoldError::Io);
            }
        }

        builtin(name)
            .map(str::to_string)
            .ok_or_else(|| ScaffoldError::TemplateNotFound(name.to_string()))
    }

    /// Render a named template against a binding map.
    pub fn render(&self, name: &str, bindings: &TemplateBinding) -> Result<String> {
        let source = self.source(name)?;
        let rendered = self.handlebars.render_template(&source, bindings.values())?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bindings() -> TemplateBinding {
        let mut bindings = TemplateBinding::new();
        bindings.set("project_name", "test");
        bindings.set("author_name", "Raj Dholakia");
        bindings.set("year", "2026");
        bindings
    }

    #[test]
    fn test_canonical_readme_rendering() {
        let store = TemplateStore::new(None);
        let rendered = store.render("README.md.template", &bindings()).unwrap();

        assert_eq!(
            rendered,
            "# test\nWelcome to test!\n\n\nCreated by Raj Dholakia."
        );
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_unknown_template_name() {
        let store = TemplateStore::new(None);
        let result = store.render("nonexistent.template", &bindings());

        assert!(matches!(result, Err(ScaffoldError::TemplateNotFound(_))));
    }

    #[test]
    fn test_unresolved_placeholder_is_an_error() {
        let store = TemplateStore::new(None);
        let mut incomplete = TemplateBinding::new();
        incomplete.set("project_name", "test");

        // README also needs author_name; strict mode must refuse.
        let result = store.render("README.md.template", &incomplete);
        assert!(matches!(result, Err(ScaffoldError::TemplateRender(_))));
    }

    #[test]
    fn test_override_directory_shadows_builtin() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("README.md.template"),
            "Custom for {{ project_name }}",
        )
        .unwrap();

        let store = TemplateStore::new(Some(temp_dir.path().to_path_buf()));
        let rendered = store.render("README.md.template", &bindings()).unwrap();
        assert_eq!(rendered, "Custom for test");
    }

    #[test]
    fn test_override_directory_adds_new_names() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("extra.template"), "by {{ author_name }}").unwrap();

        let store = TemplateStore::new(Some(temp_dir.path().to_path_buf()));
        let rendered = store.render("extra.template", &bindings()).unwrap();
        assert_eq!(rendered, "by Raj Dholakia");
    }

    #[test]
    fn test_license_renders_with_default_binding_keys() {
        let store = TemplateStore::new(None);
        let rendered = store.render("LICENSE.template", &bindings()).unwrap();

        assert!(rendered.contains("Copyright (c) 2026 Raj Dholakia"));
    }

    #[test]
    fn test_every_builtin_renders_under_strict_mode() {
        let store = TemplateStore::new(None);
        for name in [
            "README.md.template",
            "TODO.md.template",
            "LICENSE.template",
            ".gitignore.template",
            "setup.py.template",
            "main.py.template",
            "test_main.py.template",
            "requirements.txt.template",
            "notebook.ipynb.template",
        ] {
            assert!(
                store.render(name, &bindings()).is_ok(),
                "builtin {name} failed to render"
            );
        }
    }
}
