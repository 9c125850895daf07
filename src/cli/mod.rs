// CLI module for command-line interface

pub mod new;
pub mod venv;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::layout::ProjectLayout;
use crate::utils::error::Result;

use self::new::NewCommand;
use self::venv::{VenvCommands, VenvHandler};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "mkproj")]
#[command(about = "A project scaffolding tool that creates templated Python project skeletons")]
#[command(long_about = r#"mkproj creates a ready-to-work-in project directory from a canned
layout: templated boilerplate files (README, TODO, license, packaging
descriptor), a main module and test stub named after the project, and an
optional isolated virtual environment.

Features:
  • Validated project names with interactive re-prompting
  • {{ key }} templates with a per-user override directory
  • Simple and machine-learning project layouts
  • Virtual environment creation via the system Python

Examples:
  mkproj new my-project --author "Raj Dholakia"   Scaffold a simple project
  mkproj new experiment --layout ml               Data-science layout
  mkproj new tool --no-venv                       Skip the environment step
  mkproj venv create                              Create venv in an existing project

For detailed documentation, visit: https://github.com/VesperAkshay/mkproj"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new project directory
    #[command(long_about = r#"Scaffold a new project directory under a base path.

The project name is validated (no leading digit, no spaces, only
letters/digits/'-'/'_', no leading or trailing '-'/'_'). When the name or
author is not supplied on the command line, it is asked for interactively;
an invalid name may be re-entered at most 3 times before the command
aborts.

Examples:
  mkproj new my-app --author "Raj Dholakia"     Simple layout, with venv
  mkproj new my-app --layout ml                 data/, tests/, notebooks/
  mkproj new my-app --no-venv                   Skip environment creation
  mkproj new my-app --path ~/work               Create under ~/work
  mkproj new my-app --json                      Machine-readable output"#)]
    New {
        /// Project name (prompted for when omitted)
        name: Option<String>,

        /// Author's full name (config default, then prompt, when omitted)
        #[arg(long)]
        author: Option<String>,

        /// Base directory to create the project directory under
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Project layout to materialize
        #[arg(long, value_enum, default_value = "simple")]
        layout: ProjectLayout,

        /// Skip virtual environment creation
        #[arg(long)]
        no_venv: bool,

        /// Directory of template files overriding the built-in set
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Manage a project's Python virtual environment
    #[command(long_about = r#"Create and manage the virtual environment of an existing project
directory. The environment lives in <project>/venv and is created by the
system Python; its exit status is the only signal consumed.

Subcommands:
  create    Create a new virtual environment (default action)
  remove    Remove the existing virtual environment
  info      Show information about the current virtual environment

Examples:
  mkproj venv create                    Create venv with defaults
  mkproj venv create --python 3.11      Use a specific Python version
  mkproj venv create --spec reqs.txt    Install from an explicit spec
  mkproj venv remove                    Remove the environment"#)]
    Venv {
        /// Venv subcommand
        #[command(subcommand)]
        command: Option<VenvCommands>,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::New {
                name,
                author,
                path,
                layout,
                no_venv,
                templates,
                json,
            } => {
                let cmd = NewCommand {
                    name,
                    author,
                    path,
                    layout,
                    no_venv,
                    templates,
                    json,
                };
                cmd.run()
            }

            Commands::Venv { command } => {
                let handler = VenvHandler { command };
                handler.execute()
            }
        }
    }
}
