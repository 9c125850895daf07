// Interactive acquisition of the project name and author

use console::style;
use dialoguer::Input;

use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::check_project_name;

/// How many times the user may enter an invalid project name before the
/// whole acquisition aborts.
pub const MAX_NAME_ATTEMPTS: usize = 3;

/// Ask for a project name, re-prompting on validation failures.
///
/// Each rejected attempt prints the diagnostic for the violated rule.
/// Exhausting the attempt budget is a distinct error from any single
/// validation failure.
pub fn ask_project_name() -> Result<String> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let input: String = Input::new()
            .with_prompt("Project name")
            .allow_empty(false)
            .interact_text()
            .map_err(prompt_error)?;

        let candidate = input.trim().to_string();
        match check_project_name(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(violation) => {
                eprintln!("{} {}", style("Invalid name:").red().bold(), violation);
            }
        }
    }

    Err(ScaffoldError::NameAttemptsExhausted)
}

/// Ask for the author's full name. Empty input is re-prompted by the
/// input widget itself; anything else is accepted as-is.
pub fn ask_author() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Author's full name")
        .allow_empty(false)
        .interact_text()
        .map_err(prompt_error)?;

    Ok(input.trim().to_string())
}

fn prompt_error(err: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::Io(std::io::Error::other(err))
}
