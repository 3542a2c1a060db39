//! Config command implementation.

use super::CliError;
use std::path::Path;
use touchdown::GameConfig;

/// Execute the config command.
///
/// Without `check`, prints the built-in configuration as JSON, ready to be
/// saved and edited. With `check`, validates that file and reports the
/// first bad setting.
///
/// # Errors
///
/// Returns an error if the file is unreadable or invalid.
pub(crate) fn execute(check: Option<&Path>) -> Result<(), CliError> {
    match check {
        Some(path) => {
            let config = super::load_config(Some(path))?;
            println!("{}: ok", path.display());
            if config != GameConfig::default() {
                println!("(differs from the built-in settings)");
            }
        }
        None => println!("{}", GameConfig::default().to_json_string()?),
    }
    Ok(())
}
