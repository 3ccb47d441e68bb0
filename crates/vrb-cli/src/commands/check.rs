//! The check command

use colored::Colorize;

use crate::context::BuildContext;
use crate::error::Result;

/// Resolve the configuration and report the outcome
///
/// Any resolution error is returned and ends the process with a non-zero
/// exit code; unused overrides are only warnings.
pub fn run_check(context: &BuildContext) -> Result<()> {
    let config = context.load()?;

    for key in config.unused_overrides() {
        eprintln!(
            "{} override '{}' is not used by any component",
            "warning:".yellow().bold(),
            key
        );
    }

    println!(
        "{} Configuration is valid ({} components, release {})",
        "OK".green().bold(),
        config.components().len(),
        config.release().version
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrb_test_utils::{TestProject, fixtures};

    #[test]
    fn test_check_valid_project() {
        let project = TestProject::with_sample_package();
        let context = BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env();
        assert!(run_check(&context).is_ok());
    }

    #[test]
    fn test_check_invalid_version() {
        let project = TestProject::new();
        project.write_package(&fixtures::package_json_with_version("not-a-version"));
        let context = BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env();

        let err = run_check(&context).unwrap_err();
        assert!(err.to_string().contains("not-a-version"));
    }
}
