//! The list-params command

use crate::context::BuildContext;
use crate::error::Result;

/// Print every component descriptor as pretty-printed JSON
pub fn run_list_params(context: &BuildContext) -> Result<()> {
    let config = context.load()?;
    print!("{}", config.listing()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrb_test_utils::TestProject;

    #[test]
    fn test_list_params_with_sample_project() {
        let project = TestProject::with_sample_package();
        let context = BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env();
        assert!(run_list_params(&context).is_ok());
    }

    #[test]
    fn test_list_params_without_manifest() {
        let project = TestProject::new();
        let context = BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env();
        assert!(run_list_params(&context).is_err());
    }
}
