//! The get command

use vrb_core::BuildConfiguration;

use crate::cli::Field;
use crate::context::BuildContext;
use crate::error::{CliError, Result};

/// Print one resolved value of one component
pub fn run_get(context: &BuildContext, component: &str, field: Field) -> Result<()> {
    let config = context.load()?;
    println!("{}", field_value(&config, component, field)?);
    Ok(())
}

fn field_value(config: &BuildConfiguration, component: &str, field: Field) -> Result<String> {
    let resolved = config.component(component).ok_or_else(|| {
        let known: Vec<&str> = config.components().iter().map(|c| c.name.as_str()).collect();
        CliError::user(format!(
            "Unknown component '{}'. Known components: {}",
            component,
            known.join(", ")
        ))
    })?;

    let descriptor = &resolved.descriptor;
    let value = match field {
        Field::Version => descriptor.version.clone(),
        Field::Revision => descriptor.revision.clone().ok_or_else(|| {
            CliError::user(format!("Component '{component}' has no revision"))
        })?,
        Field::CdnPath => descriptor.cdn_path.clone(),
        Field::Url => resolved.asset_url(),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrb_test_utils::{TestProject, fixtures};

    fn sample_config() -> BuildConfiguration {
        let project = TestProject::with_sample_package();
        BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env()
            .load()
            .unwrap()
    }

    #[test]
    fn test_field_values() {
        let config = sample_config();
        assert_eq!(
            field_value(&config, "oraclejet", Field::Version).unwrap(),
            fixtures::ORACLEJET_LABEL
        );
        assert_eq!(
            field_value(&config, "oraclejet", Field::Revision).unwrap(),
            fixtures::ORACLEJET_REVISION
        );
        assert_eq!(
            field_value(&config, "boss", Field::CdnPath).unwrap(),
            "https://static.oracle.com/cdn/boss/"
        );
        assert_eq!(
            field_value(&config, "boss", Field::Url).unwrap(),
            "https://static.oracle.com/cdn/boss/2501.0.7450"
        );
    }

    #[test]
    fn test_missing_revision_is_user_error() {
        let config = sample_config();
        let err = field_value(&config, "ojDyn", Field::Revision).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_unknown_component_lists_known_names() {
        let config = sample_config();
        let err = field_value(&config, "jquery", Field::Version).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("jquery"));
        assert!(message.contains("oraclejet, ojDynamic, ojDyn, telemetry, boss"));
    }
}
