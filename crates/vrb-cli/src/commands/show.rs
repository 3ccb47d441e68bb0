//! The show command

use colored::Colorize;
use vrb_core::BuildConfiguration;

use crate::context::BuildContext;
use crate::error::Result;

/// Display the whole build configuration
pub fn run_show(context: &BuildContext, json: bool) -> Result<()> {
    let config = context.load()?;

    if json {
        println!("{}", config.to_json_pretty()?);
    } else {
        print!("{}", render(&config));
    }
    Ok(())
}

/// Human-readable rendering of the configuration
fn render(config: &BuildConfiguration) -> String {
    let mut out = String::new();
    let release = config.release();

    out.push_str(&format!("{}\n\n", "Build Configuration".bold()));
    out.push_str(&format!("  {:<12} {}\n", "Library:".dimmed(), release.lib_name));
    out.push_str(&format!("  {:<12} {}\n", "Version:".dimmed(), release.version));
    out.push_str(&format!(
        "  {:<12} {}\n",
        "Sprint:".dimmed(),
        release.sprint.as_deref().unwrap_or("(none)")
    ));
    out.push('\n');

    out.push_str(&format!("  {}:\n", "Components".dimmed()));
    for component in config.components() {
        let descriptor = &component.descriptor;
        out.push_str(&format!(
            "    {:<12} {}",
            component.name.green(),
            descriptor.version
        ));
        if let Some(revision) = &descriptor.revision {
            out.push_str(&format!(" ({})", revision.dimmed()));
        }
        out.push('\n');
        out.push_str(&format!("    {:<12} {}\n", "", descriptor.cdn_path.cyan()));
    }
    out.push('\n');

    let workbox = config.workbox();
    out.push_str(&format!(
        "  {:<12} {} {}\n",
        "Workbox:".dimmed(),
        workbox.version.as_deref().unwrap_or("(not installed)"),
        workbox.cdn_path.cyan()
    ));
    out.push_str(&format!(
        "  {:<12} {}\n",
        "Awaiter:".dimmed(),
        config.awaiter_global_name()
    ));
    out.push_str(&format!(
        "  {:<12} {}\n",
        "TSC errors:".dimmed(),
        config.expected_tsc_errors()
    ));

    for key in config.unused_overrides() {
        out.push_str(&format!(
            "\n{} override '{}' is not used by any component\n",
            "warning:".yellow().bold(),
            key
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrb_test_utils::{TestProject, fixtures};

    fn sample_context(overrides: &[&str]) -> (TestProject, BuildContext) {
        let project = TestProject::with_sample_package();
        let overrides: Vec<String> = overrides.iter().map(|s| s.to_string()).collect();
        let context = BuildContext::new(&project.path("package.json"), None, &overrides)
            .unwrap()
            .without_env();
        (project, context)
    }

    #[test]
    fn test_render_lists_components_and_settings() {
        let (_project, context) = sample_context(&[]);
        let rendered = render(&context.load().unwrap());

        for name in ["oraclejet", "ojDynamic", "ojDyn", "telemetry", "boss"] {
            assert!(rendered.contains(name), "missing {name} in:\n{rendered}");
        }
        assert!(rendered.contains(fixtures::ORACLEJET_REVISION));
        assert!(rendered.contains(fixtures::WORKBOX_VERSION));
        assert!(rendered.contains("__awaiterVbrt"));
        assert!(!rendered.contains("warning:"));
    }

    #[test]
    fn test_render_warns_about_unused_overrides() {
        let (_project, context) = sample_context(&["oj-lable=typo"]);
        let rendered = render(&context.load().unwrap());
        assert!(rendered.contains("oj-lable"));
    }

    #[test]
    fn test_show_json() {
        let (_project, context) = sample_context(&[]);
        assert!(run_show(&context, true).is_ok());
    }
}
