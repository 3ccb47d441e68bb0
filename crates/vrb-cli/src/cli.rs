//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve component versions and CDN paths for the visual runtime build
#[derive(Parser, Debug)]
#[command(name = "vrb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the package descriptor
    #[arg(long, global = true, default_value = "package.json", env = "VRB_MANIFEST")]
    pub manifest: PathBuf,

    /// Path to the build config file (defaults to vrb.toml next to the manifest)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override a value, e.g. --set oj-label=v15.0.0 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the resolved configuration of every component
    ///
    /// Prints one pretty-printed descriptor per component.
    ///
    /// Examples:
    ///   vrb list-params
    ///   vrb list-params --set oj-cdn=https://mirror.example.com/jet/
    ListParams,

    /// Show the whole build configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print a single resolved value
    ///
    /// Examples:
    ///   vrb get oraclejet
    ///   vrb get ojDynamic --field url
    Get {
        /// Component name (e.g. oraclejet, ojDynamic, boss)
        component: String,

        /// Which value to print
        #[arg(short, long, value_enum, default_value_t = Field::Version)]
        field: Field,
    },

    /// Resolve the configuration and report whether it is valid
    Check,
}

/// Descriptor field selectable with `vrb get --field`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    Revision,
    CdnPath,
    /// CDN path followed by the version
    Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_params() {
        let cli = Cli::try_parse_from(["vrb", "list-params"]).unwrap();
        assert_eq!(cli.command, Some(Commands::ListParams));
        assert_eq!(cli.manifest, PathBuf::from("package.json"));
    }

    #[test]
    fn test_parse_repeated_overrides_after_command() {
        let cli = Cli::try_parse_from([
            "vrb",
            "show",
            "--set",
            "oj-label=v15.0.0",
            "--set",
            "oj-cdn=",
        ])
        .unwrap();
        assert_eq!(cli.overrides, vec!["oj-label=v15.0.0", "oj-cdn="]);
        assert_eq!(cli.command, Some(Commands::Show { json: false }));
    }

    #[test]
    fn test_parse_get_field() {
        let cli = Cli::try_parse_from(["vrb", "get", "ojDyn", "--field", "cdn-path"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Get {
                component: "ojDyn".to_string(),
                field: Field::CdnPath,
            })
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Cli::try_parse_from(["vrb", "get", "ojDyn", "--field", "hash"]).is_err());
    }
}
