//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose and the target overrides) are
//!   inherited by all subcommands
//! - `--apps` takes a comma-separated list of ids, or `all`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{AppSelector, TargetOverrides};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// nua-deploy - build and deploy Nua applications
#[derive(Parser, Debug)]
#[command(name = "nua-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Target host ("localhost" runs everything locally)
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,

    /// Base domain for deployed sites (defaults to the host)
    #[arg(long, global = true, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Directory containing one sub-directory per application
    #[arg(long, global = true, value_name = "PATH")]
    pub apps_root: Option<PathBuf>,

    /// Settings file (default: ./nua-deploy.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Target fields given explicitly on the command line
    pub fn target_overrides(&self) -> TargetOverrides {
        TargetOverrides {
            host: self.host.clone(),
            domain: self.domain.clone(),
            apps_root: self.apps_root.clone(),
        }
    }
}

/// Application selection shared by subcommands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppsArg {
    /// Comma-separated application ids, or "all"
    #[arg(long, value_name = "IDS")]
    pub apps: Option<String>,
}

impl AppsArg {
    pub fn selector(&self) -> AppSelector {
        AppSelector::parse(self.apps.as_deref())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build application images
    Build {
        #[command(flatten)]
        apps: AppsArg,
    },

    /// Write the deployment document and run the orchestrator
    Deploy {
        #[command(flatten)]
        apps: AppsArg,

        /// Show what would be done without writing or executing
        #[arg(long)]
        dry_run: bool,
    },

    /// Build, then deploy
    All {
        #[command(flatten)]
        apps: AppsArg,

        /// Show what would be done without writing or executing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the deployment document without deploying
    Render {
        #[command(flatten)]
        apps: AppsArg,
    },

    /// List known applications
    Apps,
}

impl Commands {
    /// Subcommand name, as used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            Commands::Deploy { .. } => "deploy",
            Commands::All { .. } => "all",
            Commands::Render { .. } => "render",
            Commands::Apps => "apps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["nua-deploy"]).is_err());
    }

    #[test]
    fn test_cli_parse_build_defaults_to_all() {
        let cli = Cli::try_parse_from(["nua-deploy", "build"]).unwrap();
        if let Commands::Build { apps } = cli.command {
            assert_eq!(apps.selector(), AppSelector::All);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_subset() {
        let cli =
            Cli::try_parse_from(["nua-deploy", "deploy", "--apps", "galene, ackee", "--dry-run"])
                .unwrap();
        if let Commands::Deploy { apps, dry_run } = cli.command {
            assert!(dry_run);
            assert_eq!(apps.selector(), AppSelector::from_ids(["galene", "ackee"]));
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_all_keyword() {
        let cli = Cli::try_parse_from(["nua-deploy", "all", "--apps", "all"]).unwrap();
        if let Commands::All { apps, dry_run } = cli.command {
            assert!(!dry_run);
            assert_eq!(apps.selector(), AppSelector::All);
        } else {
            panic!("Expected All command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "nua-deploy",
            "render",
            "--host",
            "localhost",
            "--domain",
            "example.com",
            "--apps-root",
            "/srv/apps",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.target_overrides(),
            TargetOverrides {
                host: Some("localhost".to_string()),
                domain: Some("example.com".to_string()),
                apps_root: Some(PathBuf::from("/srv/apps")),
            }
        );
    }

    #[test]
    fn test_cli_parse_color_and_config() {
        let cli = Cli::try_parse_from([
            "nua-deploy",
            "--color",
            "never",
            "--config",
            "ops/nua-deploy.toml",
            "apps",
        ])
        .unwrap();

        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.config, Some(PathBuf::from("ops/nua-deploy.toml")));
        assert!(matches!(cli.command, Commands::Apps));
    }

    #[test]
    fn test_cli_rejects_dry_run_on_build() {
        assert!(Cli::try_parse_from(["nua-deploy", "build", "--dry-run"]).is_err());
    }
}
