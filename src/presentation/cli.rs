// Command line surface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dashboards", version, about = "Manage dashboards on a dashboard store")]
pub struct Cli {
    /// Extra config file layered over config/dashboards
    #[arg(long, global = true, env = "DASHBOARDS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List dashboards
    List,
    /// Print one dashboard as JSON
    Show { id: String },
    /// Create an empty dashboard
    Create,
    /// Copy a dashboard under "<name> (clone)"
    Clone { id: String },
    /// Delete one or more dashboards
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Write a dashboard to <name>.json in the export directory
    Export { id: String },
    /// Create a dashboard from an exported file
    Import { file: PathBuf },
    /// Give a dashboard a new name
    Rename { id: String, name: String },
}
