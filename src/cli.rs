use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// zeroops - deploy docker-compose apps to a VPS over SSH
#[derive(Parser, Debug)]
#[command(name = "zeroops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output (context list/current, errors)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage SSH targets
    Context {
        #[command(subcommand)]
        action: ContextCommand,
    },

    /// Deploy and manage apps on the current target
    Deploy {
        #[command(subcommand)]
        action: DeployCommand,
    },

    /// Manage nginx site entries on the current target
    Proxy {
        #[command(subcommand)]
        action: ProxyCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContextCommand {
    /// Save a target
    Add {
        name: String,

        /// Target URI, e.g. "host=ssh://user@1.2.3.4"
        #[arg(long)]
        docker: String,

        /// SSH identity file passed to ssh/scp with -i
        #[arg(long)]
        key: Option<String>,
    },

    /// List saved targets
    List,

    /// Select the current target
    Use { name: String },

    /// Show the current target
    Current,

    /// Delete a target
    #[command(alias = "remove")]
    Rm { name: String },
}

#[derive(Subcommand, Debug)]
pub enum DeployCommand {
    /// Render the manifest, upload it with the env file and bring the app up
    Add {
        app: String,

        /// Env file [default: .env]
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Manifest template [default: docker-compose.tpl.yml]
        #[arg(long)]
        template: Option<PathBuf>,

        /// Rendered manifest [default: docker-compose.yml]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fail on placeholders missing from the env file
        #[arg(long)]
        strict: bool,
    },

    /// Show container status
    Status { app: String },

    /// Stop an app and delete its directory
    #[command(alias = "remove")]
    Rm { app: String },

    /// List deployed apps
    List,
}

#[derive(Subcommand, Debug)]
pub enum ProxyCommand {
    /// Upload an nginx site file for an app and reload nginx
    Add {
        app: String,

        /// Local nginx config [default: nginx.conf]
        #[arg(long)]
        conf: Option<PathBuf>,
    },

    /// Print an app's installed site file
    Status { app: String },

    /// List installed site files
    List,

    /// Delete an app's site file and reload nginx
    #[command(alias = "remove")]
    Rm { app: String },
}
