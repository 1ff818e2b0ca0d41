// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Typecode Registry CLI - projects, extensions and typecoded items

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use typecode_registry::commands::{self, extensions::ExtensionArgs, items::ItemArgs, projects::ProjectArgs, Output};
use typecode_registry::config::{self, Config};

#[derive(Parser)]
#[command(name = "typecode-registry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "TYPECODE_REGISTRY_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Registry backend URL override
    #[arg(long, env = "TYPECODE_REGISTRY_BACKEND_URL", global = true)]
    backend_url: Option<String>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Answer "Remove" to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage typecoded items
    Items(ItemArgs),

    /// Manage shared and project extensions
    Extensions(ExtensionArgs),

    /// Manage projects
    Projects(ProjectArgs),

    /// Open a route (/items, /extensions, /projects, /error/<code>)
    Open {
        /// Route path
        route: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key
        key: String,

        /// Value to set (omit to get)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let mut config = Config::load(Some(&config_path))
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    if let Some(url) = &cli.backend_url {
        config.backend_url = url.trim_end_matches('/').to_string();
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = Output {
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Config { key, value } => commands::config::run(&config_path, &config, &key, value),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
        Commands::Items(args) => {
            let mut app = commands::connect(&config, output, cli.yes)?;
            commands::items::run(&mut app, output, args).await
        }
        Commands::Extensions(args) => {
            let mut app = commands::connect(&config, output, cli.yes)?;
            commands::extensions::run(&mut app, output, args).await
        }
        Commands::Projects(args) => {
            let mut app = commands::connect(&config, output, cli.yes)?;
            commands::projects::run(&mut app, output, args).await
        }
        Commands::Open { route } => {
            let mut app = commands::connect(&config, output, cli.yes)?;
            commands::open::run(&mut app, output, &route).await
        }
    }
}
