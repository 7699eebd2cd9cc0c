mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "School activity signups — serve the roster API and inspect activity catalogs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the activities HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "ROSTER_PORT", default_value = "8000")]
        port: u16,

        /// YAML activity catalog (default: built-in Mergington High School catalog)
        #[arg(long, env = "ROSTER_CATALOG")]
        catalog: Option<PathBuf>,

        /// Directory served under /static; `/` redirects to its index.html
        #[arg(long, env = "ROSTER_STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Open a browser once the server is listening
        #[arg(long)]
        open: bool,
    },

    /// List activities and their enrollment
    Activities {
        /// YAML activity catalog (default: built-in Mergington High School catalog)
        #[arg(long, env = "ROSTER_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file
    Check {
        /// Path to the YAML catalog
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
            static_dir,
            open,
        } => cmd::serve::run(
            catalog.as_deref(),
            roster_server::ServerConfig {
                host,
                port,
                static_dir,
                open_browser: open,
            },
        ),
        Commands::Activities { catalog } => cmd::activities::run(catalog.as_deref(), cli.json),
        Commands::Check { path } => cmd::check::run(&path, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
