use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_STATIC_DIR};
use commands::{serve, summary};

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "SalesBoard dashboard server and reporting tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Serves the compiled frontend bundle. Paths that do not match a file
    /// fall back to index.html so the client-side routes (/ and /sales)
    /// survive a reload.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory holding the compiled frontend bundle (index.html, wasm, js)
        #[arg(short, long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },
    /// Print the dashboard figures and the low-revenue advisory
    Summary {
        /// Forecast months below this amount raise the advisory
        ///
        /// Defaults to 1000000.
        #[arg(short, long)]
        threshold: Option<Decimal>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir } => {
                serve(&bind_address, static_dir).await?;
            }
            Commands::Summary { threshold } => {
                summary(threshold)?;
            }
        }
        Ok(())
    }
}
