//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::ServerConfig;
use crate::content::ContentMode;

#[derive(Debug, Parser)]
#[command(name = "import-fixture-server")]
#[command(about = "Answers every POST with a fixed CSV or SQL import payload", long_about = None)]
pub struct Cli {
    /// HTTP listening port [default: 1709]
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve the SQL script instead of the CSV sample
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub sql: Option<bool>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlay explicitly supplied flags onto `config`.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(sql) = self.sql {
            config.content.mode = ContentMode::from_sql_flag(sql);
        }
    }
}
