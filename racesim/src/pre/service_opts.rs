use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// PersistMode determines how often a race is written to the store during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PersistMode {
    /// Write the race after every tick
    #[default]
    EveryTick,
    /// Write the race once the winner is decided
    OnFinish,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "RS-RACE",
    about = "An HTTP service for time-discrete races written in Rust"
)]
pub struct ServiceOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging (prints every simulated tick)
    #[clap(short, long)]
    pub debug: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set the address the service binds to
    #[clap(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Set the port the service listens on
    #[clap(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Set path to the JSON file the races are stored in
    #[clap(value_parser, long, env = "RACE_DB_PATH", default_value = "race_data.json")]
    pub db_path: PathBuf,

    /// Set how often a race is persisted during a simulation
    #[clap(value_enum, long, env = "RACE_PERSIST_MODE", default_value = "every-tick")]
    pub persist_mode: PersistMode,
}

impl ServiceOpts {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
