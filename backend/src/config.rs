//! Server configuration from command line and environment

use std::net::{IpAddr, SocketAddr};

use advisor_engine::constants::DEFAULT_MAX_PLY;
use advisor_engine::SearchConfig;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Chess move advisor HTTP service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ADVISOR_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "ADVISOR_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Hard recursion ceiling for the search, in plies from the root
    #[arg(long, env = "ADVISOR_MAX_PLY", default_value_t = DEFAULT_MAX_PLY)]
    pub max_ply: usize,

    /// Search without the transposition table
    #[arg(long, env = "ADVISOR_DISABLE_TABLE")]
    pub disable_table: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, env = "ADVISOR_LOG", default_value = "info,backend=debug")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_ply: self.max_ply,
            use_transposition_table: !self.disable_table,
        }
    }
}
