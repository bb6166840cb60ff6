//! Runtime configuration
//!
//! Every option can be passed on the command line or through the
//! environment, e.g. `RELAY_HOST=smtp.gmail.com`.

use clap::Parser;
use std::{fmt, net::SocketAddr, time::Duration};

/// Command-line and environment configuration for the service
#[derive(Clone, Parser)]
#[command(name = "grocery-list", version, about = "Build a grocery list and text it to a phone")]
pub struct Config {
    /// Mail relay hostname
    #[arg(long, env = "RELAY_HOST")]
    pub relay_host: String,

    /// Mail relay port (STARTTLS)
    #[arg(long, env = "RELAY_PORT", default_value_t = 587)]
    pub relay_port: u16,

    /// Account used as sender and for relay login
    #[arg(long, env = "SENDER_ADDRESS")]
    pub sender_address: String,

    /// Password or app token for the sender account
    #[arg(long, env = "SENDER_CREDENTIAL", hide_env_values = true)]
    pub sender_credential: String,

    /// Seconds to wait on the relay before giving up
    #[arg(long, env = "RELAY_TIMEOUT_SECS", default_value_t = 30)]
    pub relay_timeout_secs: u64,

    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: SocketAddr,
}

impl Config {
    /// The subset of settings the delivery step needs.
    pub fn relay(&self) -> RelayConfig {
        RelayConfig {
            host: self.relay_host.clone(),
            port: self.relay_port,
            sender_address: self.sender_address.clone(),
            sender_credential: self.sender_credential.clone(),
            timeout: Duration::from_secs(self.relay_timeout_secs),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("relay_host", &self.relay_host)
            .field("relay_port", &self.relay_port)
            .field("sender_address", &self.sender_address)
            .field("sender_credential", &"<redacted>")
            .field("relay_timeout_secs", &self.relay_timeout_secs)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

/// Connection settings for the outbound mail relay
#[derive(Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub sender_address: String,
    pub sender_credential: String,
    pub timeout: Duration,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("sender_address", &self.sender_address)
            .field("sender_credential", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
