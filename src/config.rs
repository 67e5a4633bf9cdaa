use std::time::Duration;

/// Default bind address: loopback, port 5012.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5012";
/// Default cap on concurrently handled connections.
pub const DEFAULT_MAX_CONNECTIONS: usize = 64;
/// Default seconds granted to the single request read.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub max_connections: usize,
    pub read_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let read_timeout = std::env::var("READ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS));

        Self {
            listen_addr,
            max_connections,
            read_timeout,
        }
    }
}
