use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::board::routes::Router;
use crate::config::Config;
use crate::http::connection::Connection;

/// A bound listener plus the limits the accept loop enforces.
pub struct Server {
    listener: TcpListener,
    router: Router,
    limit: Arc<Semaphore>,
    read_timeout: Duration,
}

impl Server {
    /// Binds the configured address and logs the startup banner.
    pub async fn bind(cfg: &Config, router: Router) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&cfg.listen_addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            limit: Arc::new(Semaphore::new(cfg.max_connections)),
            read_timeout: cfg.read_timeout,
        })
    }

    /// The address the listener actually bound (relevant when binding
    /// port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the future is dropped.
    ///
    /// A permit is taken before `accept`, so the loop stops accepting once
    /// `max_connections` tasks are in flight. Each connection runs in its
    /// own task; a failed connection is logged there and never stops the
    /// loop or its siblings.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let permit = self.limit.clone().acquire_owned().await?;
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            let router = self.router.clone();
            let read_timeout = self.read_timeout;
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, router, read_timeout);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
                drop(permit);
            });
        }
    }
}
