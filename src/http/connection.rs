use anyhow::Context;
use bytes::BytesMut;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::board::routes::Router;
use crate::http::parser::parse_request;
use crate::http::writer::ResponseWriter;

/// Receive budget: a request is whatever arrives in one read of this size.
pub const RECV_BUDGET: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    router: Router,
    read_timeout: Duration,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Router, read_timeout: Duration) -> Self {
        Self {
            stream,
            router,
            read_timeout,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // One bounded read; there is no loop to assemble requests that are
        // larger than the budget or arrive in several packets. A client
        // that closes without sending yields empty input, which parses as
        // a failure and is answered with 400.
        let mut buf = BytesMut::with_capacity(RECV_BUDGET);
        timeout(self.read_timeout, self.stream.read_buf(&mut buf))
            .await
            .context("read timed out")?
            .context("failed to read request")?;

        // Non-text request data is fatal for this connection; no response
        // is written.
        let text = std::str::from_utf8(&buf).context("non-UTF-8 request data")?;

        let response = self.router.route(parse_request(text)).await?;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        // The stream drops with the connection: one response per
        // connection, then close.
        Ok(())
    }
}
