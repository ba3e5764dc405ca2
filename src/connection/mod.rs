// src/connection/mod.rs

//! A minimal asynchronous connection to a SpinelDB-compatible store: one
//! command out, one reply back. Connection pooling, reconnection, and
//! pipelining are deliberately out of scope; callers that need them bring
//! their own `RawCommand` implementation.

use crate::config::ClientConfig;
use crate::core::client::RawCommand;
use crate::core::protocol::{RespFrame, RespFrameCodec, RespValue};
use crate::core::JsonClientError;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

/// A single TCP connection to the store, framing commands and replies with
/// the RESP codec.
#[derive(Debug)]
pub struct StoreConnection {
    stream: TcpStream,
    codec: RespFrameCodec,
    read_buf: BytesMut,
    read_timeout: Duration,
}

impl StoreConnection {
    /// Attempts to connect to the configured address within the configured
    /// connect timeout.
    pub async fn connect(config: &ClientConfig) -> Result<Self, JsonClientError> {
        let connect_fut = TcpStream::connect(config.addr.as_str());
        let stream = tokio::time::timeout(config.connect_timeout, connect_fut)
            .await
            .map_err(|_| JsonClientError::Timeout)??;
        debug!(addr = %config.addr, "connected to store");
        Ok(Self {
            stream,
            codec: RespFrameCodec,
            read_buf: BytesMut::with_capacity(4096),
            read_timeout: config.read_timeout,
        })
    }

    /// Sends a command frame and waits for a single reply frame.
    pub async fn send_and_receive(
        &mut self,
        frame: RespFrame,
    ) -> Result<RespFrame, JsonClientError> {
        // 1. Encode the command frame into a byte buffer.
        let mut write_buf = BytesMut::new();
        self.codec.encode(frame, &mut write_buf)?;

        // 2. Send the encoded command to the store.
        self.stream.write_all(&write_buf).await?;

        // 3. Loop reading until one complete reply frame decodes.
        loop {
            if let Some(reply) = self.codec.decode(&mut self.read_buf)? {
                return Ok(reply);
            }
            let read_fut = self.stream.read_buf(&mut self.read_buf);
            match tokio::time::timeout(self.read_timeout, read_fut).await {
                Ok(Ok(0)) => return Err(JsonClientError::ConnectionClosed),
                Ok(Ok(n)) => trace!(bytes = n, "read reply bytes"),
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => return Err(JsonClientError::Timeout),
            }
        }
    }
}

#[async_trait]
impl RawCommand for StoreConnection {
    /// Issues one raw command. An error reply from the store surfaces as
    /// `CommandError`, unchanged; every other reply shape passes through.
    async fn raw_command(&mut self, tokens: Vec<Bytes>) -> Result<RespValue, JsonClientError> {
        let reply = self.send_and_receive(RespFrame::from_tokens(tokens)).await?;
        match RespValue::from(reply) {
            RespValue::Error(e) => Err(JsonClientError::CommandError(e)),
            value => Ok(value),
        }
    }
}
