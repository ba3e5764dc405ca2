// tests/common/mod.rs

//! Shared test doubles: a scripted in-memory `RawCommand` implementation and
//! a scripted TCP peer for exercising the real transport.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use spinel_json::{JsonClientError, RawCommand, RespValue};
use std::collections::VecDeque;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A stand-in for a store connection: hands back queued replies and records
/// every token list it was asked to send.
#[derive(Debug, Default)]
pub struct MockConnection {
    pub sent: Vec<Vec<Bytes>>,
    pub replies: VecDeque<Result<RespValue, JsonClientError>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(mut self, reply: RespValue) -> Self {
        self.replies.push_back(Ok(reply));
        self
    }

    pub fn fail_with(mut self, err: JsonClientError) -> Self {
        self.replies.push_back(Err(err));
        self
    }

    /// The tokens of the `call`-th issued command, as lossy strings.
    pub fn sent_tokens(&self, call: usize) -> Vec<String> {
        self.sent[call]
            .iter()
            .map(|b| String::from_utf8_lossy(b).to_string())
            .collect()
    }
}

#[async_trait]
impl RawCommand for MockConnection {
    async fn raw_command(&mut self, tokens: Vec<Bytes>) -> Result<RespValue, JsonClientError> {
        self.sent.push(tokens);
        self.replies.pop_front().unwrap_or(Ok(RespValue::Null))
    }
}

/// Spawns a TCP peer that, for each scripted reply, reads one request and
/// writes the reply bytes verbatim. Returns the address to connect to.
pub async fn scripted_server(replies: Vec<Vec<u8>>) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        for reply in replies {
            let n = sock.read(&mut buf).await.unwrap();
            assert!(n > 0, "peer expected a request before each reply");
            sock.write_all(&reply).await.unwrap();
        }
    });
    (addr, handle)
}
