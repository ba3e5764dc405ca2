// src/core/commands/json/json_get.rs

//! Builds the `JSON.GET` command for retrieving values from a JSON document.

use super::path::{IntoJsonPath, JsonPath};
use super::reply;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde_json::Value;

/// Represents the `JSON.GET` command.
#[derive(Debug, Clone, Default)]
pub struct JsonGet {
    /// The key of the JSON document.
    pub key: Bytes,
    /// One or more path expressions to query.
    pub paths: Vec<String>,
}

impl JsonGet {
    /// Zero paths defaults to querying the legacy root.
    pub fn new<P: IntoJsonPath>(key: &str, paths: impl IntoIterator<Item = P>) -> Self {
        let mut paths: Vec<String> = paths
            .into_iter()
            .map(|p| p.into_json_path().into_string())
            .collect();
        if paths.is_empty() {
            paths.push(JsonPath::root().into_string());
        }
        JsonGet {
            key: Bytes::copy_from_slice(key.as_bytes()),
            paths,
        }
    }

    /// The reply is one JSON text (an object keyed by path when several paths
    /// were queried). An absent key decodes to `None`, never a decode error.
    pub fn decode_reply(&self, reply: RespValue) -> Result<Option<Value>, JsonClientError> {
        reply::decode_json(reply)
    }
}

impl CommandSpec for JsonGet {
    fn name(&self) -> &'static str {
        "JSON.GET"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        args.extend(self.paths.iter().map(|p| Bytes::from(p.clone())));
        args
    }
}
