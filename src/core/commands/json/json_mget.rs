// src/core/commands/json/json_mget.rs

//! Builds the `JSON.MGET` command for retrieving one path from multiple
//! JSON documents.

use super::path::{IntoJsonPath, JsonPath};
use super::reply;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct JsonMGet {
    pub keys: Vec<Bytes>,
    pub path: JsonPath,
}

impl JsonMGet {
    /// At least one key is required; the arity check runs before any I/O.
    pub fn new(keys: &[&str], path: impl IntoJsonPath) -> Result<Self, JsonClientError> {
        if keys.is_empty() {
            return Err(JsonClientError::InvalidArgument(
                "wrong number of arguments for 'JSON.MGET': at least one key and a path are required"
                    .to_string(),
            ));
        }
        Ok(JsonMGet {
            keys: keys
                .iter()
                .map(|k| Bytes::copy_from_slice(k.as_bytes()))
                .collect(),
            path: path.into_json_path(),
        })
    }

    /// Bulk decode: one entry per key, input order preserved, absent keys
    /// passed through as `None` without short-circuiting the rest.
    pub fn decode_reply(&self, reply: RespValue) -> Result<Vec<Option<Value>>, JsonClientError> {
        reply::bulk_decode(reply)
    }
}

impl CommandSpec for JsonMGet {
    fn name(&self) -> &'static str {
        "JSON.MGET"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = self.keys.clone();
        args.push(Bytes::copy_from_slice(self.path.as_str().as_bytes()));
        args
    }
}
