// src/core/commands/json/json_del.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.DEL` command. `forget` is an alias and issues the
/// same wire command.
#[derive(Debug, Clone, Default)]
pub struct JsonDel {
    pub key: Bytes,
    pub path: JsonPath,
}

impl JsonDel {
    pub fn new(key: &str, path: impl IntoJsonPath) -> Self {
        JsonDel {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
        }
    }

    /// The number of paths removed; 0 for a missing key.
    pub fn decode_reply(&self, reply: RespValue) -> Result<i64, JsonClientError> {
        reply::reply_to_i64(reply)
    }
}

impl CommandSpec for JsonDel {
    fn name(&self) -> &'static str {
        "JSON.DEL"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ]
    }
}
