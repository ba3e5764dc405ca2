// src/core/commands/json/json_resp.rs

use super::path::{IntoJsonPath, JsonPath};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.RESP` command, which returns the document in its raw
/// structural reply form. No decoding is applied.
#[derive(Debug, Clone, Default)]
pub struct JsonResp {
    pub key: Bytes,
    pub path: JsonPath,
}

impl JsonResp {
    pub fn new(key: &str, path: impl IntoJsonPath) -> Self {
        JsonResp {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
        }
    }

    pub fn decode_reply(&self, reply: RespValue) -> Result<RespValue, JsonClientError> {
        Ok(reply)
    }
}

impl CommandSpec for JsonResp {
    fn name(&self) -> &'static str {
        "JSON.RESP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ]
    }
}
