// src/core/commands/json/json_nummultby.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, NumberReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.NUMMULTBY` command, which multiplies a numeric value
/// within a JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonNumMultBy {
    pub key: Bytes,
    pub path: JsonPath,
    pub value: f64,
}

impl JsonNumMultBy {
    pub fn new(key: &str, path: impl IntoJsonPath, value: f64) -> Self {
        JsonNumMultBy {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            value,
        }
    }

    pub fn decode_reply(&self, reply: RespValue) -> Result<NumberReply, JsonClientError> {
        if self.path.is_dollar() {
            reply::reply_to_string(reply).map(NumberReply::Raw)
        } else {
            reply::reply_to_i64(reply).map(NumberReply::Int)
        }
    }
}

impl CommandSpec for JsonNumMultBy {
    fn name(&self) -> &'static str {
        "JSON.NUMMULTBY"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            Bytes::from(reply::format_number(self.value)),
        ]
    }
}
