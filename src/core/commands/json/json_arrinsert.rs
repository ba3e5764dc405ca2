// src/core/commands/json/json_arrinsert.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde::Serialize;

/// Represents the `JSON.ARRINSERT` command, which inserts values before the
/// given index.
#[derive(Debug, Clone, Default)]
pub struct JsonArrInsert {
    pub key: Bytes,
    pub path: JsonPath,
    pub index: i64,
    pub values_json: Vec<Bytes>,
}

impl JsonArrInsert {
    pub fn new<V: Serialize>(
        key: &str,
        path: impl IntoJsonPath,
        index: i64,
        values: &[V],
    ) -> Result<Self, JsonClientError> {
        if values.is_empty() {
            return Err(JsonClientError::InvalidArgument(
                "wrong number of arguments for 'JSON.ARRINSERT': at least one value is required"
                    .to_string(),
            ));
        }
        Ok(JsonArrInsert {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            index,
            values_json: values
                .iter()
                .map(reply::json_encode)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonArrInsert {
    fn name(&self) -> &'static str {
        "JSON.ARRINSERT"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            Bytes::from(self.index.to_string()),
        ];
        args.extend(self.values_json.iter().cloned());
        args
    }
}
