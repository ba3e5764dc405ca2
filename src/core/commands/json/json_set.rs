// src/core/commands/json/json_set.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SetCondition {
    #[default]
    None,
    IfExists,    // XX
    IfNotExists, // NX
}

/// Caller-facing options for `JSON.SET`. `nx` and `xx` are mutually
/// exclusive; requesting both is an argument error, raised before any I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptions {
    pub nx: bool,
    pub xx: bool,
}

impl SetOptions {
    pub fn nx() -> Self {
        SetOptions {
            nx: true,
            xx: false,
        }
    }

    pub fn xx() -> Self {
        SetOptions {
            nx: false,
            xx: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonSet {
    pub key: Bytes,
    pub path: JsonPath,
    pub value_json: Bytes,
    pub condition: SetCondition,
}

impl JsonSet {
    pub fn new<V: Serialize + ?Sized>(
        key: &str,
        path: impl IntoJsonPath,
        value: &V,
        options: SetOptions,
    ) -> Result<Self, JsonClientError> {
        if options.nx && options.xx {
            return Err(JsonClientError::InvalidArgument(
                "nx and xx are mutually exclusive: use one, the other or neither".to_string(),
            ));
        }
        let condition = if options.nx {
            SetCondition::IfNotExists
        } else if options.xx {
            SetCondition::IfExists
        } else {
            SetCondition::None
        };

        Ok(JsonSet {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            value_json: reply::json_encode(value)?,
            condition,
        })
    }

    /// The store replies `OK`, or null when an NX/XX condition is not met.
    pub fn decode_reply(&self, reply: RespValue) -> Result<Option<String>, JsonClientError> {
        reply::reply_to_opt_string(reply)
    }
}

impl CommandSpec for JsonSet {
    fn name(&self) -> &'static str {
        "JSON.SET"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            self.value_json.clone(),
        ];
        match self.condition {
            SetCondition::IfNotExists => args.push(Bytes::from_static(b"NX")),
            SetCondition::IfExists => args.push(Bytes::from_static(b"XX")),
            SetCondition::None => {}
        }
        args
    }
}
