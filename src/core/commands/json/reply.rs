// src/core/commands/json/reply.rs

//! Contains shared logic for decoding raw store replies into document values
//! and for shaping replies according to the path dialect.

use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// A reply to a verb whose result shape depends on the path dialect.
///
/// A legacy path selects exactly one location, so the reply is a bare scalar.
/// A dollar path may match any number of locations, so the reply is a list
/// with one entry per matched location, even when exactly one matches.
#[derive(Debug, Clone, PartialEq)]
pub enum DialectReply<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> DialectReply<T> {
    pub fn into_single(self) -> Option<T> {
        match self {
            DialectReply::Single(v) => Some(v),
            DialectReply::Many(_) => None,
        }
    }

    pub fn into_many(self) -> Option<Vec<T>> {
        match self {
            DialectReply::Single(_) => None,
            DialectReply::Many(v) => Some(v),
        }
    }
}

/// A reply to `JSON.NUMINCRBY` / `JSON.NUMMULTBY`.
///
/// The store always computes a JSON array of results; under the legacy
/// dialect the single result is coerced to an integer, while under the dollar
/// dialect the raw JSON-array text (e.g. `"[1]"`) is returned unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberReply {
    Int(i64),
    Raw(String),
}

/// Serializes a native value to JSON text.
pub(crate) fn json_encode<V: Serialize + ?Sized>(value: &V) -> Result<Bytes, JsonClientError> {
    Ok(serde_json::to_vec(value)?.into())
}

/// Deserializes a JSON-text reply into a native value.
///
/// An absent key or path arrives as a null reply and decodes to `None`, never
/// an error; only malformed JSON text fails.
pub(crate) fn decode_json(reply: RespValue) -> Result<Option<Value>, JsonClientError> {
    match reply {
        RespValue::Null | RespValue::NullArray => Ok(None),
        RespValue::BulkString(b) => Ok(Some(serde_json::from_slice(&b)?)),
        RespValue::SimpleString(s) => Ok(Some(serde_json::from_str(&s)?)),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected JSON text, got {other:?}"
        ))),
    }
}

/// Maps [`decode_json`] over a per-key reply array, preserving input order and
/// passing absent-key markers through as `None` without short-circuiting.
pub(crate) fn bulk_decode(reply: RespValue) -> Result<Vec<Option<Value>>, JsonClientError> {
    match reply {
        RespValue::Array(items) => items.into_iter().map(decode_json).collect(),
        RespValue::Null | RespValue::NullArray => Ok(vec![]),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected a per-key reply array, got {other:?}"
        ))),
    }
}

/// Coerces a raw reply to an integer. Integer counts arrive as RESP integers;
/// numeric results of JSON verbs arrive as bulk text and may carry a
/// fractional part, which the legacy dialect truncates.
pub(crate) fn reply_to_i64(reply: RespValue) -> Result<i64, JsonClientError> {
    match reply {
        RespValue::Integer(i) => Ok(i),
        RespValue::BulkString(b) => parse_i64_lossy(std::str::from_utf8(&b)?),
        RespValue::SimpleString(s) => parse_i64_lossy(&s),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected an integer reply, got {other:?}"
        ))),
    }
}

fn parse_i64_lossy(s: &str) -> Result<i64, JsonClientError> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Ok(i);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(JsonClientError::NotAnInteger),
    }
}

/// Coerces a raw reply to a string.
pub(crate) fn reply_to_string(reply: RespValue) -> Result<String, JsonClientError> {
    match reply {
        RespValue::SimpleString(s) => Ok(s),
        RespValue::BulkString(b) => Ok(String::from_utf8(b.to_vec())?),
        RespValue::Integer(i) => Ok(i.to_string()),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected a string reply, got {other:?}"
        ))),
    }
}

/// Like [`reply_to_string`], but a null reply becomes `None`.
pub(crate) fn reply_to_opt_string(reply: RespValue) -> Result<Option<String>, JsonClientError> {
    if reply.is_null() {
        return Ok(None);
    }
    reply_to_string(reply).map(Some)
}

/// Coerces a reply array of strings into a `Vec<String>`. A null reply counts
/// as an empty list.
pub(crate) fn reply_to_string_list(reply: RespValue) -> Result<Vec<String>, JsonClientError> {
    match reply {
        RespValue::Array(items) => items.into_iter().map(reply_to_string).collect(),
        RespValue::Null | RespValue::NullArray => Ok(vec![]),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected a string array reply, got {other:?}"
        ))),
    }
}

/// Shapes a raw reply according to the path dialect.
///
/// Under the dollar dialect the reply is a sequence with one result per
/// matched location; each element is coerced individually. Under the legacy
/// dialect the whole reply is coerced to the verb's scalar result type. Every
/// dialect-sensitive verb funnels through here rather than branching itself.
pub(crate) fn shape_reply<T, F>(
    reply: RespValue,
    dollar: bool,
    coerce: F,
) -> Result<DialectReply<T>, JsonClientError>
where
    F: Fn(RespValue) -> Result<T, JsonClientError>,
{
    if !dollar {
        return Ok(DialectReply::Single(coerce(reply)?));
    }
    match reply {
        RespValue::Array(items) => Ok(DialectReply::Many(
            items.into_iter().map(coerce).collect::<Result<_, _>>()?,
        )),
        // Zero matched locations.
        RespValue::Null | RespValue::NullArray => Ok(DialectReply::Many(vec![])),
        other => Err(JsonClientError::UnexpectedReply(format!(
            "expected a per-location reply array, got {other:?}"
        ))),
    }
}

/// Formats a number argument to its wire token, omitting the trailing `.0`
/// for whole numbers so the token matches what an integer caller would send.
pub(crate) fn format_number(num: f64) -> String {
    if num.fract() == 0.0 && num >= i64::MIN as f64 && num <= i64::MAX as f64 {
        (num as i64).to_string()
    } else {
        num.to_string()
    }
}
