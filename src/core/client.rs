// src/core/client.rs

//! The document client: explicit composition over a raw store-client handle.

use crate::core::commands::CommandSpec;
use crate::core::commands::json::json_arrappend::JsonArrAppend;
use crate::core::commands::json::json_arrindex::JsonArrIndex;
use crate::core::commands::json::json_arrinsert::JsonArrInsert;
use crate::core::commands::json::json_arrlen::JsonArrLen;
use crate::core::commands::json::json_arrpop::JsonArrPop;
use crate::core::commands::json::json_arrtrim::JsonArrTrim;
use crate::core::commands::json::json_del::JsonDel;
use crate::core::commands::json::json_get::JsonGet;
use crate::core::commands::json::json_mget::JsonMGet;
use crate::core::commands::json::json_numincrby::JsonNumIncrBy;
use crate::core::commands::json::json_nummultby::JsonNumMultBy;
use crate::core::commands::json::json_objkeys::JsonObjKeys;
use crate::core::commands::json::json_objlen::JsonObjLen;
use crate::core::commands::json::json_resp::JsonResp;
use crate::core::commands::json::json_set::{JsonSet, SetOptions};
use crate::core::commands::json::json_strappend::JsonStrAppend;
use crate::core::commands::json::json_strlen::JsonStrLen;
use crate::core::commands::json::json_type::JsonType;
use crate::core::commands::json::path::{IntoJsonPath, JsonPath};
use crate::core::commands::json::reply::{DialectReply, NumberReply};
use crate::core::{JsonClientError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The single capability consumed from the store client: invoke a raw command
/// given an ordered list of tokens and return the unstructured reply.
///
/// The bundled [`crate::connection::StoreConnection`] implements this; any
/// other store-client handle can too.
#[async_trait]
pub trait RawCommand: Send {
    async fn raw_command(&mut self, tokens: Vec<Bytes>) -> Result<RespValue, JsonClientError>;
}

/// Adds the JSON document command family on top of a raw store-client handle.
///
/// The handle is held by composition and only ever read to issue calls; the
/// client keeps no state of its own between calls. Argument validation runs
/// before any network I/O, and every reply is decoded according to the verb
/// and the path dialect used.
#[derive(Debug)]
pub struct JsonClient<C> {
    conn: C,
}

impl<C: RawCommand> JsonClient<C> {
    pub fn new(conn: C) -> Self {
        JsonClient { conn }
    }

    /// Consumes the client and returns the underlying handle.
    pub fn into_inner(self) -> C {
        self.conn
    }

    async fn call<S: CommandSpec + Sync>(&mut self, cmd: &S) -> Result<RespValue, JsonClientError> {
        debug!(command = cmd.name(), "issuing document command");
        self.conn.raw_command(cmd.command_tokens()).await
    }

    /// `JSON.SET key path value [NX|XX]`. Returns `Some("OK")` on success or
    /// `None` when an NX/XX condition was not met.
    pub async fn set<V: Serialize + Sync + ?Sized>(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        value: &V,
        options: SetOptions,
    ) -> Result<Option<String>, JsonClientError> {
        let cmd = JsonSet::new(key, path, value, options)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.GET key .` — fetches the whole document. `None` if the key does
    /// not exist.
    pub async fn get(&mut self, key: &str) -> Result<Option<Value>, JsonClientError> {
        let cmd = JsonGet::new(key, std::iter::empty::<JsonPath>());
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.GET key path [path ...]`. With several paths the store replies
    /// with one object keyed by path.
    pub async fn get_paths<P: IntoJsonPath>(
        &mut self,
        key: &str,
        paths: Vec<P>,
    ) -> Result<Option<Value>, JsonClientError> {
        let cmd = JsonGet::new(key, paths);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.MGET key [key ...] path`. One entry per key, input order
    /// preserved, `None` for absent keys.
    pub async fn mget(
        &mut self,
        keys: &[&str],
        path: impl IntoJsonPath,
    ) -> Result<Vec<Option<Value>>, JsonClientError> {
        let cmd = JsonMGet::new(keys, path)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.DEL key path`. Returns the number of paths removed.
    pub async fn del(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<i64, JsonClientError> {
        let cmd = JsonDel::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// Alias for [`JsonClient::del`]; issues the same wire command.
    pub async fn forget(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<i64, JsonClientError> {
        self.del(key, path).await
    }

    /// `JSON.TYPE key path`. `None` if the key does not exist.
    pub async fn type_of(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<Option<DialectReply<String>>, JsonClientError> {
        let cmd = JsonType::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.NUMINCRBY key path number`.
    pub async fn num_incr_by(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        number: f64,
    ) -> Result<NumberReply, JsonClientError> {
        let cmd = JsonNumIncrBy::new(key, path, number);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.NUMMULTBY key path number`.
    pub async fn num_mult_by(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        number: f64,
    ) -> Result<NumberReply, JsonClientError> {
        let cmd = JsonNumMultBy::new(key, path, number);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.STRAPPEND key path value`. Returns the new string length.
    pub async fn str_append(
        &mut self,
        key: &str,
        value: &str,
        path: impl IntoJsonPath,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonStrAppend::new(key, value, path)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.STRLEN key path`.
    pub async fn str_len(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonStrLen::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRAPPEND key path value [value ...]`. Returns the new array
    /// length.
    pub async fn arr_append<V: Serialize + Sync>(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        values: &[V],
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonArrAppend::new(key, path, values)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRINDEX key path scalar start stop`. Start/stop of 0/0 scan the
    /// whole array; the reply is -1 when the scalar is absent.
    pub async fn arr_index<V: Serialize + Sync + ?Sized>(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        scalar: &V,
        start: i64,
        stop: i64,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonArrIndex::new(key, path, scalar, start, stop)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRINSERT key path index value [value ...]`.
    pub async fn arr_insert<V: Serialize + Sync>(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        index: i64,
        values: &[V],
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonArrInsert::new(key, path, index, values)?;
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRLEN key path`.
    pub async fn arr_len(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonArrLen::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRPOP key path index`. Index -1 pops the last element. Popped
    /// elements are returned as JSON text.
    pub async fn arr_pop(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        index: i64,
    ) -> Result<DialectReply<Option<String>>, JsonClientError> {
        let cmd = JsonArrPop::new(key, path, index);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.ARRTRIM key path start stop`.
    pub async fn arr_trim(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
        start: i64,
        stop: i64,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonArrTrim::new(key, path, start, stop);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.OBJKEYS key path`.
    pub async fn obj_keys(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<DialectReply<Vec<String>>, JsonClientError> {
        let cmd = JsonObjKeys::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.OBJLEN key path`.
    pub async fn obj_len(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<DialectReply<i64>, JsonClientError> {
        let cmd = JsonObjLen::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }

    /// `JSON.RESP key path`. The raw structural reply, returned as-is.
    pub async fn resp(
        &mut self,
        key: &str,
        path: impl IntoJsonPath,
    ) -> Result<RespValue, JsonClientError> {
        let cmd = JsonResp::new(key, path);
        let reply = self.call(&cmd).await?;
        cmd.decode_reply(reply)
    }
}
