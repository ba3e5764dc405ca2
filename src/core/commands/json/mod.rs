// src/core/commands/json/mod.rs
//! The JSON document command family: one builder per verb, plus the shared
//! path and reply-shaping helpers.

// Shared decoding and dialect-shaping logic.
pub mod reply;

// The path value and its conversion seam.
pub mod path;

// One module per verb.
pub mod json_arrappend;
pub mod json_arrindex;
pub mod json_arrinsert;
pub mod json_arrlen;
pub mod json_arrpop;
pub mod json_arrtrim;
pub mod json_del;
pub mod json_get;
pub mod json_mget;
pub mod json_numincrby;
pub mod json_nummultby;
pub mod json_objkeys;
pub mod json_objlen;
pub mod json_resp;
pub mod json_set;
pub mod json_strappend;
pub mod json_strlen;
pub mod json_type;
