// src/lib.rs

pub mod config;
pub mod connection;
pub mod core;

// Re-export
pub use crate::config::ClientConfig;
pub use crate::connection::StoreConnection;
pub use crate::core::client::{JsonClient, RawCommand};
pub use crate::core::commands::json::json_set::SetOptions;
pub use crate::core::commands::json::path::{IntoJsonPath, JsonPath};
pub use crate::core::commands::json::reply::{DialectReply, NumberReply};
pub use crate::core::{JsonClientError, RespValue};
