// src/core/protocol/mod.rs

//! The RESP (REdis Serialization Protocol) layer: wire frames, the codec, and
//! the simplified reply value handed to the command layer.

pub mod resp_frame;
pub mod resp_value;

pub use resp_frame::{RespFrame, RespFrameCodec};
pub use resp_value::RespValue;
