// src/core/commands/command_spec.rs

//! The seam between a typed command struct and its wire form.

use bytes::Bytes;

/// Implemented by every command struct. A command knows its wire name and can
/// serialize its arguments back into the ordered token list the store expects.
pub trait CommandSpec {
    /// The full upper-cased wire command name, e.g. `JSON.SET`.
    fn name(&self) -> &'static str;

    /// The argument tokens in wire order, excluding the command name.
    fn to_resp_args(&self) -> Vec<Bytes>;

    /// The complete token list handed to the transport: name, then arguments.
    fn command_tokens(&self) -> Vec<Bytes> {
        let args = self.to_resp_args();
        let mut tokens = Vec::with_capacity(args.len() + 1);
        tokens.push(Bytes::copy_from_slice(self.name().as_bytes()));
        tokens.extend(args);
        tokens
    }
}
