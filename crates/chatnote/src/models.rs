//! These models represent the objects attached to a chat message by the backend
//!
//! There are a few related formats we need to interact with:
//! - chat messages as exchanged with the interface, each carrying a list of annotations
//! - data stream protocol parts, where annotations arrive as `8:` lines
//! - the individual annotation payloads (sources, files, tool calls, events...)
//!
//! Each annotation is a `{"type": ..., "data": ...}` record on the wire. We decode it
//! straight into a closed enum so that callers match on the variant instead of casting
//! a loosely typed payload.
pub mod annotation;
pub mod document;
pub mod message;
pub mod role;
pub mod source;
pub mod tool;
