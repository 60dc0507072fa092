//! The networking modules handle datagram transport, packet header framing
//! and the typed byte buffers everything above is written against.

pub mod buffer;
pub mod endpoint;
pub mod frame;
pub mod shared;
