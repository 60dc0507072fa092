//! Client core for the UDP control protocol spoken by ATEM video switchers.
//!
//! The crate provides the reliable session transport layered on top of UDP
//! (hello handshake, per-packet acknowledgement, initial payload resend
//! tracking, timeout reconnection) and the bidirectional command codec that
//! mirrors switcher state locally and emits bit-exact outbound commands.
//!
//! A [`switcher::Switcher`] owns one session: an I/O thread drives the
//! socket and decodes state updates, an event thread delivers callbacks,
//! and caller threads issue setters against the output channel.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::new_without_default)]

pub mod commands;
pub mod config;
pub mod decode;
pub mod error;
pub mod events;
pub mod net;
pub mod protocol;
pub mod session;
pub mod state;
pub mod switcher;

pub mod prelude;

pub use crate::config::ConnectionConfig;
pub use crate::error::{AtemError, AtemResult};
pub use crate::events::{Event, EventKind};
pub use crate::switcher::Switcher;
