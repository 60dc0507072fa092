pub use crate::config::ConnectionConfig;
pub use crate::error::{AtemError, AtemResult};
pub use crate::events::{Event, EventKind};
pub use crate::protocol::enums::*;
pub use crate::switcher::Switcher;
