/// Typed transport operations over the host primitive
pub mod bridge;
/// Host primitive served from the D-Bus session bus
pub mod dbus_host;
/// Media player error types
pub mod error;
/// Host RPC seam
pub mod host;
/// Track metadata types
pub mod metadata;
/// Player snapshot types
pub mod player;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Identifiers, statuses and capability flags
pub mod types;
/// MPRIS utility functions
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use bridge::{HostBridge, TransportBridge};
pub use dbus_host::{DbusHost, DbusHostError};
pub use error::*;
pub use host::{HostRejection, HostRpc, methods};
pub use metadata::*;
pub use player::*;
pub use proxy::*;
pub use types::{Capabilities, LoopStatus, PlaybackStatus, PlayerId};
