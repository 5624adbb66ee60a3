//! media-panel - a small panel displaying and controlling MPRIS media players.
//!
//! The panel reaches the outside world through one asynchronous host
//! primitive, [`HostRpc::invoke`](services::mpris::HostRpc::invoke). On top
//! of it sit:
//!
//! - a typed [`TransportBridge`](services::mpris::TransportBridge) with one
//!   operation per host method
//! - a [`PollingController`](services::panel::PollingController) refreshing
//!   the player list while the host surface is focused
//! - a fire-and-forget [`CommandDispatcher`](services::panel::CommandDispatcher)
//!   for play/pause, next and previous
//!
//! [`MediaPanel`](services::panel::MediaPanel) composes them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use media_panel::{
//!     config::PanelConfig,
//!     services::{
//!         mpris::{DbusHost, HostBridge},
//!         panel::{MediaPanel, TransportAction, Visibility},
//!     },
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let host = DbusHost::connect().await?;
//! let panel = MediaPanel::mount(Arc::new(HostBridge::new(host)), &PanelConfig::default());
//!
//! for view in panel.views() {
//!     println!("{} - {}", view.title, view.artist);
//!     panel.dispatch(TransportAction::PlayPause, view.id);
//! }
//!
//! panel.visibility_changed(Visibility::Blurred);
//! panel.unmount();
//! # Ok(())
//! # }
//! ```

/// Command-line interface.
pub mod cli;

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Player-state synchronization and command dispatch.
pub mod services;

/// Logging initialisation.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{PanelError, Result};
