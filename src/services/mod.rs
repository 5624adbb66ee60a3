/// Shared reactive building blocks
pub mod common;
/// MPRIS data model, host seam and transport bridge
pub mod mpris;
/// Polling, dispatch and the mounted panel
pub mod panel;
