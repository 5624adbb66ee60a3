/// Fire-and-forget transport commands
pub mod dispatch;
/// Player-list polling state machine
pub mod polling;
/// Mounted panel facade
pub mod service;
/// Render-ready player controls
pub mod view;
/// Host surface focus signal
pub mod visibility;


pub use dispatch::{CommandDispatcher, TransportAction};
pub use polling::{PollingController, PollingState};
pub use service::MediaPanel;
pub use view::{PlayButton, PlayerView, render};
pub use visibility::{ParseVisibilityError, Visibility};
