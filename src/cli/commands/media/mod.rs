mod list;
mod transport;
mod utils;
mod watch;

pub use list::ListCommand;
pub use transport::TransportCommand;
pub use utils::find_player_by_identifier;
pub use watch::WatchCommand;
pub(crate) use watch::visibility_signals;
