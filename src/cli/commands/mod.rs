/// Configuration inspection commands
pub mod config;
/// Media player commands
pub mod media;
