//! Common utilities and abstractions for services

/// Reactive property system for owned, observable state
pub mod property;

pub use property::Property;
