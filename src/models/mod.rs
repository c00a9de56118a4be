//! Domain models and data structures for the notifier.
//!
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (NotificationContext, DeliveryRequest)

pub mod config;
mod core;

pub use config::{ConfigError, NotifierConfig};
pub use core::{DeliveryOptions, DeliveryRequest, NotificationContext};
