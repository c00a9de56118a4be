//! Core domain models for the notifier.
//!
//! - NotificationContext: job facts and delivery rules for one run
//! - DeliveryRequest: a finished payload plus where and how to send it

mod delivery;
mod notification;

pub use delivery::{DeliveryOptions, DeliveryRequest};
pub use notification::NotificationContext;
