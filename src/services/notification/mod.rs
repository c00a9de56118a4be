//! Slack notification building and delivery.
//!
//! - payload_builder: JSON transformations applied to the message template
//! - slack: Slack Web API client
//! - service: the orchestrator tying filtering, templates and delivery together

mod error;
mod payload_builder;
mod service;
mod slack;

pub use error::NotificationError;
pub use payload_builder::{
	add_root_property, apply_to_root_object, expand_env_vars, PayloadError, RootObject,
};
pub use service::{ChannelFailure, DeliveryReport, NotificationOutcome, NotificationService};
pub use slack::{MessagePoster, SlackClient};
