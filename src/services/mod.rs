//! Services implementing the notification flow.
//!
//! - filter: event and branch/tag gates
//! - template: message template selection
//! - notification: payload transformation, Slack delivery and orchestration

pub mod filter;
pub mod notification;
pub mod template;
