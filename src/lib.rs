//! Slack notifications for CI jobs.
//!
//! Reads the job status, branch and tag from the environment, decides whether
//! the job qualifies for a notification, builds the message from a JSON
//! template and posts it to each configured Slack channel.
//!
//! - `bootstrap`: startup wiring used by the binary
//! - `models`: configuration and domain types
//! - `services`: filtering, template selection and delivery
//! - `utils`: environment access, variable expansion and logging

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
