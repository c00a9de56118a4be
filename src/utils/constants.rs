//! Constants shared across the notifier.

use std::time::Duration;

/// Setup guide linked from configuration and Slack API errors
pub const DOCUMENTATION_URL: &str = "https://github.com/CircleCI-Public/slack-orb/wiki/Setup";

/// Base URL of the Slack Web API
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Path of the "post message" method, relative to the API base URL
pub const POST_MESSAGE_PATH: &str = "/chat.postMessage";

/// Upper bound on a single delivery attempt
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Event value that matches every job status
pub const ALWAYS_EVENT: &str = "always";

/// Root property that receives the delivery channel
pub const CHANNEL_PROPERTY: &str = "channel";

/// Dotenv file the orb writes the job status into
pub const JOB_STATUS_FILE: &str = "/tmp/SLACK_JOB_STATUS";
