use std::fmt;

use zeroize::Zeroizing;

/// Everything needed to post a finished message
///
/// One delivery attempt is made per entry in `channels`, in order.
#[derive(Clone)]
pub struct DeliveryRequest {
	/// Resolved JSON message, without the `channel` property
	pub payload: String,
	/// Bearer token for the Slack API
	pub access_token: Zeroizing<String>,
	/// Target channels, in delivery order
	pub channels: Vec<String>,
	/// Keep going after a failed channel instead of aborting the run
	pub ignore_errors: bool,
}

impl DeliveryRequest {
	pub fn new(payload: String, options: &DeliveryOptions) -> Self {
		Self {
			payload,
			access_token: options.access_token.clone(),
			channels: options.channels.clone(),
			ignore_errors: options.ignore_errors,
		}
	}
}

impl fmt::Debug for DeliveryRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DeliveryRequest")
			.field("payload", &self.payload)
			.field("access_token", &"<redacted>")
			.field("channels", &self.channels)
			.field("ignore_errors", &self.ignore_errors)
			.finish()
	}
}

/// Delivery settings loaded from configuration, before a payload exists
#[derive(Clone)]
pub struct DeliveryOptions {
	pub access_token: Zeroizing<String>,
	pub channels: Vec<String>,
	pub ignore_errors: bool,
}

impl fmt::Debug for DeliveryOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DeliveryOptions")
			.field("access_token", &"<redacted>")
			.field("channels", &self.channels)
			.field("ignore_errors", &self.ignore_errors)
			.finish()
	}
}
