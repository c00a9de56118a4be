//! End-to-end notification flow.
//!
//! Gates the job against the event and branch/tag conditions, builds the
//! message from its template, then delivers it channel by channel. Template
//! and payload problems are returned as errors before any request is made;
//! delivery problems are collected in a [`DeliveryReport`].

use crate::{
	models::{DeliveryOptions, DeliveryRequest, NotificationContext},
	services::{
		filter::FilterService,
		notification::{
			payload_builder::{apply_to_root_object, expand_env_vars},
			MessagePoster, NotificationError,
		},
		template::resolve_template,
	},
	utils::{VariableSource, DOCUMENTATION_URL},
};

/// A channel that could not be delivered to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFailure {
	pub channel: String,
	pub error: String,
}

/// Per-channel results of a delivery run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
	/// Channels that accepted the message, in delivery order
	pub delivered: Vec<String>,
	pub failures: Vec<ChannelFailure>,
}

/// Terminal state of a notification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
	/// The job status does not match the configured event
	SkippedEvent { status: String, event: String },
	/// Neither branch nor tag passed the post condition
	SkippedCondition,
	/// Every channel was attempted; failures were ignored if any
	Delivered(DeliveryReport),
	/// A channel failed and errors are not ignored; later channels were skipped
	Failed(DeliveryReport),
}

impl NotificationOutcome {
	/// Whether the run should exit successfully
	pub fn is_success(&self) -> bool {
		!matches!(self, Self::Failed(_))
	}
}

/// Runs the notification flow against a [`MessagePoster`]
pub struct NotificationService<T: MessagePoster> {
	poster: T,
	filter: FilterService,
}

impl<T: MessagePoster> NotificationService<T> {
	pub fn new(poster: T) -> Self {
		Self {
			poster,
			filter: FilterService::new(),
		}
	}

	/// Resolves the template for `context` and expands its variables.
	///
	/// The result does not carry a `channel` property yet; that is set per
	/// channel at delivery time.
	pub fn build_message_body<S: VariableSource + ?Sized>(
		&self,
		context: &NotificationContext,
		source: &S,
	) -> Result<String, NotificationError> {
		let template = resolve_template(
			&context.inline_template,
			&context.status,
			&context.named_template_ref,
			source,
		)?;
		tracing::info!(origin = ?template.origin, "Resolved message template");

		let body = apply_to_root_object(&template.body, expand_env_vars(source))?;
		Ok(body)
	}

	/// Posts the request's payload to each channel in order.
	///
	/// Stops at the first failure unless `ignore_errors` is set.
	pub async fn deliver(&self, request: &DeliveryRequest) -> NotificationOutcome {
		let mut report = DeliveryReport::default();

		for channel in &request.channels {
			match self
				.poster
				.post_message(&request.payload, channel, request.access_token.as_str())
				.await
			{
				Ok(status) => {
					tracing::info!(channel = %channel, status, "Message posted to Slack");
					report.delivered.push(channel.clone());
				}
				Err(e) => {
					tracing::error!(
						channel = %channel,
						error = %e,
						"Failed to post message. View the setup guide: {}",
						DOCUMENTATION_URL
					);
					report.failures.push(ChannelFailure {
						channel: channel.clone(),
						error: e.to_string(),
					});
					if !request.ignore_errors {
						return NotificationOutcome::Failed(report);
					}
					tracing::warn!(channel = %channel, "Ignoring delivery error");
				}
			}
		}

		NotificationOutcome::Delivered(report)
	}

	/// Runs the whole flow for one job.
	///
	/// # Arguments
	/// * `context` - Job facts and delivery rules
	/// * `options` - Credential, channels and error policy
	/// * `source` - Where template variables are looked up
	///
	/// # Returns
	/// * `Ok(NotificationOutcome)` - The run reached a terminal state
	/// * `Err(NotificationError)` - The template or payload was unusable; nothing was sent
	pub async fn execute<S: VariableSource + ?Sized>(
		&self,
		context: &NotificationContext,
		options: &DeliveryOptions,
		source: &S,
	) -> Result<NotificationOutcome, NotificationError> {
		if !self.filter.event_matches(context) {
			tracing::info!(
				"The job status {:?} does not match the status set to send alerts {:?}. \
				 Exiting without posting to Slack...",
				context.status,
				context.event
			);
			return Ok(NotificationOutcome::SkippedEvent {
				status: context.status.clone(),
				event: context.event.clone(),
			});
		}

		if !self.filter.post_condition_met(context) {
			tracing::info!(
				"The post condition is not met. Neither the branch nor the tag matches the \
				 pattern or the match is inverted. Exiting without posting to Slack..."
			);
			return Ok(NotificationOutcome::SkippedCondition);
		}

		let payload = self.build_message_body(context, source)?;
		let request = DeliveryRequest::new(payload, options);

		Ok(self.deliver(&request).await)
	}
}
