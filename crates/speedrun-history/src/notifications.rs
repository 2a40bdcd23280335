//! Surfacing failures to the user.

use std::borrow::Cow;
use std::error::Error;
use std::fmt::Write;
use std::io;

use serde::Serialize;

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification
{
	/// A one-line summary.
	pub title: Cow<'static, str>,

	/// Details.
	pub body: String,
}

/// What we were trying to fetch when something went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind
{
	/// All runs of a leaderboard.
	Runs,

	/// A leaderboard snapshot.
	Leaderboard,

	/// A game's metadata.
	Game,
}

impl FetchKind
{
	const fn title(self) -> &'static str
	{
		match self {
			Self::Runs => "Failed to fetch runs",
			Self::Leaderboard => "Failed to fetch leaderboard",
			Self::Game => "Failed to fetch game",
		}
	}
}

impl Notification
{
	/// Creates a new notification.
	pub fn new(title: impl Into<Cow<'static, str>>, body: impl Into<String>) -> Self
	{
		Self { title: title.into(), body: body.into() }
	}

	/// Describes a failed fetch.
	///
	/// The body contains the whole chain of error messages.
	pub fn fetch_failed(kind: FetchKind, error: &(dyn Error + 'static)) -> Self
	{
		let mut body = error.to_string();
		let mut source = error.source();

		while let Some(error) = source {
			let _ = write!(body, ": {error}");
			source = error.source();
		}

		Self::new(kind.title(), body)
	}
}

/// Something that can show [`Notification`]s.
pub trait Notifier
{
	/// Shows `notification` to the user.
	fn notify(&self, notification: Notification);
}

/// Emits notifications as `WARN` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier
{
	fn notify(&self, notification: Notification)
	{
		warn!(title = %notification.title, "{}", notification.body);
	}
}

/// Writes notifications to stderr, one per line.
///
/// Used when no tracing subscriber is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier
{
	fn notify(&self, Notification { title, body }: Notification)
	{
		use io::Write as _;

		let _ = writeln!(io::stderr().lock(), "{title}: {body}");
	}
}

#[cfg(test)]
mod tests
{
	use std::cell::RefCell;

	use http::StatusCode;
	use url::Url;

	use super::*;
	use crate::services::speedrun_com::FetchError;

	#[derive(Default)]
	struct Collect(RefCell<Vec<Notification>>);

	impl Notifier for Collect
	{
		fn notify(&self, notification: Notification)
		{
			self.0.borrow_mut().push(notification);
		}
	}

	#[test]
	fn describes_failed_fetches() -> anyhow::Result<()>
	{
		let error = FetchError::Status {
			status: StatusCode::SERVICE_UNAVAILABLE,
			url: Url::parse("https://www.speedrun.com/api/v1/runs")?,
		};

		let notifier = Collect::default();
		notifier.notify(Notification::fetch_failed(FetchKind::Runs, &error));
		notifier.notify(Notification::fetch_failed(FetchKind::Leaderboard, &error));
		notifier.notify(Notification::fetch_failed(FetchKind::Game, &error));

		let notifications = notifier.0.into_inner();
		let titles = notifications
			.iter()
			.map(|notification| &*notification.title)
			.collect::<Vec<_>>();

		assert_eq!(titles, ["Failed to fetch runs", "Failed to fetch leaderboard", "Failed to fetch game"]);
		assert_eq!(notifications[0].body, "speedrun.com responded with 503 Service Unavailable");

		Ok(())
	}

	#[test]
	fn includes_error_sources() -> anyhow::Result<()>
	{
		let json_error = serde_json::from_str::<u8>("nope").err();
		let Some(json_error) = json_error else {
			anyhow::bail!("`nope` should not parse");
		};

		let error = FetchError::Deserialize {
			url: Url::parse("https://www.speedrun.com/api/v1/games/abc")?,
			error: json_error,
		};

		let notification = Notification::fetch_failed(FetchKind::Game, &error);

		assert!(notification.body.starts_with("failed to decode response from speedrun.com: "));
		assert!(notification.body.contains("expected"));

		Ok(())
	}
}
