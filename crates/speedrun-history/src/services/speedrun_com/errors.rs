use http::StatusCode;
use url::Url;

use super::TransportError;

/// Errors that can occur when fetching data from speedrun.com.
///
/// Rate limiting is handled internally and never surfaces as an error.
#[derive(Debug, Error)]
pub enum FetchError
{
	/// The HTTP request could not be made, or the response could not be read.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// speedrun.com responded with a non-success status.
	#[error("speedrun.com responded with {status}")]
	Status
	{
		/// The status code of the response.
		status: StatusCode,

		/// The URL we requested.
		url: Url,
	},

	/// The response body did not have the shape we expected.
	#[error("failed to decode response from speedrun.com")]
	Deserialize
	{
		/// The URL we requested.
		url: Url,

		/// The underlying JSON error.
		#[source]
		error: serde_json::Error,
	},

	/// A pagination link in the response was not a valid URL.
	#[error("speedrun.com returned an invalid pagination link")]
	InvalidCursor(#[source] url::ParseError),

	/// The configured base URL cannot be extended with path segments.
	#[error("the configured base url cannot be used to build API urls")]
	InvalidBaseUrl,
}

impl FetchError
{
	/// Returns the HTTP status code speedrun.com responded with, if we got that far.
	pub fn status(&self) -> Option<StatusCode>
	{
		match *self {
			Self::Status { status, .. } => Some(status),
			Self::Transport(_)
			| Self::Deserialize { .. }
			| Self::InvalidCursor(_)
			| Self::InvalidBaseUrl => None,
		}
	}
}
