//! The HTTP layer underneath [`SpeedrunComService`].
//!
//! [`SpeedrunComService`]: super::SpeedrunComService

use std::error::Error as StdError;
use std::time::Duration;

use bytes::Bytes;
use derive_more::Debug;
use http::StatusCode;
use url::Url;

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse
{
	/// The response's status code.
	pub status: StatusCode,

	/// The full response body.
	#[debug("{} bytes", body.len())]
	pub body: Bytes,
}

/// Something that can make `GET` requests.
///
/// The service only ever reads JSON over `GET`, so this is all it needs from
/// an HTTP client. Non-success statuses are not errors at this layer.
pub trait Transport: Send + Sync
{
	/// Requests `url` and buffers the response.
	fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// An error from the underlying HTTP client.
#[derive(Debug, Error)]
#[error("failed to make http request")]
pub struct TransportError(#[source] Box<dyn StdError + Send + Sync>);

impl TransportError
{
	/// Wraps an arbitrary error.
	pub fn new<E>(error: E) -> Self
	where
		E: Into<Box<dyn StdError + Send + Sync>>,
	{
		Self(error.into())
	}
}

impl From<reqwest::Error> for TransportError
{
	fn from(error: reqwest::Error) -> Self
	{
		Self::new(error)
	}
}

/// The default [`Transport`], backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport
{
	#[debug("reqwest::Client")]
	http_client: reqwest::Client,
}

impl ReqwestTransport
{
	/// Builds a new HTTP client.
	pub fn new(user_agent: &str, timeout: Duration) -> reqwest::Result<Self>
	{
		reqwest::Client::builder()
			.user_agent(user_agent)
			.timeout(timeout)
			.build()
			.map(Self::from_client)
	}

	/// Uses an existing HTTP client.
	pub const fn from_client(http_client: reqwest::Client) -> Self
	{
		Self { http_client }
	}
}

impl Transport for ReqwestTransport
{
	fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send
	{
		let request = self.http_client.get(url.clone());

		async move {
			let response = request.send().await?;
			let status = response.status();
			let body = response.bytes().await?;

			Ok(RawResponse { status, body })
		}
	}
}
